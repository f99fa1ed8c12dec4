// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracklog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracklog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use smallvec::SmallVec;

use super::ids::NodeId;

/// Parent ids in declaration order. The first parent is the mainline parent.
pub type ParentIds = SmallVec<[NodeId; 2]>;

/// One point in the history graph, as consumed by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryNode {
    id: NodeId,
    parents: ParentIds,
    children: BTreeSet<NodeId>,
    label: String,
}

impl HistoryNode {
    pub fn new(
        id: NodeId,
        parents: impl IntoIterator<Item = NodeId>,
        label: impl Into<String>,
    ) -> Self {
        Self { id, parents: parents.into_iter().collect(), children: BTreeSet::new(), label: label.into() }
    }

    /// Replaces the child set. Normally `HistoryFeed` computes children from parent edges; this
    /// is for callers that stream nodes with adjacency they computed themselves.
    pub fn with_children(mut self, children: impl IntoIterator<Item = NodeId>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn parents(&self) -> &[NodeId] {
        &self.parents
    }

    pub fn parent_count(&self) -> usize {
        self.parents.len()
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    pub fn children(&self) -> &BTreeSet<NodeId> {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut BTreeSet<NodeId> {
        &mut self.children
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Composes a display label from ref decorations and a subject line: `(<refs>) <subject>`.
pub fn compose_label(refs: &str, subject: &str) -> String {
    let refs = refs.trim();
    let subject = subject.trim();
    match (refs.is_empty(), subject.is_empty()) {
        (true, _) => subject.to_owned(),
        (false, true) => format!("({refs})"),
        (false, false) => format!("({refs}) {subject}"),
    }
}
