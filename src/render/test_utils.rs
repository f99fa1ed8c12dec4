// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracklog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracklog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{HistoryFeed, HistoryNode, NodeId};

use super::{graph_text, Charset, GraphLine, LineKind};

pub(super) fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

/// Builds a feed from `(id, parents)` pairs; each node is labelled with its id.
pub(super) fn feed(entries: &[(&str, &[&str])]) -> HistoryFeed {
    let nodes = entries
        .iter()
        .map(|(id, parents)| HistoryNode::new(nid(id), parents.iter().map(|p| nid(p)), *id))
        .collect();
    HistoryFeed::from_nodes(nodes).expect("feed")
}

pub(super) fn graphs(lines: &[GraphLine], charset: Charset) -> Vec<String> {
    lines.iter().map(|line| graph_text(line, charset)).collect()
}

pub(super) fn kinds(lines: &[GraphLine]) -> Vec<LineKind> {
    lines.iter().map(GraphLine::kind).collect()
}
