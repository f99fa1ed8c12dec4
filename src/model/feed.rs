// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracklog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracklog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{HashMap, HashSet};
use std::fmt;

use super::ids::NodeId;
use super::node::HistoryNode;

/// An ordered, adjacency-complete node sequence ready for rendering.
///
/// Construction computes every node's child set from the declared parent edges and checks the
/// descendant-before-ancestor ordering. The node order is never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryFeed {
    nodes: Vec<HistoryNode>,
    boundary_parents: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// The feed holds no nodes at all.
    NoHistoryRoot,
    DuplicateNode { id: NodeId },
    SelfParent { id: NodeId },
    DuplicateParent { node: NodeId, parent: NodeId },
    /// A parent appears earlier in the feed than its child.
    OrderViolation { node: NodeId, parent: NodeId },
    /// A parent is absent from the feed (strict mode only).
    UnknownParent { node: NodeId, parent: NodeId },
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoHistoryRoot => f.write_str("no valid history root found"),
            Self::DuplicateNode { id } => write!(f, "node {id} appears more than once"),
            Self::SelfParent { id } => write!(f, "node {id} lists itself as a parent"),
            Self::DuplicateParent { node, parent } => {
                write!(f, "node {node} lists parent {parent} more than once")
            }
            Self::OrderViolation { node, parent } => {
                write!(f, "parent {parent} appears before its child {node}")
            }
            Self::UnknownParent { node, parent } => {
                write!(f, "parent {parent} of node {node} is not part of the history")
            }
        }
    }
}

impl std::error::Error for FeedError {}

impl HistoryFeed {
    /// Builds a feed, allowing parents that are not part of the node set (range-limited history).
    pub fn from_nodes(nodes: Vec<HistoryNode>) -> Result<Self, FeedError> {
        Self::build(nodes, false)
    }

    /// Builds a feed that must be closed under the parent relation.
    pub fn from_nodes_strict(nodes: Vec<HistoryNode>) -> Result<Self, FeedError> {
        Self::build(nodes, true)
    }

    fn build(mut nodes: Vec<HistoryNode>, strict: bool) -> Result<Self, FeedError> {
        if nodes.is_empty() {
            return Err(FeedError::NoHistoryRoot);
        }

        let mut index_of = HashMap::<NodeId, usize>::with_capacity(nodes.len());
        for (idx, node) in nodes.iter().enumerate() {
            if index_of.insert(node.id().clone(), idx).is_some() {
                return Err(FeedError::DuplicateNode { id: node.id().clone() });
            }
        }

        let mut edges = Vec::<(usize, NodeId)>::new();
        let mut boundary_parents = 0usize;
        for (idx, node) in nodes.iter().enumerate() {
            let mut seen = HashSet::<&NodeId>::with_capacity(node.parent_count());
            for parent in node.parents() {
                if parent == node.id() {
                    return Err(FeedError::SelfParent { id: node.id().clone() });
                }
                if !seen.insert(parent) {
                    return Err(FeedError::DuplicateParent {
                        node: node.id().clone(),
                        parent: parent.clone(),
                    });
                }

                match index_of.get(parent) {
                    Some(&parent_idx) if parent_idx < idx => {
                        return Err(FeedError::OrderViolation {
                            node: node.id().clone(),
                            parent: parent.clone(),
                        });
                    }
                    Some(&parent_idx) => edges.push((parent_idx, node.id().clone())),
                    None if strict => {
                        return Err(FeedError::UnknownParent {
                            node: node.id().clone(),
                            parent: parent.clone(),
                        });
                    }
                    None => {
                        tracing::debug!(node = %node.id(), parent = %parent, "boundary parent");
                        boundary_parents += 1;
                    }
                }
            }
        }

        for (parent_idx, child) in edges {
            if let Some(parent) = nodes.get_mut(parent_idx) {
                parent.children_mut().insert(child);
            }
        }

        Ok(Self { nodes, boundary_parents })
    }

    pub fn nodes(&self) -> &[HistoryNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of parent edges that point outside the feed.
    pub fn boundary_parents(&self) -> usize {
        self.boundary_parents
    }

    pub fn into_nodes(self) -> Vec<HistoryNode> {
        self.nodes
    }
}

impl<'a> IntoIterator for &'a HistoryFeed {
    type Item = &'a HistoryNode;
    type IntoIter = std::slice::Iter<'a, HistoryNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
