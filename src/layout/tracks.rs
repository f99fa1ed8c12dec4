// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracklog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracklog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smallvec::SmallVec;

use crate::model::{HistoryNode, NodeId};

/// Column assignment state for one render pass.
///
/// Each slot holds the id of the most recently drawn node whose lineage is still open, i.e. the
/// node is waiting for one of its parents to be drawn. A merge node holds one slot per parent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackTable {
    slots: Vec<NodeId>,
}

/// A surviving slot that moved left during a convergence step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackShift {
    from: usize,
    to: usize,
}

impl TrackShift {
    /// Column before the convergence step.
    pub fn from(&self) -> usize {
        self.from
    }

    /// Column after the convergence step.
    pub fn to(&self) -> usize {
        self.to
    }

    /// Number of columns the slot moved left.
    pub fn distance(&self) -> usize {
        self.from - self.to
    }
}

/// A step where two or more open lineages arrive at the same node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Convergence {
    matched: SmallVec<[usize; 4]>,
    width_before: usize,
    shifts: Vec<TrackShift>,
}

impl Convergence {
    /// Column the node occupies after the step (the leftmost matched column).
    pub fn column(&self) -> usize {
        self.matched[0]
    }

    /// Matched columns of the pre-step table, ascending.
    pub fn matched(&self) -> &[usize] {
        &self.matched
    }

    /// Rightmost matched column of the pre-step table.
    pub fn last_matched(&self) -> usize {
        self.matched[self.matched.len() - 1]
    }

    pub fn is_matched(&self, column: usize) -> bool {
        self.matched.binary_search(&column).is_ok()
    }

    /// Table width before matched slots were collapsed.
    pub fn width_before(&self) -> usize {
        self.width_before
    }

    /// Surviving slots that moved left, ordered by their new column.
    pub fn shifts(&self) -> &[TrackShift] {
        &self.shifts
    }
}

/// Outcome of placing a node into the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// No open lineage was waiting for the node; it starts a new track on the right.
    Appended { column: usize },
    /// Exactly one lineage was waiting; the node continues it.
    Continued { column: usize },
    Converged(Convergence),
}

impl Resolution {
    pub fn column(&self) -> usize {
        match self {
            Self::Appended { column } | Self::Continued { column } => *column,
            Self::Converged(convergence) => convergence.column(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The node lists a child that has no open track waiting for it.
    MissingChildTrack { node: NodeId, child: NodeId },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingChildTrack { node, child } => {
                write!(f, "child {child} of node {node} has no open track")
            }
        }
    }
}

impl std::error::Error for ResolveError {}

impl TrackTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[NodeId] {
        &self.slots
    }

    /// Number of slots currently held by `id`.
    pub fn count_of(&self, id: &NodeId) -> usize {
        self.slots.iter().filter(|held| *held == id).count()
    }

    /// Places `node` into the table, collapsing every lineage that was waiting for it.
    ///
    /// Each child id claims the leftmost slot it holds; a merge child holding several slots only
    /// releases one of them per parent.
    ///
    /// Convergence rebuilds the slot vector, so a step costs O(width).
    pub fn resolve(&mut self, node: &HistoryNode) -> Result<Resolution, ResolveError> {
        let mut matched = SmallVec::<[usize; 4]>::new();
        for child in node.children() {
            let column = self.slots.iter().position(|held| held == child).ok_or_else(|| {
                ResolveError::MissingChildTrack { node: node.id().clone(), child: child.clone() }
            })?;
            matched.push(column);
        }

        match matched.len() {
            0 => {
                self.slots.push(node.id().clone());
                Ok(Resolution::Appended { column: self.slots.len() - 1 })
            }
            1 => {
                let column = matched[0];
                self.slots[column] = node.id().clone();
                Ok(Resolution::Continued { column })
            }
            _ => {
                matched.sort_unstable();
                Ok(Resolution::Converged(self.collapse(node.id(), matched)))
            }
        }
    }

    fn collapse(&mut self, id: &NodeId, matched: SmallVec<[usize; 4]>) -> Convergence {
        let width_before = self.slots.len();
        let column = matched[0];
        let mut next = Vec::with_capacity(width_before + 1 - matched.len());
        let mut shifts = Vec::new();
        let mut removed = 0usize;

        for (idx, held) in std::mem::take(&mut self.slots).into_iter().enumerate() {
            if idx == column {
                next.push(id.clone());
            }
            if matched.binary_search(&idx).is_ok() {
                removed += 1;
                continue;
            }
            if removed > 1 {
                shifts.push(TrackShift { from: idx, to: next.len() });
            }
            next.push(held);
        }

        self.slots = next;
        tracing::debug!(
            node = %id,
            matched = ?matched.as_slice(),
            shifted = shifts.len(),
            "tracks converged"
        );

        Convergence { matched, width_before, shifts }
    }

    /// Opens one extra track per additional parent of `node`, on the right end of the table.
    ///
    /// Returns the number of tracks added.
    pub fn fan_out(&mut self, node: &HistoryNode) -> usize {
        let extra = node.parent_count().saturating_sub(1);
        for _ in 0..extra {
            self.slots.push(node.id().clone());
        }
        extra
    }
}
