// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracklog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracklog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::layout::{Convergence, Resolution, ResolveError, TrackTable};
use crate::model::{HistoryNode, NodeId};

use super::glyph::{Glyph, GraphLine, Junction, LineKind, RowBuilder};
use super::text::{line_text, truncate_with_ellipsis};
use super::RenderOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The node still holds an open track, so it was pushed before.
    DuplicateNode { id: NodeId },
    DuplicateParent { node: NodeId, parent: NodeId },
    Resolve(ResolveError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateNode { id } => write!(f, "node {id} was already rendered"),
            Self::DuplicateParent { node, parent } => {
                write!(f, "node {node} lists parent {parent} more than once")
            }
            Self::Resolve(err) => write!(f, "inconsistent history: {err}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Resolve(err) => Some(err),
            Self::DuplicateNode { .. } | Self::DuplicateParent { .. } => None,
        }
    }
}

impl From<ResolveError> for RenderError {
    fn from(value: ResolveError) -> Self {
        Self::Resolve(value)
    }
}

/// Streaming history graph renderer.
///
/// Feed nodes in descendant-before-ancestor order with [`GraphRenderer::push`]. Each push emits
/// the connector line for the previous node (if any), then convergence/shift lines, then the
/// node's own line, so nothing trails the last node.
///
/// Only the track table is kept between pushes. Whole-history checks (ordering, nodes pushed
/// again after their lineage closed) belong to [`crate::model::HistoryFeed`].
#[derive(Debug, Clone)]
pub struct GraphRenderer {
    options: RenderOptions,
    tracks: TrackTable,
    rendered: usize,
}

impl GraphRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options, tracks: TrackTable::new(), rendered: 0 }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn tracks(&self) -> &TrackTable {
        &self.tracks
    }

    /// Number of nodes rendered so far.
    pub fn rendered(&self) -> usize {
        self.rendered
    }

    /// Renders `node`, appending its lines to `out`.
    ///
    /// On error nothing is appended and the renderer state is left as it was before the call.
    pub fn push(&mut self, node: &HistoryNode, out: &mut Vec<GraphLine>) -> Result<(), RenderError> {
        if self.tracks.count_of(node.id()) > 0 {
            return Err(RenderError::DuplicateNode { id: node.id().clone() });
        }
        let parents = node.parents();
        if let Some(parent) =
            parents.iter().enumerate().find_map(|(idx, p)| parents[..idx].contains(p).then_some(p))
        {
            return Err(RenderError::DuplicateParent {
                node: node.id().clone(),
                parent: parent.clone(),
            });
        }

        let connector = (self.rendered > 0).then(|| connector_line(&self.tracks));
        let resolution = self.tracks.resolve(node)?;

        out.extend(connector);
        if let Resolution::Converged(convergence) = &resolution {
            out.push(convergence_line(convergence));
            push_shift_lines(convergence, self.tracks.len(), out);
        }

        let column = resolution.column();
        out.push(node_line(&self.tracks, column, node, &self.options));
        self.tracks.fan_out(node);
        self.rendered += 1;

        tracing::trace!(node = %node.id(), column, tracks = self.tracks.len(), "rendered node");
        Ok(())
    }

    /// Ends the pass and returns the lineages that are still open.
    ///
    /// A non-empty table is expected when the feed was cut off by a range limit.
    pub fn finish(self) -> TrackTable {
        self.tracks
    }
}

fn connector_line(tracks: &TrackTable) -> GraphLine {
    let mut row = RowBuilder::with_tracks(tracks.len());
    for idx in 0..tracks.len() {
        row.put(idx * 2, Glyph::Vertical, idx);
    }
    GraphLine::new(LineKind::Connector, row.finish())
}

fn convergence_line(convergence: &Convergence) -> GraphLine {
    let first = convergence.column();
    let last = convergence.last_matched();
    let width = convergence.width_before();

    let mut row = RowBuilder::with_tracks(width);
    for idx in 0..width {
        let glyph = if idx == first {
            Glyph::Junction(Junction::DownRight)
        } else if convergence.is_matched(idx) {
            Glyph::Junction(Junction::LeftRight)
        } else if idx < first || idx > last {
            Glyph::Vertical
        } else {
            Glyph::Horizontal
        };
        let track = if (first..=last).contains(&idx) { first } else { idx };
        row.put(idx * 2, glyph, track);

        if (first..last).contains(&idx) {
            row.put(idx * 2 + 1, Glyph::Horizontal, first);
        }
    }
    GraphLine::new(LineKind::Convergence, row.finish())
}

/// Emits the rows that move surviving tracks into their new columns.
///
/// All one-column moves share a diagonal row; each longer move gets its own bracketed row. Tracks
/// that still wait for their own row are drawn at their old column.
fn push_shift_lines(convergence: &Convergence, width: usize, out: &mut Vec<GraphLine>) {
    let shifts = convergence.shifts();
    if shifts.is_empty() {
        return;
    }

    let mut distance = vec![0usize; width];
    for shift in shifts {
        distance[shift.to()] = shift.distance();
    }

    if distance.iter().any(|d| *d == 1) {
        let mut row = RowBuilder::with_tracks(width + 1);
        for (idx, d) in distance.iter().enumerate() {
            match *d {
                0 => row.put(idx * 2, Glyph::Vertical, idx),
                1 => row.put(idx * 2 + 1, Glyph::Diagonal, idx),
                d => row.put((idx + d) * 2, Glyph::Vertical, idx),
            }
        }
        out.push(GraphLine::new(LineKind::Shift, row.finish()));
    }

    for shift in shifts.iter().filter(|shift| shift.distance() > 1) {
        let moving = shift.to();
        let mut row = RowBuilder::with_tracks(shift.from() + 1);
        for (idx, d) in distance.iter().enumerate() {
            if idx == moving {
                row.put(idx * 2, Glyph::ShiftEnd, idx);
                for x in idx * 2 + 1..shift.from() * 2 {
                    row.put(x, Glyph::Horizontal, idx);
                }
                row.put(shift.from() * 2, Glyph::ShiftStart, idx);
            } else if idx > moving && *d > 1 {
                row.put((idx + d) * 2, Glyph::Vertical, idx);
            } else {
                row.put(idx * 2, Glyph::Vertical, idx);
            }
        }
        out.push(GraphLine::new(LineKind::Shift, row.finish()));
        tracing::debug!(from = shift.from(), to = shift.to(), "track shifted");
    }
}

fn node_line(
    tracks: &TrackTable,
    column: usize,
    node: &HistoryNode,
    options: &RenderOptions,
) -> GraphLine {
    let width = tracks.len();
    let extra = node.parent_count().saturating_sub(1);

    let mut row = RowBuilder::with_tracks(width + extra);
    for idx in 0..width {
        match idx.cmp(&column) {
            std::cmp::Ordering::Less => row.put(idx * 2, Glyph::Vertical, idx),
            std::cmp::Ordering::Equal => row.put(idx * 2, Glyph::Node, idx),
            std::cmp::Ordering::Greater => row.put(idx * 2, Glyph::Horizontal, column),
        }
        if extra > 0 && idx >= column {
            row.put(idx * 2 + 1, Glyph::Horizontal, column);
        }
    }
    for k in 0..extra {
        let track = width + k;
        if k > 0 {
            row.put(track * 2 - 1, Glyph::Horizontal, column);
        }
        row.put(track * 2, Glyph::Junction(Junction::FanOut), track);
    }

    let label = truncate_with_ellipsis(node.label(), options.label_width);
    GraphLine::node_line(node.id().clone(), row.finish(), label)
}

/// Renders a whole node sequence in one pass.
pub fn render_graph<'a>(
    nodes: impl IntoIterator<Item = &'a HistoryNode>,
    options: RenderOptions,
) -> Result<Vec<GraphLine>, RenderError> {
    let mut renderer = GraphRenderer::new(options);
    let mut out = Vec::new();
    for node in nodes {
        renderer.push(node, &mut out)?;
    }

    let open = renderer.finish();
    if !open.is_empty() {
        tracing::debug!(open = open.len(), "render finished with open lineages");
    }
    Ok(out)
}

/// Renders a whole node sequence to newline-separated plain text.
pub fn render_graph_text<'a>(
    nodes: impl IntoIterator<Item = &'a HistoryNode>,
    options: RenderOptions,
) -> Result<String, RenderError> {
    let lines = render_graph(nodes, options)?;
    let text = lines.iter().map(|line| line_text(line, &options)).collect::<Vec<_>>();
    Ok(text.join("\n"))
}
