// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracklog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracklog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::NodeId;

/// Junction shapes used where tracks meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Junction {
    /// Leftmost track of a convergence: continues downwards and collects tracks from the right.
    DownRight,
    /// Any other converging track: joins the horizontal run towards the leftmost one.
    LeftRight,
    /// An extra parent lineage leaving a merge node towards the right.
    FanOut,
}

/// A single character cell of the graph area, independent of charset and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Blank,
    Vertical,
    Horizontal,
    Node,
    Junction(Junction),
    /// One-column shift of a track to the left, between two track columns.
    Diagonal,
    /// Upper end of a multi-column shift, at the track's old column.
    ShiftStart,
    /// Lower end of a multi-column shift, at the track's new column.
    ShiftEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    glyph: Glyph,
    track: Option<usize>,
}

impl Cell {
    pub const BLANK: Self = Self { glyph: Glyph::Blank, track: None };

    pub fn new(glyph: Glyph, track: usize) -> Self {
        Self { glyph, track: Some(track) }
    }

    pub fn glyph(&self) -> Glyph {
        self.glyph
    }

    /// Track column the cell belongs to, used for coloring.
    pub fn track(&self) -> Option<usize> {
        self.track
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Tracks collapsing into a shared parent.
    Convergence,
    /// Tracks moving left after a convergence.
    Shift,
    /// The primary line of a node.
    Node,
    /// Plain continuation of every open track between two nodes.
    Connector,
}

/// One rendered output line.
///
/// Track `i` is drawn in cell `2 * i`; odd cells are the gaps between tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphLine {
    kind: LineKind,
    node: Option<NodeId>,
    cells: Vec<Cell>,
    label: Option<String>,
}

impl GraphLine {
    pub(crate) fn new(kind: LineKind, cells: Vec<Cell>) -> Self {
        Self { kind, node: None, cells, label: None }
    }

    pub(crate) fn node_line(node: NodeId, cells: Vec<Cell>, label: String) -> Self {
        Self { kind: LineKind::Node, node: Some(node), cells, label: Some(label) }
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// The node drawn on this line (node lines only).
    pub fn node(&self) -> Option<&NodeId> {
        self.node.as_ref()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The truncated label (node lines only).
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn glyphs(&self) -> impl Iterator<Item = Glyph> + '_ {
        self.cells.iter().map(Cell::glyph)
    }

    pub fn has_junctions(&self) -> bool {
        self.glyphs().any(|glyph| matches!(glyph, Glyph::Junction(_)))
    }
}

/// Sparse cell writer; unwritten cells are blank.
#[derive(Debug, Default)]
pub(crate) struct RowBuilder {
    cells: Vec<Cell>,
}

impl RowBuilder {
    pub(crate) fn with_tracks(tracks: usize) -> Self {
        Self { cells: Vec::with_capacity((tracks * 2).saturating_sub(1)) }
    }

    pub(crate) fn put(&mut self, x: usize, glyph: Glyph, track: usize) {
        if self.cells.len() <= x {
            self.cells.resize(x + 1, Cell::BLANK);
        }
        self.cells[x] = Cell::new(glyph, track);
    }

    pub(crate) fn finish(self) -> Vec<Cell> {
        self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Glyph, RowBuilder};

    #[test]
    fn row_builder_fills_gaps_with_blanks() {
        let mut row = RowBuilder::default();
        row.put(2, Glyph::Vertical, 1);
        row.put(0, Glyph::Node, 0);

        let cells = row.finish();
        assert_eq!(cells, vec![Cell::new(Glyph::Node, 0), Cell::BLANK, Cell::new(Glyph::Vertical, 1)]);
    }
}
