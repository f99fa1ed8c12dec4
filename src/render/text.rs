// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracklog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracklog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::glyph::{Cell, Glyph, GraphLine, Junction};
use super::RenderOptions;

pub const UNICODE_BOX_HORIZONTAL: char = '─';
pub const UNICODE_BOX_VERTICAL: char = '│';
pub const UNICODE_NODE: char = '●';
pub const UNICODE_DIAGONAL: char = '╱';

pub const ASCII_HORIZONTAL: char = '-';
pub const ASCII_VERTICAL: char = '|';
pub const ASCII_NODE: char = '*';
pub const ASCII_DIAGONAL: char = '/';
pub const ASCII_JUNCTION: char = '+';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    #[default]
    Unicode,
    Ascii,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoxEdges(u8);

impl BoxEdges {
    const LEFT: Self = Self(1 << 0);
    const RIGHT: Self = Self(1 << 1);
    const UP: Self = Self(1 << 2);
    const DOWN: Self = Self(1 << 3);

    fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
}

fn box_char_from_edges(edges: BoxEdges) -> char {
    match edges.0 {
        0 => ' ',
        1..=3 => UNICODE_BOX_HORIZONTAL,
        4 | 8 | 12 => UNICODE_BOX_VERTICAL,
        10 => '┌',
        9 => '┐',
        6 => '└',
        5 => '┘',
        14 => '├',
        13 => '┤',
        11 => '┬',
        7 => '┴',
        _ => '┼',
    }
}

fn junction_edges(junction: Junction) -> BoxEdges {
    match junction {
        Junction::DownRight => BoxEdges::UP.union(BoxEdges::DOWN).union(BoxEdges::RIGHT),
        Junction::LeftRight => BoxEdges::UP.union(BoxEdges::LEFT).union(BoxEdges::RIGHT),
        Junction::FanOut => BoxEdges::LEFT.union(BoxEdges::RIGHT).union(BoxEdges::DOWN),
    }
}

fn connects_sideways(cell: Option<&Cell>) -> bool {
    matches!(cell.map(Cell::glyph), Some(Glyph::Horizontal))
}

/// Maps the cell at `idx` to a character.
///
/// Junction arms only survive if the neighbouring gap carries a horizontal run, so the last
/// junction of a run closes it (`┘`, `┐`) instead of pointing into empty space.
fn cell_char(cells: &[Cell], idx: usize, charset: Charset) -> char {
    let glyph = match cells.get(idx) {
        Some(cell) => cell.glyph(),
        None => return ' ',
    };

    match (charset, glyph) {
        (_, Glyph::Blank) => ' ',
        (Charset::Unicode, Glyph::Vertical) => UNICODE_BOX_VERTICAL,
        (Charset::Unicode, Glyph::Horizontal) => UNICODE_BOX_HORIZONTAL,
        (Charset::Unicode, Glyph::Node) => UNICODE_NODE,
        (Charset::Unicode, Glyph::Diagonal) => UNICODE_DIAGONAL,
        (Charset::Unicode, Glyph::ShiftStart) => {
            box_char_from_edges(BoxEdges::UP.union(BoxEdges::LEFT))
        }
        (Charset::Unicode, Glyph::ShiftEnd) => {
            box_char_from_edges(BoxEdges::RIGHT.union(BoxEdges::DOWN))
        }
        (Charset::Unicode, Glyph::Junction(junction)) => {
            let mut edges = junction_edges(junction);
            let prev = idx.checked_sub(1).and_then(|prev| cells.get(prev));
            if !connects_sideways(prev) {
                edges = edges.without(BoxEdges::LEFT);
            }
            if !connects_sideways(cells.get(idx + 1)) {
                edges = edges.without(BoxEdges::RIGHT);
            }
            box_char_from_edges(edges)
        }
        (Charset::Ascii, Glyph::Vertical) => ASCII_VERTICAL,
        (Charset::Ascii, Glyph::Horizontal) => ASCII_HORIZONTAL,
        (Charset::Ascii, Glyph::Node) => ASCII_NODE,
        (Charset::Ascii, Glyph::Diagonal) => ASCII_DIAGONAL,
        (Charset::Ascii, Glyph::Junction(_) | Glyph::ShiftStart | Glyph::ShiftEnd) => {
            ASCII_JUNCTION
        }
    }
}

/// Characters for every cell of a line, trailing blanks removed.
pub(crate) fn cell_chars(cells: &[Cell], charset: Charset) -> Vec<char> {
    let mut chars: Vec<char> = (0..cells.len()).map(|idx| cell_char(cells, idx, charset)).collect();
    while matches!(chars.last(), Some(' ')) {
        chars.pop();
    }
    chars
}

/// The graph area of a line as plain text.
pub fn graph_text(line: &GraphLine, charset: Charset) -> String {
    cell_chars(line.cells(), charset).into_iter().collect()
}

/// The abbreviated id padded to the id field width (blank for non-node lines).
pub(crate) fn id_field(line: &GraphLine, id_width: usize) -> String {
    let abbrev = line.node().map(|id| id.abbrev(id_width)).unwrap_or("");
    let mut field = String::with_capacity(id_width);
    field.push_str(abbrev);
    for _ in text_len(abbrev)..id_width {
        field.push(' ');
    }
    field
}

/// One complete output line: id field, graph area, label. Trailing spaces are trimmed.
pub fn line_text(line: &GraphLine, options: &RenderOptions) -> String {
    let mut text = id_field(line, options.id_width);
    if options.id_width > 0 {
        text.push(' ');
    }
    text.push_str(&graph_text(line, options.charset));
    if let Some(label) = line.label().filter(|label| !label.is_empty()) {
        text.push(' ');
        text.push_str(label);
    }
    text.trim_end_matches(' ').to_owned()
}

pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    let len = text_len(text);
    if len <= max_len {
        return text.to_owned();
    }

    if max_len == 1 {
        return "…".to_owned();
    }

    let mut out: String = text.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}
