// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracklog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracklog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering for history graphs.
//!
//! The renderer produces typed glyph lines; `text` maps them to plain characters and `style`
//! to ANSI-colored terminal output.

pub mod glyph;
pub mod graph;
pub mod style;
mod text;

#[cfg(test)]
mod test_utils;

pub use glyph::{Cell, Glyph, GraphLine, Junction, LineKind};
pub use graph::{render_graph, render_graph_text, GraphRenderer, RenderError};
pub use style::{paint_line, GraphTheme, ThemeError};
pub use text::{graph_text, line_text, Charset};

pub const DEFAULT_ID_WIDTH: usize = 7;
pub const DEFAULT_LABEL_WIDTH: usize = 72;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub charset: Charset,
    /// Width of the abbreviated id field; 0 hides the field.
    pub id_width: usize,
    /// Maximum label width in characters; longer labels end in an ellipsis.
    pub label_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { charset: Charset::Unicode, id_width: DEFAULT_ID_WIDTH, label_width: DEFAULT_LABEL_WIDTH }
    }
}
