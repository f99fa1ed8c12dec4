// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracklog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracklog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::{env, error::Error, fmt};

use crossterm::style::{Color, Stylize};

use super::glyph::GraphLine;
use super::text::{cell_chars, id_field, text_len};
use super::RenderOptions;

pub const PALETTE_ENV: &str = "TRACKLOG_PALETTE";

const DEFAULT_TRACK_COLORS: [Color; 6] = [
    Color::DarkRed,
    Color::DarkGreen,
    Color::DarkYellow,
    Color::DarkBlue,
    Color::DarkMagenta,
    Color::DarkCyan,
];

/// Terminal colors for rendered graph lines.
///
/// Every cell takes the color of its track column (round robin over the palette). Node glyphs are
/// colored like the rest of their track, merge or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphTheme {
    tracks: Vec<Color>,
    id: Color,
}

impl Default for GraphTheme {
    fn default() -> Self {
        Self { tracks: DEFAULT_TRACK_COLORS.to_vec(), id: Color::DarkYellow }
    }
}

impl GraphTheme {
    /// Default theme, with the track palette overridden by `TRACKLOG_PALETTE` when set.
    pub fn from_env() -> Result<Self, ThemeError> {
        let value = match env::var(PALETTE_ENV) {
            Ok(value) => value,
            Err(env::VarError::NotPresent) => return Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ThemeError::InvalidEnv {
                    name: PALETTE_ENV.to_string(),
                    value: "<non-unicode>".to_string(),
                });
            }
        };

        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let tracks = parse_palette_csv(trimmed).map_err(|error| ThemeError::InvalidEnv {
            name: PALETTE_ENV.to_string(),
            value: format!("{trimmed} ({error})"),
        })?;
        Ok(Self { tracks, ..Self::default() })
    }

    pub fn with_tracks(tracks: Vec<Color>) -> Option<Self> {
        if tracks.is_empty() {
            return None;
        }
        Some(Self { tracks, ..Self::default() })
    }

    pub fn track_color(&self, track: usize) -> Color {
        self.tracks[track % self.tracks.len()]
    }

    pub fn id_color(&self) -> Color {
        self.id
    }
}

/// Renders a line like [`super::line_text`], wrapping glyphs and the id field in ANSI colors.
pub fn paint_line(line: &GraphLine, options: &RenderOptions, theme: &GraphTheme) -> String {
    let mut text = String::new();

    let id = id_field(line, options.id_width);
    let id_trimmed = id.trim_end_matches(' ');
    if !id_trimmed.is_empty() {
        text.push_str(&id_trimmed.with(theme.id_color()).to_string());
    }
    for _ in text_len(id_trimmed)..options.id_width {
        text.push(' ');
    }
    if options.id_width > 0 {
        text.push(' ');
    }

    let chars = cell_chars(line.cells(), options.charset);
    for (ch, cell) in chars.iter().zip(line.cells()) {
        match cell.track() {
            Some(track) if *ch != ' ' => {
                text.push_str(&ch.with(theme.track_color(track)).to_string());
            }
            _ => text.push(*ch),
        }
    }

    if let Some(label) = line.label().filter(|label| !label.is_empty()) {
        text.push(' ');
        text.push_str(label);
    }
    text.trim_end_matches(' ').to_owned()
}

fn parse_palette_csv(value: &str) -> Result<Vec<Color>, String> {
    value.split(',').map(parse_palette_color).collect()
}

fn parse_palette_color(value: &str) -> Result<Color, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty color".to_string());
    }

    let lower = trimmed.to_ascii_lowercase();
    if let Some(rest) = lower.strip_prefix("rgb:") {
        let parts: Vec<&str> = rest.split('/').collect();
        if parts.len() != 3 {
            return Err(format!("invalid rgb: value: {trimmed}"));
        }
        let r = parse_hex_channel(parts[0])?;
        let g = parse_hex_channel(parts[1])?;
        let b = parse_hex_channel(parts[2])?;
        return Ok(Color::Rgb { r, g, b });
    }

    if let Some(hex) = trimmed.strip_prefix('#') {
        if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(format!("invalid hex color: {trimmed} (expected #RRGGBB)"));
        }
        let rgb =
            u32::from_str_radix(hex, 16).map_err(|_| format!("invalid hex color: {trimmed}"))?;
        let r = ((rgb >> 16) & 0xFF) as u8;
        let g = ((rgb >> 8) & 0xFF) as u8;
        let b = (rgb & 0xFF) as u8;
        return Ok(Color::Rgb { r, g, b });
    }

    if lower.chars().all(|ch| ch.is_ascii_digit()) {
        let idx: u8 = lower.parse().map_err(|_| format!("invalid ansi color index: {trimmed}"))?;
        return Ok(Color::AnsiValue(idx));
    }

    Color::try_from(lower.as_str()).map_err(|_| format!("unknown color name: {trimmed}"))
}

fn parse_hex_channel(value: &str) -> Result<u8, String> {
    let value = value.trim();
    if value.len() == 2 {
        let parsed =
            u8::from_str_radix(value, 16).map_err(|_| format!("invalid rgb: component {value}"))?;
        return Ok(parsed);
    }
    if value.len() == 4 {
        let parsed = u16::from_str_radix(value, 16)
            .map_err(|_| format!("invalid rgb: component {value}"))?;
        return Ok((parsed >> 8) as u8);
    }
    Err(format!("invalid rgb: component {value} (expected 2 or 4 hex digits)"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    InvalidEnv { name: String, value: String },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnv { name, value } => write!(f, "invalid env {name}={value}"),
        }
    }
}

impl Error for ThemeError {}
