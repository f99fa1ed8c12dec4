// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracklog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracklog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Node feed readers.
//!
//! The feed is produced by an external history query; these readers only turn its text into
//! nodes and hand them to [`HistoryFeed`] for adjacency and ordering checks.

use std::fmt;

use crate::model::{FeedError, HistoryFeed};

pub mod json;
pub mod lines;

pub use json::{parse_feed_json, FeedEntry, JsonFeedParseError};
pub use lines::{parse_feed_lines, LineFeedParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedFormat {
    #[default]
    Lines,
    Json,
}

#[derive(Debug)]
pub enum FeedParseError {
    Lines(LineFeedParseError),
    Json(JsonFeedParseError),
    Feed(FeedError),
}

impl FeedParseError {
    /// Whether the feed was syntactically fine but held no history at all.
    pub fn is_no_history_root(&self) -> bool {
        matches!(self, Self::Feed(FeedError::NoHistoryRoot))
    }
}

impl fmt::Display for FeedParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lines(err) => write!(f, "feed parse error: {err}"),
            Self::Json(err) => write!(f, "feed parse error: {err}"),
            Self::Feed(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for FeedParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lines(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Feed(err) => Some(err),
        }
    }
}

impl From<LineFeedParseError> for FeedParseError {
    fn from(value: LineFeedParseError) -> Self {
        Self::Lines(value)
    }
}

impl From<JsonFeedParseError> for FeedParseError {
    fn from(value: JsonFeedParseError) -> Self {
        Self::Json(value)
    }
}

impl From<FeedError> for FeedParseError {
    fn from(value: FeedError) -> Self {
        Self::Feed(value)
    }
}

/// Parses `src` in the given format and builds a validated feed.
///
/// With `strict`, every parent must be part of the feed.
pub fn load_feed(src: &str, format: FeedFormat, strict: bool) -> Result<HistoryFeed, FeedParseError> {
    let nodes = match format {
        FeedFormat::Lines => parse_feed_lines(src)?,
        FeedFormat::Json => parse_feed_json(src)?,
    };

    let feed =
        if strict { HistoryFeed::from_nodes_strict(nodes)? } else { HistoryFeed::from_nodes(nodes)? };
    tracing::debug!(
        nodes = feed.len(),
        boundary_parents = feed.boundary_parents(),
        "loaded history feed"
    );
    Ok(feed)
}
