// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracklog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracklog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{compose_label, HistoryNode, NodeId};

/// One node of a JSON feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeedEntry {
    pub id: NodeId,
    #[serde(default)]
    pub parents: Vec<NodeId>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub refs: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subject: String,
    /// Pre-rendered label; takes precedence over `refs`/`subject`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl FeedEntry {
    pub fn into_node(self) -> HistoryNode {
        let label = match self.label {
            Some(label) => label,
            None => compose_label(&self.refs, &self.subject),
        };
        HistoryNode::new(self.id, self.parents, label)
    }
}

#[derive(Debug)]
pub enum JsonFeedParseError {
    Json(serde_json::Error),
}

impl fmt::Display for JsonFeedParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid JSON feed: {err}"),
        }
    }
}

impl std::error::Error for JsonFeedParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for JsonFeedParseError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Parses a JSON array of [`FeedEntry`] objects, keeping their order.
pub fn parse_feed_json(src: &str) -> Result<Vec<HistoryNode>, JsonFeedParseError> {
    let entries: Vec<FeedEntry> = serde_json::from_str(src)?;
    Ok(entries.into_iter().map(FeedEntry::into_node).collect())
}
