// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracklog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracklog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use smol_str::SmolStr;

/// A stable history node identifier (typically a full commit hash).
///
/// The id is opaque to the renderer; it only enforces that the value is non-empty and free of
/// whitespace, because whitespace separates fields in the line feed format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(SmolStr);

impl NodeId {
    pub fn new(value: impl AsRef<str>) -> Result<Self, IdError> {
        let value = value.as_ref();
        validate_node_id(value)?;
        Ok(Self(SmolStr::new(value)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the first `width` characters of the id (or the whole id if it is shorter).
    pub fn abbrev(&self, width: usize) -> &str {
        match self.0.char_indices().nth(width) {
            Some((end, _)) => &self.0[..end],
            None => &self.0,
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for NodeId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for NodeId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = SmolStr::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    Empty,
    ContainsWhitespace,
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("node id must not be empty"),
            Self::ContainsWhitespace => f.write_str("node id must not contain whitespace"),
        }
    }
}

impl std::error::Error for IdError {}

fn validate_node_id(value: &str) -> Result<(), IdError> {
    if value.is_empty() {
        return Err(IdError::Empty);
    }
    if value.chars().any(char::is_whitespace) {
        return Err(IdError::ContainsWhitespace);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{IdError, NodeId};

    #[test]
    fn id_rejects_empty() {
        assert_eq!(NodeId::new(""), Err(IdError::Empty));
    }

    #[test]
    fn id_rejects_whitespace() {
        assert_eq!(NodeId::new("ab cd"), Err(IdError::ContainsWhitespace));
        assert_eq!(NodeId::new("ab\tcd"), Err(IdError::ContainsWhitespace));
    }

    #[test]
    fn abbrev_takes_a_char_prefix() {
        let id = NodeId::new("0123456789abcdef").unwrap();
        assert_eq!(id.abbrev(7), "0123456");
        assert_eq!(id.abbrev(0), "");
        assert_eq!(id.abbrev(64), "0123456789abcdef");

        let id = NodeId::new("αβγδ").unwrap();
        assert_eq!(id.abbrev(2), "αβ");
    }

    #[test]
    fn deserialize_validates() {
        let id: NodeId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(id.as_str(), "abc");
        assert!(serde_json::from_str::<NodeId>("\"\"").is_err());
    }
}
