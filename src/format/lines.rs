// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracklog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracklog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::model::{compose_label, HistoryNode, IdError, NodeId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineFeedParseError {
    MissingId { line_no: usize, line: String },
    InvalidId { line_no: usize, value: String, reason: IdError },
}

impl fmt::Display for LineFeedParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingId { line_no, line } => {
                write!(f, "line {line_no}: missing node id: {line:?}")
            }
            Self::InvalidId { line_no, value, reason } => {
                write!(f, "line {line_no}: invalid node id {value:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for LineFeedParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidId { reason, .. } => Some(reason),
            Self::MissingId { .. } => None,
        }
    }
}

/// Parses the tab-separated line feed.
///
/// Each non-blank line is `<id> [<parent>...]<TAB><refs><TAB><subject>`, which is what
/// `git log --format='%H %P%x09%D%x09%s'` prints. With a single tab the second field is the
/// subject; without tabs the node has an empty label.
pub fn parse_feed_lines(src: &str) -> Result<Vec<HistoryNode>, LineFeedParseError> {
    let mut nodes = Vec::new();

    for (idx, raw) in src.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.splitn(3, '\t');
        let head = fields.next().unwrap_or("");
        let label = match (fields.next(), fields.next()) {
            (Some(refs), Some(subject)) => compose_label(refs, subject),
            (Some(subject), None) => compose_label("", subject),
            (None, _) => String::new(),
        };

        let mut ids = head.split_whitespace().map(|value| {
            NodeId::new(value).map_err(|reason| LineFeedParseError::InvalidId {
                line_no,
                value: value.to_owned(),
                reason,
            })
        });
        let id = ids
            .next()
            .ok_or_else(|| LineFeedParseError::MissingId { line_no, line: line.to_owned() })??;
        let parents = ids.collect::<Result<Vec<_>, _>>()?;

        nodes.push(HistoryNode::new(id, parents, label));
    }

    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::{parse_feed_lines, LineFeedParseError};
    use crate::model::NodeId;

    fn ids(values: &[NodeId]) -> Vec<&str> {
        values.iter().map(NodeId::as_str).collect()
    }

    #[test]
    fn parses_git_log_style_lines() {
        let src = "m p1 p2\tHEAD -> main, tag: v2\tMerge branch 'topic'\r\n\
                   \n\
                   p1 g\t\tFix parser\n\
                   p2 g\tOnly subject\n\
                   g\n";
        let nodes = parse_feed_lines(src).unwrap();

        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes[0].id().as_str(), "m");
        assert_eq!(ids(nodes[0].parents()), ["p1", "p2"]);
        assert_eq!(nodes[0].label(), "(HEAD -> main, tag: v2) Merge branch 'topic'");
        assert_eq!(nodes[1].label(), "Fix parser");
        assert_eq!(nodes[2].label(), "Only subject");
        assert_eq!(nodes[3].label(), "");
        assert!(nodes[3].parents().is_empty());
    }

    #[test]
    fn line_without_id_is_rejected_with_its_number() {
        let err = parse_feed_lines("a\n\tsubject only\n").unwrap_err();
        assert_eq!(
            err,
            LineFeedParseError::MissingId { line_no: 2, line: "\tsubject only".to_owned() }
        );
    }
}
