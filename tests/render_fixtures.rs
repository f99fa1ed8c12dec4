// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracklog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracklog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::{Path, PathBuf};

use rstest::rstest;

use tracklog::format::{load_feed, FeedFormat};
use tracklog::render::{render_graph_text, Charset, RenderOptions};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join("history")
}

fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed to read {path:?}: {err}"))
}

#[rstest]
#[case::merge("merge.feed", FeedFormat::Lines, Charset::Unicode, "merge.expected")]
#[case::branches("branches.json", FeedFormat::Json, Charset::Ascii, "branches.expected")]
fn fixture_feeds_render_as_expected(
    #[case] feed_name: &str,
    #[case] format: FeedFormat,
    #[case] charset: Charset,
    #[case] expected_name: &str,
) {
    let src = read_fixture(feed_name);
    let feed = load_feed(&src, format, true)
        .unwrap_or_else(|err| panic!("expected {feed_name} to load, got error: {err}"));

    let options = RenderOptions { charset, ..RenderOptions::default() };
    let rendered = render_graph_text(&feed, options)
        .unwrap_or_else(|err| panic!("expected {feed_name} to render, got error: {err}"));

    let expected = read_fixture(expected_name);
    assert_eq!(rendered, expected.trim_end_matches('\n'), "fixture {feed_name}");
}

#[test]
fn empty_feed_is_reported_as_missing_root() {
    let err = load_feed("", FeedFormat::Lines, false).unwrap_err();
    assert!(err.is_no_history_root());
    assert_eq!(err.to_string(), "no valid history root found");
}

#[test]
fn out_of_order_feed_is_rejected_before_rendering() {
    let src = "a\tRoot\nb a\tChild\n";
    let err = load_feed(src, FeedFormat::Lines, false).unwrap_err();
    assert!(!err.is_no_history_root());
    assert_eq!(err.to_string(), "parent a appears before its child b");
}
