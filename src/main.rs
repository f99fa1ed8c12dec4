// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracklog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracklog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tracklog CLI entrypoint.
//!
//! Reads a pre-ordered node feed (from a file or stdin) and prints the history graph.
//! Produce a line feed with e.g. `git log --topo-order --format='%H %P%x09%D%x09%s' | tracklog`.

use std::error::Error;
use std::io::{self, BufWriter, Read, Write};

use crossterm::tty::IsTty;
use tracing_subscriber::EnvFilter;

use tracklog::format::{load_feed, FeedFormat, FeedParseError};
use tracklog::render::{
    line_text, paint_line, Charset, GraphRenderer, GraphTheme, RenderOptions, DEFAULT_ID_WIDTH,
    DEFAULT_LABEL_WIDTH,
};

const LOG_ENV: &str = "TRACKLOG_LOG";
const EXIT_USAGE: i32 = 2;
const EXIT_NO_HISTORY_ROOT: i32 = 3;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<feed-file>|-] [--json] [--strict] [--ascii] [--color <auto|always|never>]\n      [--id-width <n>] [--label-width <n>]\n\nReads a node feed ordered descendants-first (stdin if no file or `-` is given).\nLine feed: `<id> [<parent>...]<TAB><refs><TAB><subject>` per node, as printed by\n  git log --topo-order --format='%H %P%x09%D%x09%s'\n--json reads an array of {{\"id\", \"parents\", \"refs\", \"subject\", \"label\"}} objects instead.\n--strict rejects parents that are not part of the feed.\n\nDefaults: --color auto, --id-width {DEFAULT_ID_WIDTH}, --label-width {DEFAULT_LABEL_WIDTH}.\nEnvironment: TRACKLOG_PALETTE (comma-separated track colors), TRACKLOG_LOG (log filter), NO_COLOR."
    );
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    input: Option<String>,
    json: bool,
    strict: bool,
    ascii: bool,
    color: Option<ColorMode>,
    id_width: Option<usize>,
    label_width: Option<usize>,
}

impl CliOptions {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            charset: if self.ascii { Charset::Ascii } else { Charset::Unicode },
            id_width: self.id_width.unwrap_or(DEFAULT_ID_WIDTH),
            label_width: self.label_width.unwrap_or(DEFAULT_LABEL_WIDTH),
        }
    }

    fn format(&self) -> FeedFormat {
        if self.json {
            FeedFormat::Json
        } else {
            FeedFormat::Lines
        }
    }
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => {
                if options.json {
                    return Err(());
                }
                options.json = true;
            }
            "--strict" => {
                if options.strict {
                    return Err(());
                }
                options.strict = true;
            }
            "--ascii" => {
                if options.ascii {
                    return Err(());
                }
                options.ascii = true;
            }
            "--color" => {
                if options.color.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.color = Some(match raw.as_str() {
                    "auto" => ColorMode::Auto,
                    "always" => ColorMode::Always,
                    "never" => ColorMode::Never,
                    _ => return Err(()),
                });
            }
            "--id-width" => {
                if options.id_width.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.id_width = Some(raw.parse().map_err(|_| ())?);
            }
            "--label-width" => {
                if options.label_width.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.label_width = Some(raw.parse().map_err(|_| ())?);
            }
            "-" => {
                if options.input.is_some() {
                    return Err(());
                }
                options.input = Some(arg);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.input.is_some() {
                    return Err(());
                }
                options.input = Some(arg);
            }
        }
    }

    Ok(options)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::env::var_os("NO_COLOR").is_none() && io::stdout().is_tty(),
    }
}

fn read_input(input: Option<&str>) -> io::Result<String> {
    match input {
        None | Some("-") => {
            let mut src = String::new();
            io::stdin().read_to_string(&mut src)?;
            Ok(src)
        }
        Some(path) => std::fs::read_to_string(path),
    }
}

fn run(options: &CliOptions) -> Result<(), Box<dyn Error>> {
    let render_options = options.render_options();
    let theme = if use_color(options.color.unwrap_or_default()) {
        Some(GraphTheme::from_env()?)
    } else {
        None
    };

    let src = read_input(options.input.as_deref())?;
    let feed = load_feed(&src, options.format(), options.strict)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut renderer = GraphRenderer::new(render_options);
    let mut lines = Vec::new();
    for node in &feed {
        renderer.push(node, &mut lines)?;
        for line in lines.drain(..) {
            let text = match &theme {
                Some(theme) => paint_line(&line, &render_options, theme),
                None => line_text(&line, &render_options),
            };
            writeln!(out, "{text}")?;
        }
    }
    out.flush()?;

    let open = renderer.finish();
    if !open.is_empty() {
        tracing::debug!(open = open.len(), "history ends with open lineages");
    }
    Ok(())
}

fn is_broken_pipe(err: &(dyn Error + 'static)) -> bool {
    err.downcast_ref::<io::Error>().is_some_and(|err| err.kind() == io::ErrorKind::BrokenPipe)
}

fn main() {
    init_tracing();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "tracklog".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(EXIT_USAGE);
        }
    };

    if let Err(err) = run(&options) {
        if is_broken_pipe(err.as_ref()) {
            return;
        }
        eprintln!("tracklog: {err}");
        let no_root = err
            .downcast_ref::<FeedParseError>()
            .is_some_and(FeedParseError::is_no_history_root);
        std::process::exit(if no_root { EXIT_NO_HISTORY_ROOT } else { 1 });
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions, ColorMode};
    use tracklog::format::FeedFormat;
    use tracklog::render::{Charset, DEFAULT_ID_WIDTH};

    fn args(values: &[&str]) -> impl Iterator<Item = String> {
        values.iter().map(|v| (*v).to_owned()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn parses_empty_args() {
        let options = parse_options(std::iter::empty()).expect("parse options");
        assert_eq!(options, CliOptions::default());
        assert_eq!(options.format(), FeedFormat::Lines);
        assert_eq!(options.render_options().id_width, DEFAULT_ID_WIDTH);
    }

    #[test]
    fn parses_positional_input_and_flags() {
        let options = parse_options(args(&[
            "history.json",
            "--json",
            "--ascii",
            "--color",
            "never",
            "--id-width",
            "10",
            "--label-width",
            "40",
            "--strict",
        ]))
        .expect("parse options");

        assert_eq!(options.input.as_deref(), Some("history.json"));
        assert_eq!(options.format(), FeedFormat::Json);
        assert_eq!(options.color, Some(ColorMode::Never));
        assert!(options.strict);

        let render = options.render_options();
        assert_eq!(render.charset, Charset::Ascii);
        assert_eq!(render.id_width, 10);
        assert_eq!(render.label_width, 40);
    }

    #[test]
    fn parses_dash_as_stdin() {
        let options = parse_options(args(&["-"])).expect("parse options");
        assert_eq!(options.input.as_deref(), Some("-"));
    }

    #[test]
    fn rejects_unknown_args() {
        parse_options(args(&["--nope"])).unwrap_err();
        parse_options(args(&["--color", "sometimes"])).unwrap_err();
        parse_options(args(&["--id-width", "wide"])).unwrap_err();
    }

    #[test]
    fn rejects_duplicate_flags_and_inputs() {
        parse_options(args(&["--json", "--json"])).unwrap_err();
        parse_options(args(&["--color", "auto", "--color", "never"])).unwrap_err();
        parse_options(args(&["one", "two"])).unwrap_err();
        parse_options(args(&["-", "file"])).unwrap_err();
    }

    #[test]
    fn rejects_missing_values() {
        parse_options(args(&["--label-width"])).unwrap_err();
        parse_options(args(&["--color"])).unwrap_err();
    }
}
