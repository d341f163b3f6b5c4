// SPDX-License-Identifier: MIT

//! Result printing.
//!
//! Text output streams one path per line, coloring directory results when
//! stdout is a terminal. Color detection:
//! 1. NO_COLOR env var → no color
//! 2. COLOR env var → use color
//! 3. default: color only when stdout is a TTY

use std::io::{self, IsTerminal, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::cli::OutputFormat;

fn color_choice() -> ColorChoice {
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return ColorChoice::Never;
    }
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return ColorChoice::Always;
    }
    if io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Print matched paths to stdout; returns how many were printed.
///
/// Text mode pulls lazily, so early pipe closure or a slow producer never
/// buffers the whole result set. JSON mode has to collect first.
pub fn emit(paths: impl Iterator<Item = String>, format: OutputFormat) -> io::Result<usize> {
    match format {
        OutputFormat::Text => {
            let mut out = StandardStream::stdout(color_choice());
            write_text(&mut out, paths)
        }
        OutputFormat::Json => {
            let stdout = io::stdout();
            write_json(&mut stdout.lock(), paths)
        }
    }
}

/// One path per line; directory results (trailing `/`) in color.
pub fn write_text<W: WriteColor>(
    out: &mut W,
    paths: impl Iterator<Item = String>,
) -> io::Result<usize> {
    let mut dir_spec = ColorSpec::new();
    dir_spec.set_fg(Some(Color::Blue)).set_bold(true);

    let mut count = 0;
    for path in paths {
        if path.ends_with('/') {
            out.set_color(&dir_spec)?;
            writeln!(out, "{path}")?;
            out.reset()?;
        } else {
            writeln!(out, "{path}")?;
        }
        count += 1;
    }
    Ok(count)
}

/// All paths as one JSON array.
pub fn write_json<W: Write>(out: &mut W, paths: impl Iterator<Item = String>) -> io::Result<usize> {
    let paths: Vec<String> = paths.collect();
    serde_json::to_writer_pretty(&mut *out, &paths)?;
    writeln!(out)?;
    Ok(paths.len())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
