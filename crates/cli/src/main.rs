// SPDX-License-Identifier: MIT

//! Globtrot CLI entry point.

use std::path::Path;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use globtrot::cli::Cli;
use globtrot::error::ExitCode;
use globtrot::walker::{GlobWalker, WalkOptions};
use globtrot::{OsFileSystem, config, output};

fn init_logging() {
    let filter = EnvFilter::try_from_env("GLOBTROT_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("globtrot: {}", e);
            match e.downcast_ref::<globtrot::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "globtrot", &mut std::io::stdout());
        return Ok(ExitCode::Success);
    }

    let Some(pattern) = cli.pattern.as_deref() else {
        return Err(globtrot::Error::Argument("missing pattern".to_string()).into());
    };

    let config = match config::resolve(cli.config.as_deref(), Path::new(&cli.from))? {
        Some(path) => config::load(&path)?,
        None => config::Config::default(),
    };

    let defaults = config.defaults;
    let options = WalkOptions {
        start_dir: cli.from.clone(),
        selection: cli
            .kind
            .or(defaults.kind)
            .map(Into::into)
            .unwrap_or_default(),
        casing: cli
            .case
            .or(defaults.case)
            .map(Into::into)
            .unwrap_or_default(),
        order: cli
            .order
            .or(defaults.order)
            .map(Into::into)
            .unwrap_or_default(),
        distinct: cli.unique || defaults.unique.unwrap_or(false),
    };

    let fs = OsFileSystem;
    let walker = GlobWalker::new(&fs, options);
    let walk = walker.walk(pattern)?;
    let count = output::emit(walk, cli.output)?;

    Ok(if count == 0 {
        ExitCode::NoMatches
    } else {
        ExitCode::Success
    })
}
