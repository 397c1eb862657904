mod app;
mod commands;
mod input;

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
};

use anyhow::Context;
use clap::Parser;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Warnings only by default; --verbose enables debug; RUST_LOG overrides
    let level = if cli.global.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_module("gradus", level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_target(false)
        .init();

    let input: Box<dyn Read> = match &cli.global.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input: {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());

    dispatch(cli.command, input, &mut output)?;
    output.flush().context("failed to write output")?;

    Ok(())
}

fn dispatch(command: Command, input: impl Read, output: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::Path => commands::path::run(input, output),
        Command::Bipartite => commands::bipartite::run(input, output),
        Command::Knight => commands::knight::run(input, output),
        Command::Digits => commands::digits::run(input, output),
        Command::Subway => commands::subway::run(input, output),
        Command::Slide => commands::slide::run(input, output),
        Command::Drains => commands::drains::run(input, output),
        Command::Bounded { max_weight } => commands::bounded::run(input, output, max_weight),
        Command::Reversals => commands::reversals::run(input, output),
        Command::Cycle => commands::cycle::run(input, output),
        Command::Functional => commands::functional::run(input, output),
        Command::Components => commands::components::run(input, output),
        Command::Toposort => commands::toposort::run(input, output),
        Command::Roads => commands::roads::run(input, output),
        Command::Scc => commands::scc::run(input, output),
        Command::Cutpoints => commands::cutpoints::run(input, output),
        Command::Augment => commands::augment::run(input, output),
        Command::Triples => commands::triples::run(input, output),
        Command::Bridges => commands::bridges::run(input, output),
        Command::Euler => commands::euler::run(input, output),
    }
}
