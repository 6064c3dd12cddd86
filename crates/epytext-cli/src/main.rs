use anyhow::{Context, Result};
use clap::Parser;
use epytext_config::Config;
use epytext_engine::{ParseOptions, parse, parsing::snapshot::outline, render};
use std::{
    io::{self, Read, Write},
    path::PathBuf,
    process,
};

#[derive(Parser)]
#[command(name = "epytext", version, about = "Render epytext docstrings to HTML")]
struct Cli {
    /// Docstring file to read; stdin when omitted
    file: Option<PathBuf>,

    /// Config file (defaults to ~/.config/epytext/config.toml)
    #[arg(long)]
    config: Option<String>,

    /// Print the parsed tree outline instead of HTML
    #[arg(long)]
    tree: bool,

    /// Skip the tree optimizer
    #[arg(long)]
    no_optimize: bool,

    /// Truncate input to this many lines (0 = unlimited)
    #[arg(long)]
    max_lines: Option<usize>,

    /// Cap on recognition attempts (0 = unlimited)
    #[arg(long)]
    max_expressions: Option<usize>,
}

impl Cli {
    /// Config-file options with command-line overrides applied.
    fn parse_options(&self, config: &Config) -> ParseOptions {
        let mut options = config.parser;
        if let Some(max_lines) = self.max_lines {
            options.max_lines = max_lines;
        }
        if let Some(max_expressions) = self.max_expressions {
            options.max_expressions = max_expressions;
        }
        if self.no_optimize {
            options.optimize = false;
        }
        options
    }
}

fn init_logging(config: &Config) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if let Some(filter) = &config.log_filter {
        builder.parse_filters(filter);
    }
    builder.init();
}

fn read_input(file: Option<&PathBuf>) -> Result<Vec<u8>> {
    match file {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("cannot read {}", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("cannot read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_or_default(cli.config.as_deref())
        .context("failed to load config file")?;
    init_logging(&config);

    let options = cli.parse_options(&config);
    log::debug!("parse options: {options:?}");

    let input = read_input(cli.file.as_ref())?;
    let outcome = parse(&input, &options);
    for err in outcome.errors.iter().filter(|e| !e.is_fatal()) {
        log::warn!("{err}");
    }

    let document = match outcome.into_result() {
        Ok(document) => document,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    let mut stdout = io::stdout().lock();
    if cli.tree {
        stdout.write_all(outline(&document).as_bytes())?;
    } else {
        render(&document)
            .write_to(&mut stdout)
            .context("failed to write HTML")?;
        writeln!(stdout)?;
    }
    Ok(())
}
