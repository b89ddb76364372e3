use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::{Parser, ValueEnum};
use minilang::{ast::printer::pretty_print, parser::parser::parse_source, render_error};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Emit {
    /// Indented tree, one statement per line
    Tree,
    /// The raw AST structures
    Debug,
}

/// Parse a MiniLang source file and print its syntax tree
#[derive(Debug, Parser)]
#[command(name = "minilang", version)]
struct Cli {
    /// Source file to parse
    file: PathBuf,

    /// How to print the parsed program
    #[arg(long, value_enum, default_value_t = Emit::Tree)]
    emit: Emit,

    /// Log parser progress (overrides RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    let source = match read_to_string(&cli.file) {
        Ok(source) => source,
        Err(err) => {
            error!("failed to read {}: {}", cli.file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let parsed = parse_source(&source);
    debug!("Parsed in {:?}", start.elapsed());

    match parsed {
        Ok(program) => {
            match cli.emit {
                Emit::Tree => print!("{}", pretty_print(&program)),
                Emit::Debug => println!("{:#?}", program),
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprint!("{}", render_error(&err, &cli.file, &source));
            ExitCode::FAILURE
        }
    }
}
