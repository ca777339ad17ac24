use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::Level;
use yansi::Paint;

use scut::interpreter::{self, Pipeline};
use scut::output::{self, Format};
use scut::{input, parser};

#[derive(Parser)]
#[command(name = "scut")]
#[command(
    about = "Select, split and recombine the fields of each input line, like cut with a richer selector language."
)]
struct Cli {
    /// Selection expression, e.g. `1-5,6+7+8,9-` or `[split:,:2,3[split:-:1]]`
    expression: String,

    /// Optional files to process (stdin when absent)
    files: Vec<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "csv")]
    format: Format,

    /// Do not write a header of column letters
    #[arg(long = "no-header")]
    no_header: bool,

    /// Print the parsed expression as JSON and exit
    #[arg(long = "ast")]
    ast: bool,

    /// Log debug information to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let blend = match parser::parse_expression(&cli.expression) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    let result = if cli.ast {
        print_ast(&blend)
    } else {
        run(&cli, &interpreter::compile(&blend))
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn print_ast(blend: &scut::ast::Blend) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, blend).context("failed to write expression")?;
    writeln!(handle).context("failed to write expression")?;
    Ok(())
}

fn run(cli: &Cli, pipeline: &Pipeline) -> anyhow::Result<()> {
    let rows = input::open(&cli.files).map(|line| line.map(|l| pipeline.apply(&l)));
    let stdout = io::stdout();
    let count = output::write(
        cli.format,
        !cli.no_header,
        rows,
        BufWriter::new(stdout.lock()),
    )?;
    tracing::debug!(rows = count, "finished");
    Ok(())
}
