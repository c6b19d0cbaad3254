use anyhow::{Context, Result};
use clap::Parser;
use decimal_bench_gen::{cli::Cli, generator, BenchmarkCollection};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Print one method name per line
fn print_method_names<W: Write>(collection: &BenchmarkCollection, mut out: W) -> io::Result<()> {
    for name in collection.names() {
        writeln!(out, "{}", name)?;
    }
    out.flush()
}

/// Write the benchmark source text, or only the method names with `--list`
fn write_output<W: Write>(collection: &BenchmarkCollection, list: bool, writer: W) -> Result<()> {
    if list {
        print_method_names(collection, writer)
            .context("Failed to write benchmark names to stdout")
    } else {
        collection
            .write_to(writer)
            .context("Failed to write benchmarks to stdout")
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let collection = generator::generate_all();

    let stdout = io::stdout();
    write_output(&collection, args.list, io::BufWriter::new(stdout.lock()))?;

    Ok(())
}
