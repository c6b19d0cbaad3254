//! CLI argument parsing for decimal-bench-gen

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "decimal-bench-gen")]
#[command(version)]
#[command(
    about = "Generate Decimal64 vs BigDecimal JMH benchmark methods for every operand digit-length pair",
    long_about = None
)]
pub struct Cli {
    /// Print generated method names (one per line) instead of source text
    #[arg(short, long)]
    pub list: bool,

    /// Enable debug tracing output (to stderr)
    #[arg(long)]
    pub debug: bool,
}
