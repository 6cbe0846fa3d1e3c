//! strbuf CLI
//!
//! Command-line front end for the strbuf conversions.
//!
//! # Commands
//!
//! - `bits` - Print the accumulated bit patterns of integers
//! - `decimal` - Render a number through the decimal converters
//! - `sort` - Sort lines read from standard input

mod commands;

use clap::{Parser, Subcommand};
use commands::{FloatKind, IntKind};
use tracing_subscriber::EnvFilter;

/// strbuf command-line tools.
#[derive(Parser)]
#[command(name = "strbuf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the bit patterns of integers, most recent value leftmost
    Bits {
        /// Integer type of the values
        #[arg(short, long, value_enum, default_value = "u8")]
        kind: IntKind,

        /// Separate each value's pattern with a space
        #[arg(short, long)]
        separate: bool,

        /// Values to convert, in call order
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Render a number as decimal text
    Decimal {
        /// Integer type of the value
        #[arg(short, long, value_enum, conflicts_with = "float")]
        kind: Option<IntKind>,

        /// Float precision of the value
        #[arg(short, long, value_enum)]
        float: Option<FloatKind>,

        /// Value to render
        #[arg(allow_negative_numbers = true)]
        value: String,
    },

    /// Sort lines read from standard input
    Sort {
        /// Sort in descending order
        #[arg(short, long)]
        descending: bool,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Bits {
            kind,
            separate,
            values,
        } => {
            commands::bits::run(kind, &values, separate)?;
        }
        Commands::Decimal { kind, float, value } => {
            commands::decimal::run(kind, float, &value)?;
        }
        Commands::Sort { descending } => {
            commands::sort::run(descending)?;
        }
        Commands::Version => {
            println!("strbuf CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("strbuf core v{}", strbuf_core::VERSION);
        }
    }

    Ok(())
}
