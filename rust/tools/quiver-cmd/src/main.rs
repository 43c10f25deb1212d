use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quiver-cmd")]
#[command(about = "Command-line utility for Quiver date arithmetic kernels")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single date-add expression
    Add {
        /// Field unit to add (second, minute, ..., millennium, ms, us, ns)
        #[arg(short, long)]
        field: String,

        /// Signed number of units to add
        #[arg(short, long)]
        number: i64,

        /// Epoch timestamp to add to, in the unit implied by --dim
        #[arg(short, long)]
        timestamp: i64,

        /// Fractional decimal digits of the timestamp (0, 3, 6 or 9)
        #[arg(short, long, default_value_t = 0)]
        dim: i32,

        /// Null sentinel; a timestamp equal to it is returned unchanged
        #[arg(long)]
        null_val: Option<i64>,
    },

    /// List the supported field units
    Fields {
        /// Emit the list as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Add {
            field,
            number,
            timestamp,
            dim,
            null_val,
        } => commands::add::run(&field, number, timestamp, dim, null_val),
        Commands::Fields { json } => commands::fields::run(json),
    }
}
