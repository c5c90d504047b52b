use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "runsheet")]
#[command(about = "Flight-search test catalog and execution tracker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the workbook file (overrides RUNSHEET_WORKBOOK and config)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record an execution result for one test case
    #[command(alias = "u")]
    Update {
        /// Sheet name (e.g. BasicFlightSearch, FilterAndSort)
        #[arg(short, long)]
        sheet: String,

        /// Test case ID (e.g. BFS-001, FS-001)
        #[arg(short = 't', long = "test-id")]
        test_id: String,

        /// Execution result (Pass, Fail, Not Run, Blocked)
        #[arg(short, long)]
        result: String,

        /// Observed results, for failures. Pass "" to clear.
        #[arg(short, long)]
        observed: Option<String>,

        /// Name of executor (e.g. "AI Agent"). Pass "" to clear.
        #[arg(short, long)]
        executed_by: Option<String>,

        /// Execution date in YYYY-MM-DD format. Pass "" to clear.
        #[arg(short, long)]
        date: Option<String>,

        /// Optional comments. Pass "" to clear.
        #[arg(short, long)]
        comments: Option<String>,

        /// Create a timestamped backup before updating
        #[arg(short, long)]
        backup: bool,
    },

    /// Reset a test case to its never-executed state
    Reset {
        /// Sheet name
        #[arg(short, long)]
        sheet: String,

        /// Test case ID
        #[arg(short = 't', long = "test-id")]
        test_id: String,

        /// Create a timestamped backup before resetting
        #[arg(short, long)]
        backup: bool,
    },

    /// Apply many updates from a JSON batch file
    Batch {
        /// Path to the batch spec (JSON with an "updates" array)
        spec: PathBuf,

        /// Create a backup even if the spec file does not ask for one
        #[arg(short, long)]
        backup: bool,
    },

    /// List available sheets
    Sheets,

    /// List test case IDs in one sheet
    Ids {
        /// Sheet name
        #[arg(short, long)]
        sheet: String,
    },

    /// Show the full field set of one test case
    Show {
        /// Sheet name
        #[arg(short, long)]
        sheet: String,

        /// Test case ID
        #[arg(short = 't', long = "test-id")]
        test_id: String,
    },

    /// Generate a fresh catalog workbook
    Generate {
        /// Overwrite an existing workbook, discarding recorded results
        #[arg(long)]
        force: bool,
    },
}
