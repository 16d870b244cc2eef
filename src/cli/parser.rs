use clap::{Parser, Subcommand};

/// Command-line interface definition for tutorboard
/// Kiosk schedule board for the engineering tutoring center
#[derive(Parser)]
#[command(
    name = "tutorboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Schedule board for the engineering tutoring center: who is on shift, and until when",
    long_about = None
)]
pub struct Cli {
    /// Override the schedule source directory (useful for tests)
    #[arg(global = true, long = "source")]
    pub source: Option<String>,

    /// Override the cache/data directory (useful for tests)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Pretend the current date is this one (YYYY-MM-DD)
    #[arg(global = true, long = "on", hide = true)]
    pub on: Option<String>,

    /// Pretend the current time is this one (HH:MM)
    #[arg(global = true, long = "at", hide = true)]
    pub at: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, source and data directories
    Init {
        /// Schedule source directory to record in the config file
        #[arg(long = "source-dir", value_name = "DIR")]
        source_dir: Option<String>,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Print today's coverage grid
    Today,

    /// List the tutors currently on shift
    Onshift,

    /// Show when a role is next scheduled (MAE, CMPE, ECE, CEE, BENG)
    Next {
        /// Major abbreviation
        role: String,
    },

    /// Force a re-derivation from the staffing sheets
    Refresh,

    /// Render the full dashboard once
    Board,

    /// Render the dashboard and refresh it at every half-hour boundary
    Watch {
        /// Stop after this many redraws instead of running forever
        #[arg(long = "cycles", hide = true)]
        cycles: Option<u32>,
    },
}
