use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rtimesheet
#[derive(Parser, Debug)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Check in and out of work on a PeopleHR timesheet and report worked hours",
    long_about = None
)]
pub struct Cli {
    /// Use a custom configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    /// Skip the NTP clock check before in/out
    #[arg(global = true, long = "no-clock-check")]
    pub no_clock_check: bool,

    /// Increase diagnostic output (-v info, -vv debug, -vvv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store the API key and employee id, encrypted with a password
    Init,

    /// List check-ins (today by default)
    #[command(visible_aliases = ["list", "l"])]
    Ls {
        #[arg(long, short, help = "Start date (YYYY-MM-DD)")]
        start: Option<String>,

        #[arg(long, short, help = "End date (YYYY-MM-DD), defaults to start")]
        end: Option<String>,
    },

    /// Check in to work
    #[command(visible_alias = "i")]
    In {
        /// Explicit time (HH:MM, 24-hour) instead of now
        time: Option<String>,
    },

    /// Check out of work
    #[command(visible_alias = "o")]
    Out {
        /// Explicit time (HH:MM, 24-hour) instead of now
        time: Option<String>,
    },

    /// Daily hours report (current month to today by default)
    #[command(visible_alias = "r")]
    Report {
        #[arg(long, short, help = "Start date (YYYY-MM-DD)")]
        start: Option<String>,

        #[arg(long, short, help = "End date (YYYY-MM-DD)")]
        end: Option<String>,

        #[arg(long, short, value_name = "FILE", help = "Write a JSON report to FILE")]
        output: Option<PathBuf>,
    },

    /// Display the stored API key (masked unless --reveal)
    #[command(visible_alias = "k")]
    Key {
        #[arg(long, help = "Print the full API key")]
        reveal: bool,
    },

    /// Print the version number
    Version,
}
