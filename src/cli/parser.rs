use clap::{Parser, Subcommand};

/// Command-line interface definition for rCharityMap
/// CLI application to discover charity events near a location
#[derive(Parser)]
#[command(
    name = "rcharitymap",
    version = env!("CARGO_PKG_VERSION"),
    about = "Find charity events near you: date-partitioned lists and clustered map views",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Read events from a JSON file (GET /events format) instead of the database
    #[arg(global = true, long = "events", value_name = "FILE")]
    pub events: Option<String>,

    /// Show debug diagnostics on stderr
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Publish an event
    Add {
        /// Date of the event (YYYY-MM-DD)
        date: String,

        #[arg(long, help = "Event name")]
        name: String,

        #[arg(long, help = "Hosting organization (default: config default_host)")]
        host: Option<String>,

        #[arg(long = "location", help = "Free-text location label")]
        location: String,

        #[arg(long = "lat", requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        #[arg(long = "lon", requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,

        #[arg(
            long = "geocode",
            conflicts_with = "lat",
            help = "Look up coordinates for --location"
        )]
        geocode: bool,

        #[arg(long, help = "Event description")]
        description: Option<String>,
    },

    /// Import events from a JSON file (GET /events format)
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// List events split into upcoming and past
    List {
        #[arg(long, value_name = "YYYY-MM-DD", help = "Override today's date")]
        today: Option<String>,

        #[arg(long, help = "Only show upcoming events")]
        upcoming: bool,

        #[arg(long, help = "Only show past events")]
        past: bool,

        #[arg(long, help = "Show descriptions")]
        details: bool,
    },

    /// Show the details of one event
    Show {
        /// Event id
        id: i64,
    },

    /// Show events near a reference position, grouped by location
    Near {
        #[arg(
            long,
            value_name = "LAT,LON",
            allow_hyphen_values = true,
            help = "Device position fix"
        )]
        here: Option<String>,

        #[arg(long, value_name = "TEXT", conflicts_with = "here", help = "Search a place")]
        place: Option<String>,

        #[arg(long, help = "Search radius in miles (default: config)")]
        radius: Option<f64>,

        #[arg(long = "include-past", help = "Keep events dated before today")]
        include_past: bool,

        #[arg(long, value_name = "YYYY-MM-DD", help = "Override today's date")]
        today: Option<String>,

        #[arg(long, help = "Print the map view as JSON")]
        json: bool,
    },

    /// Look up a place and print the candidates
    Search {
        query: String,

        #[arg(long, help = "Maximum number of candidates (default: config)")]
        limit: Option<usize>,
    },
}
