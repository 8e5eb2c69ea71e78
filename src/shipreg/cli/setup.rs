use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "shipreg", bin_name = "shipreg", version = get_version())]
#[command(about = "Keep a registry of ships: create, query, update and retire them", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory (defaults to $SHIPREG_HOME, then the OS data directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Print ships as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new ship
    #[command(alias = "n")]
    Create {
        #[command(flatten)]
        fields: ShipFieldArgs,
    },

    /// Show one ship
    #[command(alias = "v")]
    Get {
        /// Ship id
        id: String,
    },

    /// Change some fields of a ship (only the given fields change)
    #[command(alias = "e")]
    Update {
        /// Ship id
        id: String,

        #[command(flatten)]
        fields: ShipFieldArgs,
    },

    /// Remove a ship
    #[command(alias = "rm")]
    Delete {
        /// Ship id
        id: String,
    },

    /// List ships matching the filters, one page at a time
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Sort key: id, speed, date or rating
        #[arg(long)]
        order: Option<String>,

        /// Zero-based page number (default 0)
        #[arg(long)]
        page_number: Option<String>,

        /// Ships per page (default from config, normally 3)
        #[arg(long)]
        page_size: Option<String>,
    },

    /// Count ships matching the filters
    Count {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, page-size)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Ship fields as given on the command line. Parsing happens in the API layer
/// so that bad values surface as `MalformedInput` rather than clap errors.
#[derive(Args, Debug, Default, Clone)]
pub struct ShipFieldArgs {
    /// Ship name (1-50 characters)
    #[arg(long)]
    pub name: Option<String>,

    /// Home planet (1-50 characters)
    #[arg(long)]
    pub planet: Option<String>,

    /// TRANSPORT, MILITARY or MERCHANT
    #[arg(long = "type", value_name = "TYPE")]
    pub ship_type: Option<String>,

    /// Production date (YYYY-MM-DD or a year, 2801-3018)
    #[arg(long, value_name = "DATE")]
    pub prod_date: Option<String>,

    /// Whether the ship is used (true/false)
    #[arg(long, value_name = "BOOL")]
    pub used: Option<String>,

    /// Speed (0.01-0.99)
    #[arg(long)]
    pub speed: Option<String>,

    /// Crew size (1-9999)
    #[arg(long)]
    pub crew_size: Option<String>,
}

#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Name contains this text
    #[arg(long)]
    pub name: Option<String>,

    /// Planet contains this text
    #[arg(long)]
    pub planet: Option<String>,

    /// Exact ship type
    #[arg(long = "type", value_name = "TYPE")]
    pub ship_type: Option<String>,

    /// Produced in or after the year of this date (YYYY-MM-DD, year, or epoch millis).
    /// Four digits are read as a year, so epoch millis need five or more.
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Produced in or before the year of this date (YYYY-MM-DD, year, or epoch millis).
    /// Four digits are read as a year, so epoch millis need five or more.
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Used flag (true/false)
    #[arg(long, value_name = "BOOL")]
    pub used: Option<String>,

    #[arg(long)]
    pub min_speed: Option<String>,

    #[arg(long)]
    pub max_speed: Option<String>,

    #[arg(long)]
    pub min_crew_size: Option<String>,

    #[arg(long)]
    pub max_crew_size: Option<String>,

    #[arg(long)]
    pub min_rating: Option<String>,

    #[arg(long)]
    pub max_rating: Option<String>,
}
