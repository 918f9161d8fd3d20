use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "licensebot",
    version,
    about = "Dependency license bundle generator and compliance gate"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(short, long, global = true, help = "Enable debug logging on stderr")]
    pub verbose: bool,
    #[arg(
        long,
        global = true,
        default_value = ".",
        help = "Project root the scanner runs in"
    )]
    pub root: PathBuf,
    #[arg(
        long,
        global = true,
        help = "Config file (defaults to <root>/licensebot.toml when present)"
    )]
    pub config: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        help = "Blacklist file, one license substring per line (overrides config and built-in list)"
    )]
    pub blacklist: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Regenerate the license bundle and overwrite it.
    Update {
        #[arg(help = "JSON file to update (defaults to $CWD/licenses.json)")]
        bundle_path: Option<PathBuf>,
    },
    /// Regenerate the license bundle and fail if it differs from the file.
    Check {
        #[arg(help = "JSON file to compare against (defaults to $CWD/licenses.json)")]
        bundle_path: Option<PathBuf>,
    },
    /// List scanned dependencies and their blacklist status without fetching license text.
    Deps,
    /// Install the dependency scanner with the configured install command.
    InstallScanner,
    /// Report on scanner, config, blacklist and bundle availability.
    Doctor {
        #[arg(help = "Bundle file to look for (defaults to $CWD/licenses.json)")]
        bundle_path: Option<PathBuf>,
    },
}
