pub const DEFAULT_BUNDLE_FILE: &str = "licenses.json";
pub const DEFAULT_CONFIG_FILE: &str = "licensebot.toml";

/// Names under our own module path are never reported.
pub const DEFAULT_INTERNAL_PREFIX: &str = "mosaicmfg.com";

pub const DEFAULT_SCANNER_PROGRAM: &str = "go-licenses";
pub const DEFAULT_SCANNER_ARGS: &[&str] = &["csv", "."];
pub const DEFAULT_SCANNER_INSTALL: &[&str] =
    &["go", "install", "github.com/google/go-licenses@latest"];

pub const BUILTIN_BLACKLIST: &str = include_str!("../../blacklist.txt");

pub const STALE_BUNDLE_HINT: &str = "Run `licensebot update` and commit the changes.";
