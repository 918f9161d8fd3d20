use crate::domain::constants::{
    DEFAULT_BUNDLE_FILE, DEFAULT_CONFIG_FILE, DEFAULT_INTERNAL_PREFIX, DEFAULT_SCANNER_ARGS,
    DEFAULT_SCANNER_INSTALL, DEFAULT_SCANNER_PROGRAM,
};
use crate::services::blacklist::Blacklist;
use crate::services::scanner::CommandScanner;
use serde::Deserialize;
use std::path::{Path, PathBuf};

fn default_internal_prefix() -> String {
    DEFAULT_INTERNAL_PREFIX.to_string()
}

fn default_bundle() -> PathBuf {
    PathBuf::from(DEFAULT_BUNDLE_FILE)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// `licensebot.toml`. Every key is optional.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_internal_prefix")]
    pub internal_prefix: String,
    #[serde(default = "default_bundle")]
    pub bundle: PathBuf,
    #[serde(default)]
    pub blacklist: Option<PathBuf>,
    #[serde(default)]
    pub scanner: ScannerConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    #[serde(default = "default_scanner_program")]
    pub program: String,
    #[serde(default = "default_scanner_args")]
    pub args: Vec<String>,
    #[serde(default = "default_scanner_install")]
    pub install: Vec<String>,
}

fn default_scanner_program() -> String {
    DEFAULT_SCANNER_PROGRAM.to_string()
}

fn default_scanner_args() -> Vec<String> {
    strings(DEFAULT_SCANNER_ARGS)
}

fn default_scanner_install() -> Vec<String> {
    strings(DEFAULT_SCANNER_INSTALL)
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            program: default_scanner_program(),
            args: default_scanner_args(),
            install: default_scanner_install(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            internal_prefix: default_internal_prefix(),
            bundle: default_bundle(),
            blacklist: None,
            scanner: ScannerConfig::default(),
        }
    }
}

impl Config {
    pub fn scanner(&self) -> CommandScanner {
        CommandScanner {
            program: self.scanner.program.clone(),
            args: self.scanner.args.clone(),
        }
    }

    /// The blacklist from `override_path`, then the configured file, then the
    /// policy compiled into the binary.
    pub fn blacklist(&self, override_path: Option<&Path>) -> anyhow::Result<Blacklist> {
        match override_path.or(self.blacklist.as_deref()) {
            Some(p) => Blacklist::load(p),
            None => Ok(Blacklist::builtin()),
        }
    }
}

pub fn config_path(root: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(p) => p.to_path_buf(),
        None => root.join(DEFAULT_CONFIG_FILE),
    }
}

/// Missing default config means defaults; a missing explicit `--config` is an error.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> anyhow::Result<Config> {
    let path = config_path(root, explicit);
    if !path.exists() {
        if explicit.is_some() {
            anyhow::bail!("config file not found: {}", path.display());
        }
        return Ok(Config::default());
    }
    let raw = std::fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::load_config;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn missing_default_config_uses_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let c = load_config(dir.path(), None).expect("config");
        assert_eq!(c.internal_prefix, "mosaicmfg.com");
        assert_eq!(c.bundle, PathBuf::from("licenses.json"));
        assert_eq!(c.scanner.program, "go-licenses");
        assert_eq!(c.scanner.args, ["csv", "."]);
        assert!(c.blacklist.is_none());
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = TempDir::new().expect("temp dir");
        assert!(load_config(dir.path(), Some(dir.path().join("nope.toml").as_path())).is_err());
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let dir = TempDir::new().expect("temp dir");
        fs::write(
            dir.path().join("licensebot.toml"),
            "internal_prefix = \"example.org/acme\"\n\n[scanner]\nprogram = \"sh\"\nargs = [\"scan.sh\"]\n",
        )
        .expect("write config");
        let c = load_config(dir.path(), None).expect("config");
        assert_eq!(c.internal_prefix, "example.org/acme");
        assert_eq!(c.scanner.program, "sh");
        assert_eq!(c.scanner.args, ["scan.sh"]);
        assert_eq!(c.scanner.install[0], "go");
        assert_eq!(c.bundle, PathBuf::from("licenses.json"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = TempDir::new().expect("temp dir");
        fs::write(dir.path().join("licensebot.toml"), "internal_prefixx = \"a\"\n")
            .expect("write config");
        assert!(load_config(dir.path(), None).is_err());
    }

    #[test]
    fn blacklist_override_wins_over_builtin() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("deny.txt");
        fs::write(&path, "mit\n").expect("write blacklist");
        let c = load_config(dir.path(), None).expect("config");
        assert!(c.blacklist(Some(path.as_path())).unwrap().matches("MIT"));
        assert!(!c.blacklist(None).unwrap().matches("MIT"));
    }
}
