use crate::domain::constants::BUILTIN_BLACKLIST;
use crate::services::resolve::normalize_newlines;
use std::path::Path;

/// Lowercased license-id substrings that fail the gate.
///
/// Built once per process and only read afterwards, so it can be shared
/// across fetch workers by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    entries: Vec<String>,
}

impl Blacklist {
    /// One entry per line; `\r\n`, `\r` and `\n` all end a line.
    pub fn parse(source: &str) -> Self {
        let entries = normalize_newlines(source)
            .lines()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(|l| l.to_lowercase())
            .collect();
        Self { entries }
    }

    pub fn builtin() -> Self {
        Self::parse(BUILTIN_BLACKLIST)
    }

    /// A missing file is an empty policy, not an error.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "blacklist file not found; no licenses are blocked");
            return Ok(Self::default());
        }
        Ok(Self::parse(&std::fs::read_to_string(path)?))
    }

    pub fn matches(&self, license_id: &str) -> bool {
        let lowered = license_id.to_lowercase();
        self.entries.iter().any(|key| lowered.contains(key.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
