use crate::domain::models::ResolvedLicense;
use sha2::{Digest, Sha256};

/// Resolved licenses in bundle order: ascending by name, byte-wise, with
/// license id and text breaking ties between names that canonicalize alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    entries: Vec<ResolvedLicense>,
}

impl Bundle {
    pub fn assemble(mut entries: Vec<ResolvedLicense>) -> Self {
        entries.sort_by(|a, b| {
            (&a.name, &a.license_id, &a.license_text).cmp(&(&b.name, &b.license_id, &b.license_text))
        });
        Self { entries }
    }

    pub fn entries(&self) -> &[ResolvedLicense] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Two-space indented JSON without a trailing newline.
    pub fn render(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}

pub fn sha256_hex(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

/// Exact comparison; any byte of drift counts as stale.
pub fn is_current(rendered: &str, on_disk: &str) -> bool {
    rendered == on_disk
}
