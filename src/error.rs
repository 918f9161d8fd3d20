use std::fmt;

/// A dependency whose license id matched the blacklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub name: String,
    pub license_id: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.license_id)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum AuditError {
    #[error("dependency scan failed: {0}")]
    Scan(String),
    #[error(
        "failed blacklist check: {} dependencies use blacklisted licenses: {}",
        .violations.len(),
        list_violations(.violations)
    )]
    PolicyViolation { violations: Vec<Violation> },
    #[error("failed to fetch license text from {url}: {reason}")]
    Fetch { url: String, reason: String },
    #[error("failed to read license text from {url}: {reason}")]
    Read { url: String, reason: String },
}

fn list_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
