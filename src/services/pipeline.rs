//! Collect -> dedupe -> blacklist gate -> resolve -> assemble.
//!
//! The gate runs over the whole deduplicated set before any license text
//! is requested; a single violation means no fetch is ever dispatched.

use crate::domain::models::RawDependency;
use crate::error::{AuditError, Violation};
use crate::services::blacklist::Blacklist;
use crate::services::bundle::Bundle;
use crate::services::resolve::{resolve, LicenseFetcher};
use crate::services::scanner::{collect, DependencyScanner};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::Path;

/// Keep the first row for each name, in input order.
///
/// Later rows with the same name are dropped without comparing their
/// license metadata.
pub fn dedupe(rows: Vec<RawDependency>) -> Vec<RawDependency> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        if seen.contains(&row.name) {
            continue;
        }
        seen.insert(row.name.clone());
        out.push(row);
    }
    out
}

pub fn find_violations(deps: &[RawDependency], blacklist: &Blacklist) -> Vec<Violation> {
    deps.iter()
        .filter(|d| blacklist.matches(&d.license_id))
        .map(|d| {
            tracing::error!(dependency = %d.name, license = %d.license_id, "license is blacklisted");
            Violation {
                name: d.name.clone(),
                license_id: d.license_id.clone(),
            }
        })
        .collect()
}

pub fn enforce_policy(deps: &[RawDependency], blacklist: &Blacklist) -> Result<(), AuditError> {
    let violations = find_violations(deps, blacklist);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(AuditError::PolicyViolation { violations })
    }
}

pub struct Auditor<'a> {
    pub scanner: &'a dyn DependencyScanner,
    pub fetcher: &'a dyn LicenseFetcher,
    pub blacklist: &'a Blacklist,
    pub internal_prefix: &'a str,
}

impl Auditor<'_> {
    /// Scanner rows for `root`, deduplicated but not yet checked.
    pub fn dependencies(&self, root: &Path) -> Result<Vec<RawDependency>, AuditError> {
        let rows = collect(self.scanner, root, self.internal_prefix)?;
        let deps = dedupe(rows);
        tracing::debug!(dependencies = deps.len(), "deduplicated dependencies");
        Ok(deps)
    }

    pub fn build_bundle(&self, root: &Path) -> Result<Bundle, AuditError> {
        let deps = self.dependencies(root)?;
        enforce_policy(&deps, self.blacklist)?;

        let fetcher = self.fetcher;
        let resolved = deps
            .par_iter()
            .map(|d| resolve(d, fetcher))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Bundle::assemble(resolved))
    }
}
