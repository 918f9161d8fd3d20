//! License text resolution: raw-URL rewriting, fetching, newline
//! normalization and display-name canonicalization.

use crate::domain::models::{RawDependency, ResolvedLicense};
use crate::error::AuditError;

/// Code hosts whose browse URLs and module paths we know how to handle.
struct HostingRule {
    /// Module path prefix, e.g. `github.com/`.
    module_prefix: &'static str,
    web_prefix: &'static str,
    raw_url: fn(&str) -> Option<String>,
}

const HOSTING_RULES: &[HostingRule] = &[
    HostingRule {
        module_prefix: "github.com/",
        web_prefix: "https://github.com/",
        raw_url: github_raw_url,
    },
    HostingRule {
        module_prefix: "gitlab.com/",
        web_prefix: "https://gitlab.com/",
        raw_url: gitlab_raw_url,
    },
];

// https://github.com/<org>/<repo>/blob/<ref>/<path>
//   -> https://raw.githubusercontent.com/<org>/<repo>/<ref>/<path>
fn github_raw_url(url: &str) -> Option<String> {
    let rest = url.strip_prefix("https://github.com/")?;
    let parts: Vec<&str> = rest.splitn(4, '/').collect();
    if parts.len() != 4 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    match parts[2] {
        "blob" | "raw" if !parts[3].is_empty() => Some(format!(
            "https://raw.githubusercontent.com/{}/{}/{}",
            parts[0], parts[1], parts[3]
        )),
        _ => None,
    }
}

// https://gitlab.com/<org>/<repo>/-/blob/<ref>/<path> -> .../-/raw/<ref>/<path>
fn gitlab_raw_url(url: &str) -> Option<String> {
    let rest = url.strip_prefix("https://gitlab.com/")?;
    let (project, file) = rest.split_once("/-/blob/")?;
    if project.is_empty() || file.is_empty() {
        return None;
    }
    Some(format!("https://gitlab.com/{}/-/raw/{}", project, file))
}

/// Point browse URLs at the raw file; anything unrecognized is returned as is.
pub fn raw_license_url(url: &str) -> String {
    HOSTING_RULES
        .iter()
        .filter(|rule| url.starts_with(rule.web_prefix))
        .find_map(|rule| (rule.raw_url)(url))
        .unwrap_or_else(|| url.to_string())
}

/// `github.com/<org>/<repo>/...` becomes `<repo>`.
///
/// Names that are not under a known host, have fewer than three segments,
/// or have an empty repository segment are left unchanged.
pub fn canonical_name(name: &str) -> String {
    let hosted = HOSTING_RULES
        .iter()
        .any(|rule| name.starts_with(rule.module_prefix));
    if !hosted {
        return name.to_string();
    }
    match name.split('/').nth(2) {
        Some(repo) if !repo.is_empty() => repo.to_string(),
        _ => name.to_string(),
    }
}

pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Transport for license text. Implementations must be shareable across
/// fetch workers.
pub trait LicenseFetcher: Sync {
    fn fetch(&self, url: &str) -> Result<String, AuditError>;
}

pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("licensebot/", env!("CARGO_PKG_VERSION")))
            .timeout(None)
            .build()?;
        Ok(Self { client })
    }
}

impl LicenseFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, AuditError> {
        let fetch_err = |e: reqwest::Error| AuditError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        };
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(fetch_err)?
            .error_for_status()
            .map_err(fetch_err)?;
        // The response (and its connection) is released when `resp` is consumed here.
        resp.text().map_err(|e| AuditError::Read {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

pub fn resolve(
    dep: &RawDependency,
    fetcher: &dyn LicenseFetcher,
) -> Result<ResolvedLicense, AuditError> {
    let url = raw_license_url(&dep.license_url);
    if url != dep.license_url {
        tracing::debug!(from = %dep.license_url, to = %url, "rewrote license url");
    }
    tracing::debug!(dependency = %dep.name, url = %url, "fetching license text");
    let text = fetcher.fetch(&url)?;

    Ok(ResolvedLicense {
        name: canonical_name(&dep.name),
        license_id: dep.license_id.clone(),
        license_text: normalize_newlines(&text),
        spdx: true,
    })
}
