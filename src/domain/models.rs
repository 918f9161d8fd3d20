use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One row of scanner output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawDependency {
    pub name: String,
    pub license_url: String,
    pub license_id: String,
}

/// A bundle entry. Field names and order are the on-disk schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLicense {
    pub name: String,
    #[serde(rename = "licenseId")]
    pub license_id: String,
    #[serde(rename = "license")]
    pub license_text: String,
    /// Always true for now; kept for consumers that read the bundle.
    pub spdx: bool,
}

#[derive(Serialize)]
pub struct UpdateReport {
    pub bundle: String,
    pub dependencies: usize,
    pub sha256: String,
}

#[derive(Serialize)]
pub struct CheckReport {
    pub bundle: String,
    pub dependencies: usize,
    pub up_to_date: bool,
    pub expected_sha256: String,
    /// None when the bundle file could not be read.
    pub actual_sha256: Option<String>,
}

#[derive(Serialize)]
pub struct DependencyStatus {
    pub name: String,
    pub license_id: String,
    pub license_url: String,
    pub status: String,
}

#[derive(Serialize)]
pub struct CheckItem {
    pub name: String,
    pub status: String,
}

#[derive(Serialize)]
pub struct DoctorReport {
    pub overall: String,
    pub checks: Vec<CheckItem>,
}
