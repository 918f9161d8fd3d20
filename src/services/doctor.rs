use crate::domain::models::{CheckItem, DoctorReport};
use crate::services::blacklist::Blacklist;
use crate::services::config::Config;
use crate::services::scanner::scanner_available;
use std::path::Path;

fn status(ok: bool, otherwise: &str) -> String {
    let s = if ok { "ok" } else { otherwise };
    s.to_string()
}

pub fn doctor(
    root: &Path,
    config_file: &Path,
    config: &Config,
    blacklist: &Blacklist,
    bundle: &Path,
) -> DoctorReport {
    let checks = vec![
        CheckItem {
            name: "project_root".to_string(),
            status: status(root.is_dir(), "missing"),
        },
        CheckItem {
            name: "config".to_string(),
            status: status(config_file.exists(), "default"),
        },
        CheckItem {
            name: "blacklist_entries".to_string(),
            status: if blacklist.is_empty() {
                "empty".to_string()
            } else {
                blacklist.len().to_string()
            },
        },
        CheckItem {
            name: "scanner".to_string(),
            status: status(scanner_available(&config.scanner.program), "missing"),
        },
        CheckItem {
            name: "bundle".to_string(),
            status: status(bundle.exists(), "missing"),
        },
    ];

    let overall = status(
        checks
            .iter()
            .all(|c| c.status != "missing" && c.status != "empty"),
        "needs_attention",
    );

    DoctorReport { overall, checks }
}
