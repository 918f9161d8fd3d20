use crate::domain::models::RawDependency;
use crate::error::AuditError;
use std::path::Path;
use std::process::Command;

/// Source of raw `name,licenseUrl,licenseId` rows for a project.
pub trait DependencyScanner {
    fn scan(&self, root: &Path) -> Result<String, AuditError>;
}

/// Runs an external program (go-licenses by default) in the project root.
pub struct CommandScanner {
    pub program: String,
    pub args: Vec<String>,
}

impl DependencyScanner for CommandScanner {
    fn scan(&self, root: &Path) -> Result<String, AuditError> {
        tracing::debug!(program = %self.program, args = ?self.args, root = %root.display(), "running scanner");
        let output = Command::new(&self.program)
            .args(&self.args)
            .current_dir(root)
            .output()
            .map_err(|e| AuditError::Scan(format!("failed to run {}: {}", self.program, e)))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AuditError::Scan(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }
        String::from_utf8(output.stdout)
            .map_err(|e| AuditError::Scan(format!("scanner output is not utf-8: {}", e)))
    }
}

/// Parse scanner CSV, dropping rows under `internal_prefix`.
pub fn parse_rows(raw: &str, internal_prefix: &str) -> Result<Vec<RawDependency>, AuditError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(raw.as_bytes());

    let mut out = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(|e| AuditError::Scan(format!("row {}: {}", idx + 1, e)))?;
        if record.len() != 3 {
            return Err(AuditError::Scan(format!(
                "row {}: expected 3 columns (name, licenseUrl, licenseId), got {}",
                idx + 1,
                record.len()
            )));
        }
        let name = &record[0];
        if !internal_prefix.is_empty() && name.starts_with(internal_prefix) {
            continue;
        }
        out.push(RawDependency {
            name: name.to_string(),
            license_url: record[1].to_string(),
            license_id: record[2].to_string(),
        });
    }
    Ok(out)
}

/// Invoke the scanner once and parse what it prints.
pub fn collect(
    scanner: &dyn DependencyScanner,
    root: &Path,
    internal_prefix: &str,
) -> Result<Vec<RawDependency>, AuditError> {
    let raw = scanner.scan(root)?;
    let rows = parse_rows(&raw, internal_prefix)?;
    tracing::debug!(rows = rows.len(), "collected dependency rows");
    Ok(rows)
}

/// Run the configured install command (e.g. `go install .../go-licenses@latest`).
pub fn install_scanner(command: &[String]) -> anyhow::Result<()> {
    let Some((program, args)) = command.split_first() else {
        anyhow::bail!("no scanner install command configured");
    };
    tracing::debug!(program = %program, args = ?args, "installing scanner");
    let status = Command::new(program).args(args).status()?;
    if !status.success() {
        anyhow::bail!("scanner install failed: {} exited with {}", program, status);
    }
    Ok(())
}

/// Whether the scanner program can be started at all; its exit status is ignored.
pub fn scanner_available(program: &str) -> bool {
    Command::new(program).arg("--help").output().is_ok()
}

#[cfg(test)]
mod tests {
    use super::{install_scanner, parse_rows, CommandScanner, DependencyScanner};
    use crate::error::AuditError;

    const ROWS: &str = "\
github.com/acme/widget,https://github.com/acme/widget/blob/v1.0.0/LICENSE,MIT
mosaicmfg.com/tools/internal,https://example.com/LICENSE,Proprietary
golang.org/x/text,https://cs.opensource.google/go/x/text/+/v0.3.0:LICENSE,BSD-3-Clause
";

    #[test]
    fn rows_under_internal_prefix_are_dropped() {
        let rows = parse_rows(ROWS, "mosaicmfg.com").expect("parse");
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["github.com/acme/widget", "golang.org/x/text"]);
        assert_eq!(rows[0].license_id, "MIT");
        assert_eq!(
            rows[0].license_url,
            "https://github.com/acme/widget/blob/v1.0.0/LICENSE"
        );
    }

    #[test]
    fn empty_prefix_keeps_everything() {
        let rows = parse_rows(ROWS, "").expect("parse");
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn empty_output_is_no_rows() {
        assert!(parse_rows("", "mosaicmfg.com").expect("parse").is_empty());
    }

    #[test]
    fn wrong_column_count_is_scan_failure() {
        let err = parse_rows("github.com/acme/widget,MIT\n", "x").unwrap_err();
        assert!(matches!(err, AuditError::Scan(ref m) if m.contains("expected 3 columns")));
    }

    #[test]
    fn quoted_fields_are_unquoted() {
        let rows = parse_rows("\"a/b,c\",https://x/LICENSE,MIT\n", "").expect("parse");
        assert_eq!(rows[0].name, "a/b,c");
    }

    #[cfg(unix)]
    #[test]
    fn failing_scanner_is_scan_failure() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let scanner = CommandScanner {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), "echo boom >&2; exit 3".to_string()],
        };
        let err = scanner.scan(dir.path()).unwrap_err();
        assert!(matches!(err, AuditError::Scan(ref m) if m.contains("boom")));
    }

    #[test]
    fn empty_install_command_is_rejected() {
        assert!(install_scanner(&[]).is_err());
    }

    #[test]
    fn missing_scanner_program_is_scan_failure() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let scanner = CommandScanner {
            program: "licensebot-no-such-scanner".to_string(),
            args: vec![],
        };
        assert!(matches!(
            scanner.scan(dir.path()),
            Err(AuditError::Scan(_))
        ));
    }
}
