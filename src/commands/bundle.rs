use crate::*;
use std::path::Path;

fn render_bundle(ctx: &Context) -> anyhow::Result<(Bundle, String)> {
    let scanner = ctx.config.scanner();
    let fetcher = HttpFetcher::new()?;
    let auditor = Auditor {
        scanner: &scanner,
        fetcher: &fetcher,
        blacklist: &ctx.blacklist,
        internal_prefix: &ctx.config.internal_prefix,
    };
    let bundle = auditor.build_bundle(&ctx.root)?;
    let rendered = bundle.render()?;
    Ok((bundle, rendered))
}

/// `None` when no snapshot exists yet; any other read failure is an error.
fn read_snapshot(path: &Path) -> anyhow::Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(s) => Ok(Some(s)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(anyhow::anyhow!("failed to read bundle {}: {}", path.display(), e)),
    }
}

pub fn handle_bundle_commands(cli: &Cli, ctx: &Context) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Update { bundle_path } => {
            let path = ctx.bundle_path(bundle_path.as_deref())?;
            let (bundle, rendered) = render_bundle(ctx)?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, &rendered)?;
            tracing::info!(path = %path.display(), dependencies = bundle.len(), "wrote license bundle");

            let report = UpdateReport {
                bundle: path.display().to_string(),
                dependencies: bundle.len(),
                sha256: sha256_hex(&rendered),
            };
            print_report(cli.json, true, report, |r| {
                format!("updated {} ({} dependencies)", r.bundle, r.dependencies)
            })?;
        }
        Commands::Check { bundle_path } => {
            let path = ctx.bundle_path(bundle_path.as_deref())?;
            let (bundle, rendered) = render_bundle(ctx)?;
            let on_disk = read_snapshot(&path)?;
            let up_to_date = on_disk
                .as_deref()
                .map(|d| is_current(&rendered, d))
                .unwrap_or(false);

            let report = CheckReport {
                bundle: path.display().to_string(),
                dependencies: bundle.len(),
                up_to_date,
                expected_sha256: sha256_hex(&rendered),
                actual_sha256: on_disk.as_deref().map(sha256_hex),
            };
            print_report(cli.json, up_to_date, report, |r| {
                if r.up_to_date {
                    format!("{} is up to date ({} dependencies)", r.bundle, r.dependencies)
                } else {
                    format!("{} is out of date", r.bundle)
                }
            })?;
            if !up_to_date {
                eprintln!("License bundle is out of date.\n{}", STALE_BUNDLE_HINT);
                std::process::exit(1);
            }
        }
        _ => return Ok(false),
    }

    Ok(true)
}
