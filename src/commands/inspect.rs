use crate::*;

pub fn handle_inspect_commands(cli: &Cli, ctx: &Context) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Deps => {
            let scanner = ctx.config.scanner();
            let deps = dedupe(collect(&scanner, &ctx.root, &ctx.config.internal_prefix)?);
            let rows: Vec<DependencyStatus> = deps
                .into_iter()
                .map(|d| {
                    let status = if ctx.blacklist.matches(&d.license_id) {
                        "blacklisted"
                    } else {
                        "ok"
                    };
                    DependencyStatus {
                        name: d.name,
                        license_id: d.license_id,
                        license_url: d.license_url,
                        status: status.to_string(),
                    }
                })
                .collect();
            let blocked = rows.iter().filter(|r| r.status != "ok").count();
            print_rows(cli.json, blocked == 0, &rows, |r| {
                format!("{}\t{}\t{}", r.name, r.license_id, r.status)
            })?;
            if blocked > 0 {
                std::process::exit(1);
            }
        }
        Commands::InstallScanner => {
            install_scanner(&ctx.config.scanner.install)?;
            print_report(cli.json, true, &ctx.config.scanner.program, |p| {
                format!("installed {}", p)
            })?;
        }
        Commands::Doctor { bundle_path } => {
            let bundle = ctx.bundle_path(bundle_path.as_deref())?;
            let report = doctor(
                &ctx.root,
                &ctx.config_file,
                &ctx.config,
                &ctx.blacklist,
                &bundle,
            );
            let ok = report.overall == "ok";
            if cli.json {
                print_report(true, ok, report, |_| String::new())?;
            } else {
                println!("doctor: {}", report.overall);
                for c in report.checks {
                    println!("{}\t{}", c.name, c.status);
                }
            }
        }
        _ => return Ok(false),
    }

    Ok(true)
}
