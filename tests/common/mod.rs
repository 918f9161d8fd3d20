#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Serves license text from a wiremock server. Unmounted paths answer 404.
pub struct LicenseServer {
    server: MockServer,
    bodies: Mutex<HashMap<String, String>>,
    rt: Runtime,
}

impl LicenseServer {
    pub fn start() -> Self {
        let rt = Runtime::new().expect("create tokio runtime");
        let server = rt.block_on(MockServer::start());
        Self {
            server,
            bodies: Mutex::new(HashMap::new()),
            rt,
        }
    }

    /// Mounts `body` at `route`, replacing any earlier body for it.
    /// Remounting resets the request journal.
    pub fn set(&self, route: &str, body: &str) {
        let mut bodies = self.bodies.lock().expect("lock bodies");
        bodies.insert(route.to_string(), body.to_string());
        self.rt.block_on(async {
            self.server.reset().await;
            for (p, b) in bodies.iter() {
                Mock::given(method("GET"))
                    .and(path(p.as_str()))
                    .respond_with(ResponseTemplate::new(200).set_body_string(b.as_str()))
                    .mount(&self.server)
                    .await;
            }
        });
    }

    pub fn url(&self, route: &str) -> String {
        format!("{}{}", self.server.uri(), route)
    }

    /// Requests received since the last `set`, matched or not.
    pub fn hits(&self) -> usize {
        self.rt
            .block_on(self.server.received_requests())
            .map(|r| r.len())
            .unwrap_or(0)
    }
}

/// A throwaway project whose "scanner" is `sh scan.sh`, printing `rows.csv`.
pub struct TestEnv {
    _tmp: TempDir,
    pub project: PathBuf,
    pub server: LicenseServer,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let project = tmp.path().join("project");
        fs::create_dir_all(&project).expect("create project dir");

        fs::write(project.join("scan.sh"), "cat rows.csv\n").expect("write scanner script");
        fs::write(
            project.join("licensebot.toml"),
            "internal_prefix = \"mosaicmfg.com\"\n\n[scanner]\nprogram = \"sh\"\nargs = [\"scan.sh\"]\n",
        )
        .expect("write config");

        Self {
            _tmp: tmp,
            project,
            server: LicenseServer::start(),
        }
    }

    pub fn write_rows(&self, rows: &[(&str, &str, &str)]) {
        let csv: String = rows
            .iter()
            .map(|(name, url, id)| format!("{},{},{}\n", name, url, id))
            .collect();
        fs::write(self.project.join("rows.csv"), csv).expect("write scanner rows");
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let p = self.project.join(name);
        fs::write(&p, content).expect("write project file");
        p
    }

    pub fn bundle_path(&self) -> PathBuf {
        self.project.join("licenses.json")
    }

    pub fn read_bundle(&self) -> String {
        fs::read_to_string(self.bundle_path()).expect("read bundle")
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("licensebot");
        cmd.current_dir(&self.project)
            .env_remove("RUST_LOG")
            .env_remove("HTTP_PROXY")
            .env_remove("HTTPS_PROXY")
            .env_remove("ALL_PROXY")
            .env_remove("http_proxy")
            .env_remove("https_proxy")
            .env_remove("all_proxy")
            .env("NO_PROXY", "*")
            .arg("--root")
            .arg(&self.project);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}
