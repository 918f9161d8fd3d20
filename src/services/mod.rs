//! Service layer containing pipeline logic and side-effect helpers.
//!
//! ## Service map
//! - `scanner.rs` — external scanner invocation + CSV row parsing.
//! - `pipeline.rs` — dedupe, blacklist gate, parallel resolution, orchestration.
//! - `blacklist.rs` — policy file loading and substring matching.
//! - `resolve.rs` — raw URL rewriting, fetch transport, text/name normalization.
//! - `bundle.rs` — sorted bundle assembly, rendering, digest, staleness.
//! - `config.rs` — `licensebot.toml` loading and defaults.
//! - `doctor.rs` — environment readiness report.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects (process spawn, HTTP) sit behind `DependencyScanner` and
//!   `LicenseFetcher` so the pipeline can be tested with fakes.
//! - Keep command handlers thin; delegate to services.

pub mod blacklist;
pub mod bundle;
pub mod config;
pub mod doctor;
pub mod output;
pub mod pipeline;
pub mod resolve;
pub mod scanner;
