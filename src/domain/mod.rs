//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep dependency/bundle/report structs in one place.
//! - Make JSON output and bundle schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — dependency records, bundle entries, report/output structs.
//! - `constants.rs` — stable defaults (bundle filename, scanner command, namespace).
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! `ResolvedLicense` is the bundle schema consumed by other tooling.
//! Keep it synchronized with `docs/contracts/bundle.schema.json`.

pub mod constants;
pub mod models;
