//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `bundle.rs` — update/check of the license bundle.
//! - `inspect.rs` — deps/doctor/install-scanner.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate pipeline logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod bundle;
pub mod inspect;

pub use bundle::handle_bundle_commands;
pub use inspect::handle_inspect_commands;
