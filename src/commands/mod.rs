//! Command handler layer.
//!
//! ## Files
//! - `analyze.rs` — single-package quality scoring.
//! - `diff.rs` — original/enhanced comparison.
//! - `validate.rs` — structural + regression validation.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Handlers return the process exit code; fatal errors propagate.

pub mod analyze;
pub mod diff;
pub mod validate;

pub use analyze::handle_analyze;
pub use diff::handle_diff;
pub use validate::handle_validate;
