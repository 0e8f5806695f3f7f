//! Structured logging facility for Recipefy
//!
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! The diff engine itself never logs. Operations that touch the version
//! control collaborator (commit changes, branch history) log one start and
//! one end event each.
//!
//! # Usage
//!
//! ```rust
//! use recipefy_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
