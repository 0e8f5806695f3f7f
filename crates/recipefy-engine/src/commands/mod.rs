//! Command orchestration layer.
//!
//! ## Logging Ownership
//!
//! Each public command logs `log_op_start!` on entry and exactly one of
//! `log_op_end!` or `log_op_error!` on exit. The diff engine below never
//! logs.

pub mod changes;
pub mod history;
