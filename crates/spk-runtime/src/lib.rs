#![forbid(unsafe_code)]

//! spectrakit runtime: operating modes and structured logging shared by
//! every crate of the workspace.
//!
//! ## Module layout
//!
//! | Module | Contents                                            |
//! |--------|-----------------------------------------------------|
//! | `mode` | [`RuntimeMode`] enum (Strict / Hardened)             |
//! | `log`  | [`TestLogEntry`] JSON lines, [`Tolerance`] bounds    |

pub mod log;
pub mod mode;

// ── Re-exports: preserve the flat public API ────────────────────────
pub use log::{TestLogEntry, TestLogLevel, TestResult, Tolerance, now_unix_ms};
pub use mode::RuntimeMode;
