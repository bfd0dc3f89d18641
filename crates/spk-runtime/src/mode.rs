#![forbid(unsafe_code)]

//! Runtime mode definitions for Strict and Hardened operation.

use serde::{Deserialize, Serialize};

/// Operational mode governing how transforms treat suspicious input.
///
/// - **Strict**: IEEE semantics end to end; NaN and infinities in the input
///   propagate into the spectrum untouched.
/// - **Hardened**: Adds finite-check rejection before any arithmetic runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RuntimeMode {
    #[default]
    Strict,
    Hardened,
}

impl RuntimeMode {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Strict => "Strict",
            Self::Hardened => "Hardened",
        }
    }

    /// Whether non-finite input must be rejected regardless of caller flags.
    #[must_use]
    pub fn rejects_non_finite(self) -> bool {
        matches!(self, Self::Hardened)
    }
}
