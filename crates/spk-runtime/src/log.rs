#![forbid(unsafe_code)]

//! Structured JSON log lines and shared tolerance assertions.
//!
//! Test suites across the workspace emit one [`TestLogEntry`] per checked
//! property on stderr so runs can be diffed after the fact.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::mode::RuntimeMode;

/// Wall-clock timestamp in milliseconds; zero if the clock is before 1970.
#[must_use]
pub fn now_unix_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}

/// Structured test log entry for forensic comparison across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestLogEntry {
    pub test_id: String,
    pub timestamp_ms: u64,
    pub level: TestLogLevel,
    pub module: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixture_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<RuntimeMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<TestResult>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestLogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestResult {
    Pass,
    Fail,
    Skip,
    Warn,
}

impl TestResult {
    #[must_use]
    pub fn from_pass(pass: bool) -> Self {
        if pass { Self::Pass } else { Self::Fail }
    }
}

impl TestLogEntry {
    #[must_use]
    pub fn new(
        test_id: impl Into<String>,
        module: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            test_id: test_id.into(),
            timestamp_ms: now_unix_ms(),
            level: TestLogLevel::Info,
            module: module.into(),
            message: message.into(),
            seed: None,
            fixture_id: None,
            mode: None,
            result: None,
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: TestLogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_result(mut self, result: TestResult) -> Self {
        self.result = Some(result);
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: RuntimeMode) -> Self {
        self.mode = Some(mode);
        self
    }

    #[must_use]
    pub fn with_fixture(mut self, fixture_id: impl Into<String>) -> Self {
        self.fixture_id = Some(fixture_id.into());
        self
    }

    /// Serialize to JSON line for structured logging.
    #[must_use]
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }

    /// Write the JSON line to stderr.
    pub fn emit(&self) {
        eprintln!("{}", self.to_json_line());
    }
}

/// Closeness bound `|actual - expected| <= atol + rtol * |expected|`.
///
/// NaN on either side is never admitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    pub atol: f64,
    pub rtol: f64,
}

impl Tolerance {
    #[must_use]
    pub const fn absolute(atol: f64) -> Self {
        Self { atol, rtol: 0.0 }
    }

    #[must_use]
    pub const fn relative(rtol: f64) -> Self {
        Self { atol: 0.0, rtol }
    }

    #[must_use]
    pub const fn with_rtol(mut self, rtol: f64) -> Self {
        self.rtol = rtol;
        self
    }

    #[must_use]
    pub fn bound(&self, expected: f64) -> f64 {
        self.atol + self.rtol * expected.abs()
    }

    #[must_use]
    pub fn admits(&self, actual: f64, expected: f64) -> bool {
        (actual - expected).abs() <= self.bound(expected)
    }

    /// Panic with `label` and both values when `actual` is out of bounds.
    #[track_caller]
    pub fn check(&self, label: &str, actual: f64, expected: f64) {
        assert!(
            self.admits(actual, expected),
            "{label}: actual={actual} expected={expected} diff={} bound={}",
            (actual - expected).abs(),
            self.bound(expected)
        );
    }

    /// Element-wise [`Self::check`]; lengths must match.
    #[track_caller]
    pub fn check_all(&self, label: &str, actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{label}: length differs");
        for (idx, (&a, &e)) in actual.iter().zip(expected).enumerate() {
            self.check(&format!("{label}[{idx}]"), a, e);
        }
    }
}
