//! The contract every check implements.
//!
//! A check takes an ordered list of string parameters, may read host state
//! through a [`Host`], and returns a [`CheckResult`]. Parameters are
//! position-significant; there are no named or optional parameters.
//!
//! Two kinds of "no" are kept apart:
//! - the asserted condition is false: `Ok(CheckResult::Failed(..))`
//! - the check could not answer (bad source, bad parameter): `Err(..)`

use crate::error::{HostcheckError, Result};
use crate::host::Host;
use serde::Serialize;
use std::time::Duration;

/// Outcome of one check.
///
/// `Passed` has exit code 0 and an empty message; `Failed` has exit code 1
/// and a non-empty message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Passed,
    Failed(String),
}

impl CheckResult {
    /// `Passed` when `condition` holds, otherwise the result of `otherwise`.
    pub fn check(condition: bool, otherwise: impl FnOnce() -> CheckResult) -> Self {
        if condition {
            CheckResult::Passed
        } else {
            otherwise()
        }
    }

    /// Whether the asserted condition held.
    pub fn is_success(&self) -> bool {
        matches!(self, CheckResult::Passed)
    }

    /// 0 on success, 1 on failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckResult::Passed => 0,
            CheckResult::Failed(_) => 1,
        }
    }

    /// Diagnostic message, empty on success.
    pub fn message(&self) -> &str {
        match self {
            CheckResult::Passed => "",
            CheckResult::Failed(msg) => msg,
        }
    }
}

/// Serializable record of a check invocation and its outcome.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub check: String,
    pub parameters: Vec<String>,
    pub exit_code: i32,
    pub message: String,
}

impl CheckReport {
    /// Record `result` for `check(parameters)`.
    pub fn new(check: &str, parameters: &[String], result: &CheckResult) -> Self {
        Self {
            check: check.to_string(),
            parameters: parameters.to_vec(),
            exit_code: result.exit_code(),
            message: result.message().to_string(),
        }
    }
}

/// Positional parameters of one check invocation.
#[derive(Debug, Clone, Copy)]
pub struct Parameters<'a> {
    check: &'a str,
    values: &'a [String],
}

impl<'a> Parameters<'a> {
    /// Wrap the parameters passed to `check`.
    pub fn new(check: &'a str, values: &'a [String]) -> Self {
        Self { check, values }
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parameter at `position`.
    pub fn get(&self, position: usize) -> Result<&'a str> {
        self.values
            .get(position)
            .map(String::as_str)
            .ok_or_else(|| HostcheckError::WrongArity {
                check: self.check.to_string(),
                expected: position + 1,
                got: self.values.len(),
            })
    }

    /// Parameter at `position` as a decimal integer.
    ///
    /// No whitespace or trailing characters are tolerated.
    pub fn integer(&self, position: usize) -> Result<i64> {
        let value = self.get(position)?;
        value.parse::<i64>().map_err(|e| self.invalid(position, value, e.to_string()))
    }

    /// Parameter at `position` as a duration such as `500ms`, `5s`,
    /// `1m30s` or `0`.
    pub fn duration(&self, position: usize) -> Result<Duration> {
        let value = self.get(position)?;
        parse_duration(value).ok_or_else(|| {
            self.invalid(
                position,
                value,
                "expected a duration such as 500ms, 5s or 1m30s".to_string(),
            )
        })
    }

    fn invalid(&self, position: usize, value: &str, message: String) -> HostcheckError {
        HostcheckError::InvalidParameter {
            check: self.check.to_string(),
            position,
            value: value.to_string(),
            message,
        }
    }
}

/// Signature of a check implementation.
pub type CheckFn = fn(&Parameters<'_>, &dyn Host) -> Result<CheckResult>;

/// A named check with its parameter list.
#[derive(Debug, Clone, Copy)]
pub struct CheckDef {
    /// Name the check is invoked by, e.g. `DockerImage`.
    pub name: &'static str,
    /// One-line description.
    pub summary: &'static str,
    /// Parameter names, in order.
    pub params: &'static [&'static str],
    /// Implementation.
    pub run: CheckFn,
}

impl CheckDef {
    /// Run the check after verifying the parameter count.
    pub fn invoke(&self, values: &[String], host: &dyn Host) -> Result<CheckResult> {
        if values.len() != self.params.len() {
            return Err(HostcheckError::WrongArity {
                check: self.name.to_string(),
                expected: self.params.len(),
                got: values.len(),
            });
        }
        tracing::debug!(check = self.name, ?values, "running check");
        let result = (self.run)(&Parameters::new(self.name, values), host)?;
        tracing::debug!(check = self.name, passed = result.is_success(), "check finished");
        Ok(result)
    }
}

/// Parse a duration made of `<number><unit>` pairs.
///
/// Units are `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`; numbers may have
/// a fractional part. A bare `0` is zero. Negative durations clamp to zero.
pub fn parse_duration(text: &str) -> Option<Duration> {
    let (negative, mut rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if rest == "0" {
        return Some(Duration::ZERO);
    }
    if rest.is_empty() {
        return None;
    }

    let mut nanos = 0f64;
    while !rest.is_empty() {
        let number_end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if number_end == 0 {
            return None;
        }
        let value: f64 = rest[..number_end].parse().ok()?;
        rest = &rest[number_end..];

        let unit_end = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let scale = match &rest[..unit_end] {
            "ns" => 1.0,
            "us" | "µs" | "μs" => 1e3,
            "ms" => 1e6,
            "s" => 1e9,
            "m" => 60e9,
            "h" => 3600e9,
            _ => return None,
        };
        nanos += value * scale;
        rest = &rest[unit_end..];
    }

    if negative {
        return Some(Duration::ZERO);
    }
    Some(Duration::from_nanos(nanos.round() as u64))
}
