// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Precondition Checks
//!
//! Basic assertions with support for constant root cause definitions.
//!
//! Each check validates a value or condition and, on violation, fails with a
//! [`CheckError`] carrying exactly the encoded root cause (or a caller
//! supplied free-form message). Checks return `Result` so callers fail fast
//! with `?` at the top of their routines.
//!
//! The three Java-style call shapes map to three function names per check:
//! a bare variant with a fixed default cause, a `_cause` variant accepting
//! any [`CauseTag`], and a `_msg` variant accepting free-form text.
//!
//! ## Usage
//!
//! ```rust
//! use reason_check::check::{is_true, not_null, CheckError};
//!
//! fn copy(source: Option<&str>, limit: usize) -> Result<String, CheckError> {
//!     let source = not_null(source)?;
//!     is_true(source.len() <= limit)?;
//!     Ok(source.to_owned())
//! }
//!
//! assert_eq!(copy(Some("data"), 16).unwrap(), "data");
//! assert_eq!(copy(None, 16).unwrap_err().message(), "missing.data");
//! ```

use crate::cause::{encode, Cause, CauseTag};

/// The error raised by a failing precondition check.
///
/// Carries exactly the computed message string as its description; the
/// message always encodes the root cause and is guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckError {
    message: String,
}

impl CheckError {
    /// Creates a new `CheckError` with the given message.
    #[inline]
    pub fn new(message: String) -> Self {
        Self { message }
    }

    /// Returns the message describing the violated precondition.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for CheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CheckError {}

/// Non-null argument check.
///
/// Returns the contained value unchanged, or fails with
/// [`Cause::MissingData`] as the root cause.
///
/// # Examples
///
/// ```rust
/// use reason_check::check::not_null;
///
/// assert_eq!(not_null(Some(7)).unwrap(), 7);
/// assert_eq!(
///     not_null::<i32>(None).unwrap_err().message(),
///     "missing.data"
/// );
/// ```
#[inline]
pub fn not_null<T>(value: Option<T>) -> Result<T, CheckError> {
    not_null_msg(value, None)
}

/// Non-null argument check, with support for a root cause tag.
///
/// On failure the message is the encoding of `cause`, substituting
/// [`Cause::MissingData`] when `cause` is absent.
///
/// # Examples
///
/// ```rust
/// use reason_check::cause::Cause;
/// use reason_check::check::not_null_cause;
///
/// let err = not_null_cause::<i32>(None, Some(&Cause::GeneralError)).unwrap_err();
/// assert_eq!(err.message(), "general.error");
///
/// let err = not_null_cause::<i32>(None, None).unwrap_err();
/// assert_eq!(err.message(), "missing.data");
/// ```
pub fn not_null_cause<T>(value: Option<T>, cause: Option<&dyn CauseTag>) -> Result<T, CheckError> {
    let tag: &dyn CauseTag = match cause {
        Some(c) => c,
        None => &Cause::MissingData,
    };
    not_null_msg(value, Some(&encode(Some(tag))))
}

/// Non-null argument check, with support for a free-form message.
///
/// On failure the message is the literal string if non-blank, otherwise the
/// encoding of [`Cause::MissingData`].
///
/// # Examples
///
/// ```rust
/// use reason_check::check::not_null_msg;
///
/// let err = not_null_msg::<i32>(None, Some("custom")).unwrap_err();
/// assert_eq!(err.message(), "custom");
///
/// let err = not_null_msg::<i32>(None, Some("   ")).unwrap_err();
/// assert_eq!(err.message(), "missing.data");
/// ```
pub fn not_null_msg<T>(value: Option<T>, message: Option<&str>) -> Result<T, CheckError> {
    match value {
        Some(v) => Ok(v),
        None => Err(failure(message, &Cause::MissingData)),
    }
}

/// Basic truth check.
///
/// Fails with [`Cause::ConditionNotSatisfied`] as the root cause.
///
/// # Examples
///
/// ```rust
/// use reason_check::check::is_true;
///
/// assert!(is_true(1 + 1 == 2).is_ok());
/// assert_eq!(
///     is_true(false).unwrap_err().message(),
///     "condition.not.satisfied"
/// );
/// ```
#[inline]
pub fn is_true(condition: bool) -> Result<(), CheckError> {
    is_true_msg(condition, None)
}

/// Basic truth check, with support for a root cause tag.
///
/// On failure the message is the encoding of `cause`, substituting
/// [`Cause::ConditionNotSatisfied`] when `cause` is absent.
///
/// # Examples
///
/// ```rust
/// use reason_check::cause::Cause;
/// use reason_check::check::is_true_cause;
///
/// let err = is_true_cause(false, Some(&Cause::MissingData)).unwrap_err();
/// assert_eq!(err.message(), "missing.data");
/// ```
pub fn is_true_cause(condition: bool, cause: Option<&dyn CauseTag>) -> Result<(), CheckError> {
    let tag: &dyn CauseTag = match cause {
        Some(c) => c,
        None => &Cause::ConditionNotSatisfied,
    };
    is_true_msg(condition, Some(&encode(Some(tag))))
}

/// Basic truth check, with support for a free-form message.
///
/// On failure the message is the literal string if non-blank, otherwise the
/// encoding of [`Cause::ConditionNotSatisfied`].
///
/// # Examples
///
/// ```rust
/// use reason_check::check::is_true_msg;
///
/// let err = is_true_msg(false, Some("limit exceeded")).unwrap_err();
/// assert_eq!(err.message(), "limit exceeded");
/// ```
pub fn is_true_msg(condition: bool, message: Option<&str>) -> Result<(), CheckError> {
    if condition {
        Ok(())
    } else {
        Err(failure(message, &Cause::ConditionNotSatisfied))
    }
}

/// Builds the check failure, falling back to `default` for blank messages.
fn failure(message: Option<&str>, default: &dyn CauseTag) -> CheckError {
    match message {
        Some(m) if !m.trim().is_empty() => CheckError::new(m.to_owned()),
        _ => CheckError::new(encode(Some(default))),
    }
}
