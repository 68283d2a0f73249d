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

//! # Symbolic Root Causes
//!
//! A root cause is a symbolic tag naming the category of a failure. Tags are
//! polymorphic over the [`CauseTag`] capability: the built-in [`Cause`]
//! constants are one implementation, and consumers are free to supply their
//! own enumerations without this crate knowing about them.
//!
//! ## Encoding
//!
//! A tag is rendered for humans (and error messages) by lower-casing its
//! canonical name and replacing every underscore with a period:
//! `CONDITION_NOT_SATISFIED` becomes `condition.not.satisfied`. An absent tag
//! encodes as [`Cause::GeneralError`].
//!
//! ## Usage
//!
//! ```rust
//! use reason_check::cause::{encode, Cause, CauseTag};
//!
//! #[derive(Debug, Clone, Copy)]
//! enum MyErrors {
//!     OopsIFlopped,
//! }
//!
//! impl CauseTag for MyErrors {
//!     fn name(&self) -> &str {
//!         "OOPS_I_FLOPPED"
//!     }
//! }
//!
//! assert_eq!(encode(Some(&MyErrors::OopsIFlopped)), "oops.i.flopped");
//! assert_eq!(encode(Some(&Cause::MissingData)), "missing.data");
//! assert_eq!(encode(None), "general.error");
//! ```

use serde::{Deserialize, Serialize};

/// A capability trait for symbolic root cause tags.
///
/// Implementors yield their canonical `SCREAMING_SNAKE_CASE` name; everything
/// else (encoding, fallbacks) is derived from it. The trait is object-safe so
/// checks can accept any tag behind `&dyn CauseTag`.
///
/// # Examples
///
/// ```rust
/// use reason_check::cause::CauseTag;
///
/// struct StorageFull;
///
/// impl CauseTag for StorageFull {
///     fn name(&self) -> &str {
///         "STORAGE_FULL"
///     }
/// }
/// ```
pub trait CauseTag {
    /// The canonical name of this tag, e.g. `MISSING_DATA`.
    fn name(&self) -> &str;
}

/// The built-in root cause constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Cause {
    /// A general processing error, with no further (or unknown) cause.
    GeneralError,
    /// An invalid state, caused either by a routine's internal processing
    /// or by invalid input parameters.
    ConditionNotSatisfied,
    /// A required argument was absent.
    MissingData,
}

impl CauseTag for Cause {
    fn name(&self) -> &str {
        match self {
            Cause::GeneralError => "GENERAL_ERROR",
            Cause::ConditionNotSatisfied => "CONDITION_NOT_SATISFIED",
            Cause::MissingData => "MISSING_DATA",
        }
    }
}

impl std::fmt::Display for Cause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", encode(Some(self)))
    }
}

/// The error returned when a string does not name a built-in [`Cause`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCauseError {
    /// The string token that failed to parse.
    pub token: String,
}

impl std::fmt::Display for ParseCauseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Could not parse token '{}' as a cause", self.token)
    }
}

impl std::error::Error for ParseCauseError {}

impl std::str::FromStr for Cause {
    type Err = ParseCauseError;

    /// Parses a canonical cause name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reason_check::cause::Cause;
    ///
    /// let cause: Cause = "MISSING_DATA".parse().unwrap();
    /// assert_eq!(cause, Cause::MissingData);
    /// assert!("NOT_A_CAUSE".parse::<Cause>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GENERAL_ERROR" => Ok(Cause::GeneralError),
            "CONDITION_NOT_SATISFIED" => Ok(Cause::ConditionNotSatisfied),
            "MISSING_DATA" => Ok(Cause::MissingData),
            _ => Err(ParseCauseError {
                token: s.to_owned(),
            }),
        }
    }
}

/// Encodes a string representation for a root cause tag.
///
/// The tag's canonical name is lower-cased and every underscore is replaced
/// by a period. An absent tag defaults to [`Cause::GeneralError`].
///
/// # Examples
///
/// ```rust
/// use reason_check::cause::{encode, Cause};
///
/// assert_eq!(
///     encode(Some(&Cause::ConditionNotSatisfied)),
///     "condition.not.satisfied"
/// );
/// assert_eq!(encode(None), encode(Some(&Cause::GeneralError)));
/// ```
pub fn encode(cause: Option<&dyn CauseTag>) -> String {
    let tag: &dyn CauseTag = match cause {
        Some(c) => c,
        None => &Cause::GeneralError,
    };
    tag.name().to_lowercase().replace('_', ".")
}
