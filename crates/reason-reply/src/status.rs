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

use serde::{Deserialize, Serialize};

/// The tri-state outcome of a side-effecting operation.
///
/// A fresh reply starts as [`Status::Unknown`]; recording an outcome moves it
/// to [`Status::Ok`] or [`Status::Bad`]. Once `Bad`, a reply does not revert
/// to `Ok` on its own.
///
/// # Examples
///
/// ```rust
/// use reason_reply::status::Status;
///
/// assert_eq!(Status::default(), Status::Unknown);
/// assert_eq!(format!("{}", Status::Ok), "OK");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// The operation succeeded and a payload was recorded.
    Ok,
    /// The operation failed.
    Bad,
    /// No outcome has been recorded yet.
    #[default]
    Unknown,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Ok => write!(f, "OK"),
            Status::Bad => write!(f, "BAD"),
            Status::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// The error returned when a string does not name a [`Status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatusError {
    /// The string token that failed to parse.
    pub token: String,
}

impl std::fmt::Display for ParseStatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Could not parse token '{}' as a status", self.token)
    }
}

impl std::error::Error for ParseStatusError {}

impl std::str::FromStr for Status {
    type Err = ParseStatusError;

    /// Parses a canonical status name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reason_reply::status::Status;
    ///
    /// let status: Status = "OK".parse().unwrap();
    /// assert_eq!(status, Status::Ok);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OK" => Ok(Status::Ok),
            "BAD" => Ok(Status::Bad),
            "UNKNOWN" => Ok(Status::Unknown),
            _ => Err(ParseStatusError {
                token: s.to_owned(),
            }),
        }
    }
}
