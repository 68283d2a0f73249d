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

//! # Reply
//!
//! The generic outcome container for operations with side effects.
//!
//! A `Reply<T>` is created in the `Unknown` state, populated through chained
//! mutators, and handed back to the caller, who inspects status, payload,
//! error, message, and warnings. The payload type `T` is a placeholder for
//! whatever answer the caller expects from the operation — a file handle
//! echoed back, an identifier, a row count.
//!
//! ## Usage
//!
//! ```rust
//! use reason_reply::reply::Reply;
//!
//! fn store(record: &str) -> Reply<usize> {
//!     if record.is_empty() {
//!         return Reply::new().bad(Some("empty record".into()));
//!     }
//!     Reply::new()
//!         .ok(Some(record.len()))
//!         .warning(Some("store() will require a schema in 2.0".to_owned()))
//! }
//!
//! let reply = store("hello");
//! assert!(reply.is_ok());
//! assert!(reply.is_warning());
//! assert_eq!(reply.data(), Some(&5));
//!
//! let reply = store("");
//! assert!(reply.is_bad());
//! assert_eq!(reply.message(), "empty record");
//! ```

use crate::status::Status;

/// The message exposed when a reply carries no additional information.
pub const MESSAGE_DEFAULT: &str = "no.additional.information";

/// The message recorded when a reply is told to succeed without a payload.
pub const MESSAGE_INVALID_RESPONSE_DATA: &str = "response.data.must.not.be.null";

/// The warning text appended when a warning is signaled without a cause.
pub const MESSAGE_UNSPECIFIED_WARNING: &str =
    "This reply signaled a warning without provided cause. please verify your code.";

/// The underlying failure recorded in a failed reply. Any error type works.
pub type ReplyError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error stored when [`Reply::ok`] is invoked without a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingPayloadError;

impl std::fmt::Display for MissingPayloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", MESSAGE_INVALID_RESPONSE_DATA)
    }
}

impl std::error::Error for MissingPayloadError {}

/// A reply to a request with side effects.
///
/// Tracks a typed success payload, a tri-state [`Status`], an optional
/// underlying error, a human-readable message, and an append-only warning
/// list. Mutators take and return the reply by value, so outcomes compose as
/// a fluent chain while the reply stays owned by a single call stack.
///
/// Invariants enforced by the mutators:
///
/// - `Ok` status implies a present payload and an absent error.
/// - A failed reply always exposes a non-empty message through
///   [`Reply::message`], even when no cause was given.
/// - Asking a reply to succeed without a payload fails it instead, with
///   [`MESSAGE_INVALID_RESPONSE_DATA`] as the message.
/// - Warnings never change the status.
///
/// Repeated outcome calls are tolerated; the last write wins.
///
/// # Examples
///
/// ```rust
/// use reason_reply::reply::{Reply, MESSAGE_DEFAULT};
/// use reason_reply::status::Status;
///
/// let reply = Reply::new().ok(Some(0i64));
/// assert!(reply.is_ok());
/// assert_eq!(reply.status(), Status::Ok);
/// assert_eq!(reply.data(), Some(&0));
/// assert_eq!(reply.message(), MESSAGE_DEFAULT);
/// ```
#[derive(Debug)]
pub struct Reply<T> {
    data: Option<T>,
    status: Status,
    error: Option<ReplyError>,
    message: Option<String>,
    warnings: Vec<String>,
}

impl<T> Default for Reply<T> {
    fn default() -> Self {
        Self {
            data: None,
            status: Status::Unknown,
            error: None,
            message: None,
            warnings: Vec::new(),
        }
    }
}

impl<T> Reply<T> {
    /// Creates a new reply in the `Unknown` state.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals a successful operation.
    ///
    /// With `Some(data)` the payload is stored, the status becomes `Ok`, and
    /// any previously recorded error is cleared. With `None` the reply fails
    /// instead, recording a [`MissingPayloadError`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reason_reply::reply::{Reply, MESSAGE_INVALID_RESPONSE_DATA};
    ///
    /// let reply = Reply::<String>::new().ok(None);
    /// assert!(reply.is_bad());
    /// assert_eq!(reply.message(), MESSAGE_INVALID_RESPONSE_DATA);
    /// ```
    pub fn ok(mut self, data: Option<T>) -> Self {
        match data {
            Some(d) => {
                self.data = Some(d);
                self.status = Status::Ok;
                self.error = None;
                self
            }
            None => self.bad(Some(Box::new(MissingPayloadError))),
        }
    }

    /// Signals a failed operation.
    ///
    /// The status becomes `Bad`. With `Some(error)` the error is stored and
    /// the message is derived from its `Display` rendering, falling back to
    /// [`MESSAGE_DEFAULT`] when that rendering is blank. With `None` the
    /// error stays absent and the message is [`MESSAGE_DEFAULT`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reason_reply::reply::{Reply, MESSAGE_DEFAULT};
    ///
    /// let reply = Reply::<()>::new().bad(Some("disk unreachable".into()));
    /// assert!(reply.is_bad());
    /// assert_eq!(reply.message(), "disk unreachable");
    ///
    /// let reply = Reply::<()>::new().bad(None);
    /// assert!(reply.is_bad());
    /// assert!(reply.error().is_none());
    /// assert_eq!(reply.message(), MESSAGE_DEFAULT);
    /// ```
    pub fn bad(mut self, error: Option<ReplyError>) -> Self {
        self.status = Status::Bad;
        self.message = match &error {
            Some(e) => Some(non_blank_or_default(e.to_string())),
            None => Some(MESSAGE_DEFAULT.to_owned()),
        };
        self.error = error;
        self
    }

    /// Signals a failed operation with an explicit message.
    ///
    /// Behaves like [`Reply::bad`], then overwrites the message field with
    /// `message` verbatim — even when it is `None` or blank. A blank explicit
    /// message is therefore observable through [`Reply::message`]; only an
    /// absent one falls back to [`MESSAGE_DEFAULT`]. Callers wanting the
    /// blank-fallback behavior should use [`Reply::bad`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reason_reply::reply::Reply;
    ///
    /// let reply = Reply::<()>::new()
    ///     .bad_with(Some("root cause".into()), Some("operator note".to_owned()));
    /// assert_eq!(reply.message(), "operator note");
    /// ```
    pub fn bad_with(self, error: Option<ReplyError>, message: Option<String>) -> Self {
        let mut reply = self.bad(error);
        reply.message = message;
        reply
    }

    /// Appends an execution warning.
    ///
    /// An absent text is replaced by [`MESSAGE_UNSPECIFIED_WARNING`], so the
    /// warning list reflects every signal. Warnings never affect the status.
    pub fn warning(mut self, message: Option<String>) -> Self {
        self.warnings
            .push(message.unwrap_or_else(|| MESSAGE_UNSPECIFIED_WARNING.to_owned()));
        self
    }

    /// Returns the reply's payload, if any.
    #[inline]
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Consumes the reply and returns the payload, if any.
    #[inline]
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Returns the reply's status. `Unknown` until an outcome is recorded.
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the underlying error, if any.
    #[inline]
    pub fn error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.error.as_deref()
    }

    /// Returns the reply's message, or [`MESSAGE_DEFAULT`] when none is set.
    #[inline]
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(MESSAGE_DEFAULT)
    }

    /// Returns the accumulated warnings, oldest first.
    #[inline]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Returns `true` if the operation succeeded.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }

    /// Returns `true` if the operation failed.
    #[inline]
    pub fn is_bad(&self) -> bool {
        self.status == Status::Bad
    }

    /// Returns `true` if the reply carries warning messages.
    #[inline]
    pub fn is_warning(&self) -> bool {
        !self.warnings.is_empty()
    }
}

impl<T> std::fmt::Display for Reply<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Reply[stat: {}, msg: {}, err: {:?}]",
            self.status,
            self.message(),
            self.error
        )
    }
}

/// Substitutes [`MESSAGE_DEFAULT`] for blank or whitespace-only text.
fn non_blank_or_default(message: String) -> String {
    if message.trim().is_empty() {
        MESSAGE_DEFAULT.to_owned()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// An error whose `Display` rendering is empty, like a Java exception
    /// constructed without a message.
    #[derive(Debug)]
    struct SilentError;

    impl std::fmt::Display for SilentError {
        fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            Ok(())
        }
    }

    impl std::error::Error for SilentError {}

    #[test]
    fn test_fresh_reply_is_unknown_with_defaults() {
        let reply = Reply::<u32>::new();
        assert_eq!(reply.status(), Status::Unknown);
        assert!(!reply.is_ok());
        assert!(!reply.is_bad());
        assert!(reply.data().is_none());
        assert!(reply.error().is_none());
        assert_eq!(reply.message(), MESSAGE_DEFAULT);
    }

    #[test]
    fn test_ok_records_payload_and_status() {
        let reply = Reply::new().ok(Some(0i64));
        assert!(reply.is_ok());
        assert!(!reply.is_bad());
        assert_eq!(reply.status(), Status::Ok);
        assert_eq!(reply.data(), Some(&0));
        assert!(reply.error().is_none());
        assert_eq!(reply.message(), MESSAGE_DEFAULT);
    }

    #[test]
    fn test_ok_without_payload_fails_the_reply() {
        let reply = Reply::<String>::new().ok(None);
        assert!(reply.is_bad());
        assert!(reply.error().is_some());
        assert_eq!(reply.message(), MESSAGE_INVALID_RESPONSE_DATA);
    }

    #[test]
    fn test_ok_clears_a_previous_error() {
        let reply = Reply::new().bad(Some("first attempt".into())).ok(Some(1u8));
        assert!(reply.is_ok());
        assert!(reply.error().is_none());
        assert_eq!(reply.data(), Some(&1));
    }

    #[test]
    fn test_bad_derives_message_from_the_error() {
        let reply = Reply::<()>::new().bad(Some("A processing error occurred.".into()));
        assert!(reply.is_bad());
        assert_eq!(reply.status(), Status::Bad);
        assert!(reply.error().is_some());
        assert_eq!(reply.message(), "A processing error occurred.");
    }

    #[test]
    fn test_bad_with_silent_error_keeps_a_readable_message() {
        let reply = Reply::<()>::new().bad(Some(Box::new(SilentError)));
        assert!(reply.is_bad());
        assert!(reply.error().is_some());
        assert_eq!(reply.message(), MESSAGE_DEFAULT);
    }

    #[test]
    fn test_bad_without_cause_still_fails_with_default_message() {
        let reply = Reply::<()>::new().bad(None);
        assert!(reply.is_bad());
        assert_eq!(reply.status(), Status::Bad);
        assert!(reply.error().is_none());
        assert_eq!(reply.message(), MESSAGE_DEFAULT);
    }

    #[test]
    fn test_bad_with_overwrites_message_verbatim() {
        let reply = Reply::<()>::new().bad_with(
            Some("root cause".into()),
            Some("Something really bad happened.".to_owned()),
        );
        assert!(reply.is_bad());
        assert_eq!(reply.message(), "Something really bad happened.");
    }

    // Documented asymmetry: the explicit-message overload applies no blank
    // fallback, unlike the cause-derived path.
    #[test]
    fn test_bad_with_keeps_blank_message_verbatim() {
        let reply = Reply::<()>::new().bad_with(Some("root cause".into()), Some(String::new()));
        assert!(reply.is_bad());
        assert_eq!(reply.message(), "");
    }

    #[test]
    fn test_bad_with_absent_message_reads_as_default() {
        let reply = Reply::<()>::new().bad_with(Some("root cause".into()), None);
        assert!(reply.is_bad());
        assert_eq!(reply.message(), MESSAGE_DEFAULT);
    }

    #[test]
    fn test_warnings_on_a_successful_reply() {
        let reply = Reply::new()
            .ok(Some(12345))
            .warning(Some("this call will be deprecated in 2.0".to_owned()));
        assert!(reply.is_ok());
        assert!(reply.is_warning());
        assert_eq!(reply.warnings().len(), 1);
    }

    #[test]
    fn test_warnings_on_a_failed_reply() {
        let reply = Reply::<i32>::new()
            .bad(Some("oops".into()))
            .warning(Some("retrying is pointless".to_owned()));
        assert!(reply.is_bad());
        assert!(reply.is_warning());
        assert!(!reply.warnings().is_empty());
    }

    #[test]
    fn test_warning_without_cause_appends_placeholder() {
        let reply = Reply::<i32>::new().bad(Some("oops".into())).warning(None);
        assert!(reply.is_warning());
        assert_eq!(reply.warnings().len(), 1);
        assert_eq!(reply.warnings()[0], MESSAGE_UNSPECIFIED_WARNING);
    }

    #[test]
    fn test_no_warnings_by_default() {
        let reply = Reply::new().ok(Some(12345u64));
        assert!(!reply.is_warning());
        assert!(reply.warnings().is_empty());
    }

    #[test]
    fn test_warnings_do_not_affect_status() {
        let reply = Reply::<u8>::new().warning(Some("early note".to_owned()));
        assert_eq!(reply.status(), Status::Unknown);
        assert!(reply.is_warning());
    }

    #[test]
    fn test_last_outcome_wins() {
        let reply = Reply::new().ok(Some(1u8)).bad(None);
        assert!(reply.is_bad());

        let reply = Reply::new().bad(None).ok(Some(2u8));
        assert!(reply.is_ok());
        assert_eq!(reply.data(), Some(&2));
    }

    #[test]
    fn test_into_data_transfers_the_payload() {
        let reply = Reply::new().ok(Some("payload".to_owned()));
        assert_eq!(reply.into_data().as_deref(), Some("payload"));
    }

    #[test]
    fn test_display_renders_a_log_line() {
        let reply = Reply::new().ok(Some(123));
        let rendered = format!("{}", reply);
        assert!(rendered.starts_with("Reply[stat: OK"));
        assert!(rendered.contains(MESSAGE_DEFAULT));
    }
}
