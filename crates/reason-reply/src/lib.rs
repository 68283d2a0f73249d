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

//! # Reason Reply
//!
//! A generic reply object tracking the outcome of side-effecting operations.
//!
//! A [`reply::Reply`] wraps the answer to a request whose semantics are not
//! modeled here — creating a file, writing to a database, and so on. Instead
//! of unwinding the call stack, the operation records success or failure as
//! data: a typed payload, a tri-state [`status::Status`], an optional
//! underlying error, a human-readable message, and accumulated warnings.
//!
//! ## Modules
//!
//! - `status`: The tri-state [`status::Status`] (`Ok`/`Bad`/`Unknown`) with
//!   parsing and serde support.
//! - `reply`: The [`reply::Reply`] container, its message constants, and the
//!   invariants its mutators enforce.
//!
//! ## Design Philosophy
//!
//! 1. **Failures are data**: a reply never raises; it captures failures so
//!    callers can report partial results without aborting.
//! 2. **Readable by guarantee**: any failed reply exposes a non-empty
//!    message, even when the caller supplied none.
//! 3. **Single owner**: replies chain by value (`new().ok(..).warning(..)`),
//!    so concurrent mutation is unrepresentable without an explicit hand-off.

pub mod reply;
pub mod status;
