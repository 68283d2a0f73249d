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

//! # Reason Check
//!
//! Fail-fast precondition checks with enumerable root causes.
//!
//! This crate provides small, stateless validation functions meant to be
//! invoked inline at the top of a routine. Every failing check produces a
//! [`check::CheckError`] whose message encodes a symbolic root cause in a
//! uniform, machine-friendly format (`condition.not.satisfied`,
//! `missing.data`, ...).
//!
//! ## Modules
//!
//! - `cause`: The [`cause::CauseTag`] capability for symbolic root causes,
//!   the built-in [`cause::Cause`] constants, and the string encoding rule.
//! - `check`: The check functions (`not_null*`, `is_true*`) and the
//!   [`check::CheckError`] they raise.
//!
//! ## Motivation
//!
//! Ad-hoc precondition messages drift apart across a codebase and are hard to
//! grep, alert on, or translate. Routing every failure through a closed (but
//! extensible) set of symbolic causes keeps failure categories enumerable
//! while still allowing free-form text where a caller wants it.
//!
//! Refer to each module for detailed APIs and examples.

pub mod cause;
pub mod check;
