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

//! Error types synthesized at the boundaries of the outcome algebra.
//!
//! Two situations force this crate to manufacture an error of its own:
//!
//! * [`PredicateError`]: `Outcome::filter` rejected a success value. The
//!   rejected value is recorded (via its `Debug` rendering) so the failure
//!   is diagnosable downstream.
//! * [`UnsupportedPayloadError`]: a [`Fault`](crate::fault::Fault) holding
//!   a bare payload (a captured panic payload or a caller-supplied signal
//!   value) had to be converted into a `Box<dyn Error>`. Payloads are not
//!   error objects, so the conversion wraps them in this type and keeps the
//!   original payload reachable.

use std::any::Any;
use std::sync::Arc;

/// Returns the textual content of a payload, if it is one of the string
/// types produced by `panic!` and friends.
pub(crate) fn payload_str(payload: &(dyn Any + Send + Sync)) -> Option<&str> {
    payload
        .downcast_ref::<&'static str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
}

/// The error recorded when `Outcome::filter` rejects a success value.
///
/// # Examples
///
/// ```rust
/// use tryout::error::PredicateError;
/// use tryout::outcome::Outcome;
///
/// let outcome = Outcome::success(-5).filter(|v| *v > 0);
/// let fault = outcome.fault().unwrap();
///
/// let error = fault.downcast_ref::<PredicateError>().unwrap();
/// assert_eq!(error.rejected(), "-5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateError {
    rejected: String,
}

impl PredicateError {
    /// Creates a new `PredicateError` recording a rendering of the rejected
    /// value.
    #[inline]
    pub fn new(rejected: impl Into<String>) -> Self {
        Self {
            rejected: rejected.into(),
        }
    }

    /// Returns the rendering of the rejected value.
    #[inline]
    pub fn rejected(&self) -> &str {
        &self.rejected
    }
}

impl std::fmt::Display for PredicateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "predicate does not match {}", self.rejected)
    }
}

impl std::error::Error for PredicateError {}

/// The error produced when a fault holding a bare payload must be converted
/// into a native error object.
///
/// A payload fault is not an error object, so `Fault::into_error` cannot
/// hand it out directly. It is wrapped in this type instead; the original
/// payload stays reachable through [`payload`](Self::payload).
///
/// # Examples
///
/// ```rust
/// use tryout::error::UnsupportedPayloadError;
/// use tryout::fault::Fault;
///
/// let fault = Fault::from_payload(42_u32);
/// let error = fault.into_error();
///
/// let wrapped = error.downcast_ref::<UnsupportedPayloadError>().unwrap();
/// assert_eq!(wrapped.payload().downcast_ref::<u32>(), Some(&42));
/// ```
#[derive(Clone)]
pub struct UnsupportedPayloadError {
    payload: Arc<dyn Any + Send + Sync + 'static>,
}

impl UnsupportedPayloadError {
    /// Creates a new `UnsupportedPayloadError` wrapping the given payload.
    #[inline]
    pub fn new(payload: Box<dyn Any + Send + Sync + 'static>) -> Self {
        Self {
            payload: Arc::from(payload),
        }
    }

    #[inline]
    pub(crate) fn from_shared(payload: Arc<dyn Any + Send + Sync + 'static>) -> Self {
        Self { payload }
    }

    /// Returns the wrapped payload.
    #[inline]
    pub fn payload(&self) -> &(dyn Any + Send + Sync) {
        self.payload.as_ref()
    }
}

impl std::fmt::Display for UnsupportedPayloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match payload_str(self.payload.as_ref()) {
            Some(text) => write!(f, "failure payload is not an error object: {}", text),
            None => write!(f, "failure payload is not an error object"),
        }
    }
}

impl std::fmt::Debug for UnsupportedPayloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnsupportedPayloadError")
            .field(
                "payload",
                &payload_str(self.payload.as_ref()).unwrap_or("<opaque>"),
            )
            .finish()
    }
}

impl std::error::Error for UnsupportedPayloadError {}
