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

//! The opaque failure object carried by the failure variant of an outcome.
//!
//! A [`Fault`] stores "something that went wrong" without interpreting it.
//! It holds either a native error object (`dyn Error`) or a bare payload
//! (`dyn Any`) such as a captured panic payload or a caller-supplied signal
//! value. The payload form is the escape hatch for failure representations
//! that are not error objects; converting such a fault back into the error
//! channel wraps it in
//! [`UnsupportedPayloadError`](crate::error::UnsupportedPayloadError).
//!
//! Faults share their allocation: cloning a fault is cheap, and equality is
//! identity of the shared allocation, not a structural comparison. Two
//! clones of the same fault are equal; two faults built independently from
//! equal-looking errors are not.

use crate::error::{UnsupportedPayloadError, payload_str};
use std::any::Any;
use std::error::Error;
use std::sync::Arc;

/// An opaque, shareable failure object.
///
/// # Examples
///
/// ```rust
/// use tryout::fault::Fault;
///
/// let fault = Fault::msg("connection refused");
/// assert_eq!(format!("{}", fault), "connection refused");
///
/// // Clones share the allocation and compare equal.
/// let clone = fault.clone();
/// assert_eq!(fault, clone);
///
/// // Independently constructed faults never compare equal.
/// assert_ne!(Fault::msg("x"), Fault::msg("x"));
/// ```
#[derive(Clone)]
pub struct Fault {
    repr: Repr,
}

#[derive(Clone)]
enum Repr {
    /// A native error object.
    Error(Arc<dyn Error + Send + Sync + 'static>),
    /// A failure value that is not an error object.
    Payload(Arc<dyn Any + Send + Sync + 'static>),
}

/// An ad-hoc error carrying nothing but a message. Backs [`Fault::msg`].
#[derive(Debug)]
struct Message(String);

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for Message {}

/// Stands in for a panic payload that could not be retained.
#[derive(Debug)]
struct OpaquePanic;

impl Fault {
    /// Creates a fault from an error object.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::fault::Fault;
    ///
    /// let parse_error = "ten".parse::<i32>().unwrap_err();
    /// let fault = Fault::new(parse_error);
    /// assert!(fault.as_error().is_some());
    /// ```
    #[inline]
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            repr: Repr::Error(Arc::new(error)),
        }
    }

    /// Creates a fault from a plain message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::fault::Fault;
    ///
    /// let fault = Fault::msg("no lines");
    /// assert_eq!(format!("{}", fault), "no lines");
    /// ```
    #[inline]
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(Message(message.into()))
    }

    /// Creates a fault from a panic payload, as produced by
    /// `std::thread::JoinHandle::join` or `std::panic::catch_unwind`.
    ///
    /// `String` and `&'static str` payloads (the payloads produced by
    /// `panic!` and the assertion macros) are retained verbatim. Any other
    /// payload is replaced by an opaque marker; retaining it would make the
    /// fault unshareable across threads.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::fault::Fault;
    ///
    /// let payload = std::panic::catch_unwind(|| panic!("boom")).unwrap_err();
    /// let fault = Fault::from_panic(payload);
    /// assert_eq!(format!("{}", fault), "boom");
    /// assert!(fault.as_payload().is_some());
    /// ```
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let payload: Arc<dyn Any + Send + Sync + 'static> =
            match payload.downcast::<&'static str>() {
                Ok(text) => Arc::new(*text),
                Err(payload) => match payload.downcast::<String>() {
                    Ok(text) => Arc::new(*text),
                    Err(_) => Arc::new(OpaquePanic),
                },
            };
        Self {
            repr: Repr::Payload(payload),
        }
    }

    /// Creates a fault from an arbitrary signal value that is not an error
    /// object. The value is retained and can be recovered through
    /// [`as_payload`](Self::as_payload) or [`downcast_ref`](Self::downcast_ref).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::fault::Fault;
    ///
    /// let fault = Fault::from_payload(404_u16);
    /// assert_eq!(
    ///     fault.as_payload().unwrap().downcast_ref::<u16>(),
    ///     Some(&404)
    /// );
    /// ```
    #[inline]
    pub fn from_payload<P>(payload: P) -> Self
    where
        P: Any + Send + Sync + 'static,
    {
        Self {
            repr: Repr::Payload(Arc::new(payload)),
        }
    }

    /// Returns the contained error object, or `None` if this fault holds a
    /// bare payload.
    #[inline]
    pub fn as_error(&self) -> Option<&(dyn Error + 'static)> {
        match &self.repr {
            Repr::Error(error) => Some(error.as_ref()),
            Repr::Payload(_) => None,
        }
    }

    /// Returns the contained payload, or `None` if this fault holds an
    /// error object.
    #[inline]
    pub fn as_payload(&self) -> Option<&(dyn Any + Send + Sync)> {
        match &self.repr {
            Repr::Error(_) => None,
            Repr::Payload(payload) => Some(payload.as_ref()),
        }
    }

    /// Attempts to downcast the contained failure to a concrete error type,
    /// whichever representation it is stored in.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::num::ParseIntError;
    /// use tryout::fault::Fault;
    ///
    /// let fault = Fault::new("ten".parse::<i32>().unwrap_err());
    /// assert!(fault.downcast_ref::<ParseIntError>().is_some());
    /// ```
    #[inline]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        match &self.repr {
            Repr::Error(error) => error.as_ref().downcast_ref::<E>(),
            Repr::Payload(payload) => payload.downcast_ref::<E>(),
        }
    }

    /// Converts this fault into a native boxed error.
    ///
    /// An error-object fault converts directly, preserving the shared
    /// allocation. A payload fault is not an error object and is wrapped in
    /// an [`UnsupportedPayloadError`](crate::error::UnsupportedPayloadError)
    /// that keeps the original payload reachable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::fault::Fault;
    ///
    /// let error = Fault::msg("boom").into_error();
    /// assert_eq!(error.to_string(), "boom");
    /// ```
    pub fn into_error(self) -> Box<dyn Error + Send + Sync + 'static> {
        match self.repr {
            Repr::Error(error) => Box::new(error),
            Repr::Payload(payload) => Box::new(UnsupportedPayloadError::from_shared(payload)),
        }
    }

    /// Returns the address of the shared allocation, used for identity
    /// comparison and hashing.
    #[inline]
    fn addr(&self) -> *const () {
        match &self.repr {
            Repr::Error(error) => Arc::as_ptr(error) as *const (),
            Repr::Payload(payload) => Arc::as_ptr(payload) as *const (),
        }
    }
}

impl<E> From<E> for Fault
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl From<Fault> for Box<dyn Error + Send + Sync + 'static> {
    #[inline]
    fn from(fault: Fault) -> Self {
        fault.into_error()
    }
}

impl From<Fault> for Box<dyn Error + 'static> {
    #[inline]
    fn from(fault: Fault) -> Self {
        fault.into_error()
    }
}

impl PartialEq for Fault {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for Fault {}

impl std::hash::Hash for Fault {
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        (self.addr() as usize).hash(state);
    }
}

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.repr {
            Repr::Error(error) => std::fmt::Display::fmt(error, f),
            Repr::Payload(payload) => match payload_str(payload.as_ref()) {
                Some(text) => f.write_str(text),
                None => f.write_str("opaque failure payload"),
            },
        }
    }
}

impl std::fmt::Debug for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.repr {
            Repr::Error(error) => f.debug_tuple("Fault").field(error).finish(),
            Repr::Payload(payload) => f
                .debug_tuple("Fault")
                .field(&payload_str(payload.as_ref()).unwrap_or("<opaque payload>"))
                .finish(),
        }
    }
}
