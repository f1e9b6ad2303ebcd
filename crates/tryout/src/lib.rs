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

//! # Tryout
//!
//! **A two-variant outcome algebra for composing fallible operations
//! without unwinding.**
//!
//! This crate provides [`Outcome<T>`](outcome::Outcome), a closed sum type
//! that is either a `Success` holding a produced value or a `Failure`
//! holding an opaque, captured [`Fault`](fault::Fault). Callers wrap a
//! fallible operation once through the factory and then compose
//! transformations through a fluent chain, with failures short-circuiting
//! untouched until a terminal extraction leaves the outcome world.
//!
//! ## Modules
//!
//! - `outcome`: The `Outcome<T>` algebra: factory, predicates, conditional
//!   side effects, success- and failure-channel combinators (`map`,
//!   `flat_map`, `filter`, `fold`, `map_failure`, `or`, `recover`,
//!   `recover_with`), and terminal extraction (`unwrap_or`,
//!   `unwrap_or_else`, `into_result`, `ok`).
//! - `fault`: The opaque `Fault` failure object, a shared, type-erased
//!   error or payload with identity-based equality.
//! - `error`: Errors synthesized at the algebra's boundaries
//!   (`PredicateError`, `UnsupportedPayloadError`).
//!
//! ## Design Philosophy
//!
//! 1. **Closed union**: `Outcome` is a public two-variant enum. Matching is
//!    exhaustive; a third variant cannot appear silently.
//! 2. **Classification by channel**: the factory captures `Err` values
//!    (recoverable faults) and lets panics (fatal faults) unwind untouched.
//!    Nothing in this crate calls `catch_unwind`.
//! 3. **Value-based sharing**: instances are immutable after construction,
//!    compare by value, and may be shared freely across threads. They are
//!    not synchronization primitives.
//! 4. **No interpretation**: a fault is stored opaquely. Only the boundary
//!    that converts a fault back into a native error classifies it, and a
//!    non-error payload is wrapped rather than dropped.
//!
//! ## Usage
//!
//! ```rust
//! use tryout::fault::Fault;
//! use tryout::outcome::Outcome;
//!
//! let outcome = Outcome::of(|| "10".parse::<i32>())
//!     .map(|n| n * 3)
//!     .filter(|n| *n > 0)
//!     .flat_map(|n| {
//!         if n % 2 == 0 {
//!             Outcome::success(n)
//!         } else {
//!             Outcome::failure(Fault::msg("odd"))
//!         }
//!     });
//!
//! assert_eq!(outcome.unwrap_or(0), 30);
//! ```

pub mod error;
pub mod fault;
pub mod outcome;
