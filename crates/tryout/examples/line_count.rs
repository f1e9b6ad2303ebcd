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

//! Reads a text file, counts its lines, and chains a few combinators over
//! the outcome. Run with:
//!
//! ```sh
//! cargo run --example line_count -- path/to/file.txt
//! ```

use tryout::fault::Fault;
use tryout::outcome::Outcome;

fn main() {
    let path = std::env::args().nth(1).unwrap_or_else(|| "example.txt".into());

    let outcome = Outcome::of(|| std::fs::read_to_string(&path))
        .map(|text| text.lines().count() as i64)
        .flat_map(|lines| {
            if lines == 0 {
                Outcome::failure(Fault::msg("file is empty"))
            } else {
                Outcome::success(3 / lines)
            }
        })
        .filter(|ratio| *ratio == 1);

    // Simple extraction with a default.
    println!("ratio or default: {}", outcome.clone().unwrap_or(0));

    // Exhaustive pattern matching over the closed union.
    match &outcome {
        Outcome::Success(ratio) => println!("success: {}", ratio),
        Outcome::Failure(fault) => println!("failure: {}", fault),
    }

    // Elimination into a single value.
    let summary = outcome.fold(
        |ratio| format!("measured ratio {}", ratio),
        |fault| format!("could not measure: {}", fault),
    );
    println!("{}", summary);
}
