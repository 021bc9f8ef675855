use std::io::Write;

use tracing::{debug, info};

use crate::error::DriverError;
use crate::fib::fibonacci;
use crate::range::BoundedRange;

pub const DEFAULT_START: u32 = 0;
pub const DEFAULT_STOP: u32 = 10;

/// Lazily maps `fibonacci` over every value the range produces.
pub fn fibonacci_sequence(range: BoundedRange) -> impl Iterator<Item = u32> {
    range.map(fibonacci)
}

/// Writes `fibonacci(v)` for each `v` in `range`, one decimal per line, and
/// returns how many lines were written.
pub fn run<W: Write>(mut range: BoundedRange, mut out: W) -> Result<usize, DriverError> {
    let mut written = 0;

    for value in range.by_ref() {
        let result = fibonacci(value);
        debug!(value, result, "produced");
        writeln!(out, "{result}")?;
        written += 1;
    }

    out.flush()?;
    info!(written, start = range.start(), stop = range.stop(), "range exhausted");
    Ok(written)
}
