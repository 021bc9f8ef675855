//! # fib-range
//!
//! A bounded range iterator and a naive recursive Fibonacci, combined in a
//! small driver loop.
//!
//! ## Modules
//!
//! 1. **range** - `BoundedRange`, a lazy `[start, stop)` sequence of `u32`
//! 2. **fib** - recursive Fibonacci with `fib(0) = fib(1) = 1`
//! 3. **driver** - maps Fibonacci over a range and writes one line per value
//!
//! ## Running
//!
//! ```bash
//! cargo run
//! RUST_LOG=debug cargo run
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Derive macro for the output error type
//! - `tracing` - Structured logging
//!
//! ```
//! use fib_range::{fibonacci, BoundedRange};
//!
//! let fibs: Vec<u32> = BoundedRange::new(0, 10).map(fibonacci).collect();
//! assert_eq!(fibs, vec![1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
//! ```

pub mod driver;
pub mod error;
pub mod fib;
pub mod range;

pub use driver::{fibonacci_sequence, run, DEFAULT_START, DEFAULT_STOP};
pub use error::DriverError;
pub use fib::fibonacci;
pub use range::BoundedRange;
