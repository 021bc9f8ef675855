use std::io;

use thiserror::Error;

/// Everything that can stop the driver before the whole sequence is written.
///
/// The range and Fibonacci themselves never fail; this is output I/O only.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("failed to write output")]
    Write(#[from] io::Error),
}

impl DriverError {
    /// A reader that went away (`head`, a closed pipe) rather than a real fault.
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            DriverError::Write(err) => err.kind() == io::ErrorKind::BrokenPipe,
        }
    }
}
