use std::error::Error;
use std::io::{self, BufWriter};
use std::process::ExitCode;

use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use fib_range::{run, BoundedRange, DEFAULT_START, DEFAULT_STOP};

// Arguments are ignored and the exit status is always success: a failed
// stdout write is only logged.
fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let range = BoundedRange::new(DEFAULT_START, DEFAULT_STOP);

    match run(range, BufWriter::new(stdout.lock())) {
        Ok(_) => {}
        Err(err) if err.is_broken_pipe() => debug!("stdout closed early, stopping"),
        Err(err) => {
            let cause = err.source().map(ToString::to_string).unwrap_or_default();
            warn!(%err, cause = %cause, "output incomplete");
        }
    }

    ExitCode::SUCCESS
}
