//! Validates four fixed person records and prints one line per record.
//!
//! Valid records are reported on stdout, invalid ones on stderr. The exit
//! status is always zero.

use fieldcheck::report::{demo_inputs, Outcome};
use fieldcheck::{person_validator, Clock, SystemClock};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    for (i, input) in demo_inputs(SystemClock.today()).into_iter().enumerate() {
        let outcome = Outcome::of(i + 1, &person_validator(input));
        if outcome.is_valid() {
            println!("{}", outcome);
        } else {
            eprintln!("{}", outcome);
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Logs go to stderr so stdout carries only the report.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
