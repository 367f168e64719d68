//! Library side of the `keylex` command-line tool.
//!
//! The binary only dispatches on the command word; argument parsing,
//! file handling and token dumps live here so they can be tested.

pub mod args;
pub mod dump;
pub mod error;

use std::sync::Once;

pub use args::{parse_jml_args, parse_key_args, JmlArgs, KeyArgs, KEYS_ENV};
pub use dump::{dump_jml_files, dump_key_files, format_tokens, read_source};
pub use error::{CliError, CliResult};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber when `RUST_LOG` is set.
///
/// Safe to call more than once; only the first call has an effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}

/// Print dumps to stdout and errors to stderr, in order.
///
/// Returns `true` if every file succeeded.
pub fn report(results: Vec<CliResult<String>>) -> bool {
    let mut ok = true;
    for result in results {
        match result {
            Ok(dump) => print!("{dump}"),
            Err(err) => {
                eprintln!("error: {err}");
                ok = false;
            }
        }
    }
    ok
}
