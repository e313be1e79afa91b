//! `montcrypt`: encode a message onto Curve25519, encrypt it to a fresh
//! recipient key, decrypt it and check the result.
//!
//! Exit status: 0 success, 1 I/O or other failure, 2 usage error,
//! 3 entropy unavailable, 4 encoding exhausted or block too long,
//! 5 invalid point, 6 decryption mismatch.

mod args;
mod commands;
mod error;
mod logger;

use args::{parse_and_validate_args, Action, Config};
use error::CliError;
use rand::rngs::OsRng;

fn run(config: &Config) -> Result<(), CliError> {
    let mut rng = OsRng;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &config.action {
        Action::Keygen => commands::keygen(&mut rng, &mut out),
        Action::Roundtrip { message } => {
            let message = match message {
                Some(text) => text.as_bytes().to_vec(),
                None => commands::read_message(std::io::stdin().lock())?,
            };
            commands::roundtrip(config, &message, &mut rng, &mut out).map(|_| ())
        }
    }
}

fn main() {
    let config = parse_and_validate_args();
    logger::init(config.verbosity);

    if let Err(e) = run(&config) {
        eprintln!("error: {e}");
        std::process::exit(e.exit_code());
    }
}
