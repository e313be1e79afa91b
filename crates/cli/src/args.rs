use clap::{error::ErrorKind, value_parser, Arg, ArgAction, ArgMatches, Command};
use montcrypt_pke::CodecConfig;
use std::ffi::OsString;

/// Which hybrid construction the round trip uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Xor,
    Additive,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Xor => "xor",
            Variant::Additive => "additive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Encrypt and decrypt a message; `None` reads it from stdin
    Roundtrip { message: Option<String> },
    Keygen,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub action: Action,
    pub verbosity: u8,
    pub codec: CodecConfig,
    pub variant: Variant,
}

fn build_cli() -> Command {
    Command::new("montcrypt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Curve25519 message encoding and hybrid encryption round trip")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log output on stderr (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new("multiplier")
                .long("multiplier")
                .value_name("N")
                .help("Scale factor applied to the message integer before the point search")
                .value_parser(value_parser!(u32))
                .default_value("100")
                .global(true),
        )
        .arg(
            Arg::new("window")
                .long("window")
                .value_name("N")
                .help("Number of x candidates tried per block (at most the multiplier)")
                .value_parser(value_parser!(u32))
                .default_value("100")
                .global(true),
        )
        .arg(
            Arg::new("variant")
                .long("variant")
                .value_name("VARIANT")
                .help("Hybrid cipher construction")
                .value_parser(["xor", "additive"])
                .default_value("xor")
                .global(true),
        )
        .subcommand(
            Command::new("roundtrip")
                .about("Generate a recipient key, encrypt MESSAGE, decrypt it and compare")
                .arg(
                    Arg::new("message")
                        .value_name("MESSAGE")
                        .help("Message to encrypt; read from stdin when omitted"),
                ),
        )
        .subcommand(Command::new("keygen").about("Print a fresh key pair as hex"))
}

fn config_from_matches(cmd: &mut Command, matches: &ArgMatches) -> Result<Config, clap::Error> {
    // global flags propagate down, so the subcommand matches see all of them
    let (action, matches) = match matches.subcommand() {
        Some(("roundtrip", sub)) => (
            Action::Roundtrip {
                message: sub.get_one::<String>("message").cloned(),
            },
            sub,
        ),
        Some(("keygen", sub)) => (Action::Keygen, sub),
        _ => {
            return Err(cmd.error(ErrorKind::MissingSubcommand, "a subcommand is required"));
        }
    };

    let multiplier = matches.get_one::<u32>("multiplier").copied().unwrap_or(100);
    let window = matches.get_one::<u32>("window").copied().unwrap_or(100);
    let codec = CodecConfig::new(multiplier, window)
        .map_err(|e| cmd.error(ErrorKind::ValueValidation, e))?;

    let variant = match matches.get_one::<String>("variant").map(String::as_str) {
        Some("additive") => Variant::Additive,
        _ => Variant::Xor,
    };

    Ok(Config {
        action,
        verbosity: matches.get_count("verbose"),
        codec,
        variant,
    })
}

/// Parse an explicit argument list
pub fn parse_from<I, T>(args: I) -> Result<Config, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut cmd = build_cli();
    let matches = cmd.try_get_matches_from_mut(args)?;
    config_from_matches(&mut cmd, &matches)
}

/// Parse the process arguments, exiting with status 2 on a usage error
pub fn parse_and_validate_args() -> Config {
    parse_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = parse_from(["montcrypt", "roundtrip", "HI"]).unwrap();
        assert_eq!(
            config.action,
            Action::Roundtrip {
                message: Some("HI".to_string())
            }
        );
        assert_eq!(config.codec, CodecConfig::default());
        assert_eq!(config.variant, Variant::Xor);
        assert_eq!(config.verbosity, 0);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let config = parse_from([
            "montcrypt",
            "roundtrip",
            "--variant",
            "additive",
            "--multiplier",
            "1000",
            "--window",
            "500",
            "-vv",
        ])
        .unwrap();
        assert_eq!(config.action, Action::Roundtrip { message: None });
        assert_eq!(config.variant, Variant::Additive);
        assert_eq!(config.codec, CodecConfig::new(1000, 500).unwrap());
        assert_eq!(config.verbosity, 2);
    }

    #[test]
    fn test_keygen() {
        let config = parse_from(["montcrypt", "-v", "keygen"]).unwrap();
        assert_eq!(config.action, Action::Keygen);
        assert_eq!(config.verbosity, 1);
    }

    #[test]
    fn test_usage_errors_exit_with_two() {
        for args in [
            vec!["montcrypt", "roundtrip", "--window", "0"],
            vec!["montcrypt", "roundtrip", "--multiplier", "10", "--window", "11"],
            vec!["montcrypt", "roundtrip", "--variant", "rot13"],
            vec!["montcrypt", "decrypt"],
        ] {
            let err = parse_from(args).unwrap_err();
            assert_eq!(err.exit_code(), 2);
        }
    }
}
