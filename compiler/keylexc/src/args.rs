//! Hand-rolled argument parsing for the `jml` and `key` commands.

use std::path::PathBuf;

use keylex_jml::{ArmPolicy, ExpansionOptions};

use crate::error::{CliError, CliResult};

/// Environment variable seeding the active keys when `--keys` is absent.
pub const KEYS_ENV: &str = "KEYLEX_KEYS";

/// Arguments of `keylex jml`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JmlArgs {
    pub files: Vec<PathBuf>,
    pub options: ExpansionOptions,
    pub verbose: bool,
}

/// Arguments of `keylex key`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyArgs {
    pub files: Vec<PathBuf>,
}

/// Split a key list on commas and whitespace.
pub fn split_keys(list: &str) -> Vec<String> {
    list.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|key| !key.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parse the arguments following `keylex jml`.
///
/// `env_keys` is the value of [`KEYS_ENV`], used only when no `--keys`
/// flag is given.
pub fn parse_jml_args(args: &[String], env_keys: Option<&str>) -> CliResult<JmlArgs> {
    let mut parsed = JmlArgs::default();
    let mut keys: Option<Vec<String>> = None;
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];
        if let Some(list) = arg.strip_prefix("--keys=") {
            keys = Some(split_keys(list));
        } else if arg == "--keys" || arg == "-k" {
            let Some(list) = args.get(i + 1) else {
                return Err(CliError::Usage(format!("{arg} needs a key list")));
            };
            keys = Some(split_keys(list));
            i += 1;
        } else if arg == "--arm-modifiers" {
            parsed.options.arm_policy = ArmPolicy::ClausesAndModifiers;
        } else if arg == "--verbose" || arg == "-v" {
            parsed.verbose = true;
        } else if arg.starts_with('-') {
            return Err(CliError::Usage(format!("unknown option '{arg}'")));
        } else {
            parsed.files.push(PathBuf::from(arg));
        }
        i += 1;
    }

    if parsed.files.is_empty() {
        return Err(CliError::Usage("missing file path".to_owned()));
    }

    parsed.options.active_keys = keys
        .or_else(|| env_keys.map(split_keys))
        .unwrap_or_default();
    Ok(parsed)
}

/// Parse the arguments following `keylex key`.
pub fn parse_key_args(args: &[String]) -> CliResult<KeyArgs> {
    let mut parsed = KeyArgs::default();
    for arg in args {
        if arg.starts_with('-') {
            return Err(CliError::Usage(format!("unknown option '{arg}'")));
        }
        parsed.files.push(PathBuf::from(arg));
    }
    if parsed.files.is_empty() {
        return Err(CliError::Usage("missing file path".to_owned()));
    }
    Ok(parsed)
}
