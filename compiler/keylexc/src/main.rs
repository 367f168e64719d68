//! keylex CLI
//!
//! Token dumps for Java/JML and KeY files.

use keylexc::{
    dump_jml_files, dump_key_files, init_tracing, parse_jml_args, parse_key_args, report,
    CliError, KEYS_ENV,
};

const JML_USAGE: &str = "keylex jml <file.java>... [--keys a,b] [--arm-modifiers] [-v]";

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let ok = match command.as_str() {
        "jml" => {
            let env_keys = std::env::var(KEYS_ENV).ok();
            let parsed = match parse_jml_args(&args[2..], env_keys.as_deref()) {
                Ok(parsed) => parsed,
                Err(err) => usage_error(&err, JML_USAGE),
            };
            if parsed.verbose {
                eprintln!("active keys: [{}]", parsed.options.active_keys.join(", "));
                eprintln!("arm policy: {:?}", parsed.options.arm_policy);
            }
            tracing::debug!(files = parsed.files.len(), "highlighting java files");
            report(dump_jml_files(&parsed.files, &parsed.options))
        }
        "key" => {
            let parsed = match parse_key_args(&args[2..]) {
                Ok(parsed) => parsed,
                Err(err) => usage_error(&err, "keylex key <file.key>..."),
            };
            tracing::debug!(files = parsed.files.len(), "highlighting key files");
            report(dump_key_files(&parsed.files))
        }
        "help" | "--help" | "-h" => {
            print_usage();
            true
        }
        "version" | "--version" | "-V" => {
            println!("keylex {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            false
        }
    };

    if !ok {
        std::process::exit(1);
    }
}

fn usage_error(err: &CliError, usage: &str) -> ! {
    eprintln!("error: {err}");
    eprintln!("Usage: {usage}");
    std::process::exit(1);
}

fn print_usage() {
    println!("keylex - token dumps for Java/JML and KeY files");
    println!();
    println!("Usage: keylex <command> [options]");
    println!();
    println!("Commands:");
    println!("  jml <file.java>...   Highlight Java files, expanding JML annotations");
    println!("  key <file.key>...    Highlight KeY files");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("JML options:");
    println!("  --keys a,b, -k a,b   Active annotation keys (default: ${KEYS_ENV})");
    println!("  --arm-modifiers      JML modifiers also wait for a top-level ';'");
    println!("  -v, --verbose        Print the active keys before highlighting");
    println!();
    println!("Set RUST_LOG=keylex_jml=debug for engine logs.");
}
