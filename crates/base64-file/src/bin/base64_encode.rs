//! `base64-encode` — base64-encode a file.
//!
//! Usage:
//!   base64-encode [--url] [--chunk-size=N] [--max-size=N] <input> [output]
//!
//! The encoded text goes to `output` if given, otherwise to stdout.
//! Set `RUST_LOG=debug` to see progress.

use rfc4648_base64_file::{encode_file, encode_file_to_file, EncodeFileOptions};
use std::io::{self, Write};

const USAGE: &str = "Usage: base64-encode [--url] [--chunk-size=N] [--max-size=N] <input> [output]";

fn main() {
    tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut options = EncodeFileOptions::default();
    let mut paths = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--url" {
            options = options.url_safe();
        } else if let Some(value) = arg.strip_prefix("--chunk-size=") {
            options = options.with_chunk_size(parse_number(value));
        } else if let Some(value) = arg.strip_prefix("--max-size=") {
            options = options.with_max_size(parse_number(value));
        } else if arg.starts_with("--") {
            fail(&format!("Unknown option {arg}\n{USAGE}"));
        } else {
            paths.push(arg);
        }
    }

    match paths.as_slice() {
        [input] => match encode_file(input, &options) {
            Ok(encoded) => {
                let mut stdout = io::stdout().lock();
                if let Err(e) = writeln!(stdout, "{encoded}") {
                    fail(&e.to_string());
                }
            }
            Err(e) => fail(&format!("{input}: {e}")),
        },
        [input, output] => {
            if let Err(e) = encode_file_to_file(input, output, &options) {
                fail(&format!("{input}: {e}"));
            }
        }
        _ => fail(USAGE),
    }
}

fn parse_number<T: std::str::FromStr>(value: &str) -> T {
    match value.parse() {
        Ok(n) => n,
        Err(_) => fail(&format!("Invalid number: {value}")),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}
