//! Verify command implementation.

use crate::output::{format_json, format_table_row, print_table_header, Verdict};
use scopehook_core::{verify, SecretKey};
use tracing::warn;

pub fn run(
    input: Option<String>,
    api_key: String,
    json_output: bool,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let fields = super::read_notification(input)?;
    let key = SecretKey::new(api_key);
    if key.is_empty() {
        warn!("verifying with an empty API key");
    }

    let verdict = Verdict::new(verify(&key, &fields), &fields);

    if json_output {
        println!("{}", format_json(&verdict));
    } else {
        print_table_header();
        println!("{}", format_table_row(&verdict));
    }

    if strict && !verdict.result.is_authentic() {
        std::process::exit(1);
    }

    Ok(())
}
