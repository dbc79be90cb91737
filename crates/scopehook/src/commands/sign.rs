//! Sign command implementation.

use scopehook_core::{sign, SecretKey};

pub fn run(
    input: Option<String>,
    api_key: String,
    attach: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let fields = super::read_notification(input)?;
    let key = SecretKey::new(api_key);

    if attach {
        println!("{}", serde_json::to_string_pretty(&fields.signed(&key))?);
    } else {
        println!("{}", sign(&key, &fields));
    }
    Ok(())
}
