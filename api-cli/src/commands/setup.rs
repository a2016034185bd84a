// api-cli/src/commands/setup.rs
use crate::output::{print_error, print_success, ExitCode};
use anyhow::Result;
use api_client::{ApiClient, Config};
use dialoguer::{Input, Password};

/// Run the interactive setup command
pub async fn run_setup() -> Result<ExitCode> {
    println!("REST CLI Setup");
    println!();

    let current = Config::load().unwrap_or_default();

    let base_url: String = Input::new()
        .with_prompt("API base URL")
        .default(current.base_url.clone())
        .interact_text()?;

    let token = Password::new()
        .with_prompt("Bearer token (leave empty for none)")
        .allow_empty_password(true)
        .interact()?;

    let config = Config {
        base_url,
        token: if token.is_empty() { None } else { Some(token) },
        ..current
    };

    // Validate the URL the same way the client will
    if let Err(e) = ApiClient::from_config(&config) {
        print_error(&e.to_string());
        return Ok(ExitCode::PermanentError);
    }

    if let Err(e) = config.save() {
        print_error(&format!("Couldn't write config file: {}", e));
        return Ok(ExitCode::PermanentError);
    }

    println!();
    print_success("Configuration saved!");
    println!();
    println!("Try: rest query /api/items");

    Ok(ExitCode::Success)
}
