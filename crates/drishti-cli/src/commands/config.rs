use anyhow::{Context, Result, anyhow};
use drishti_core::config::SecretConfig;
use drishti_core::secret::SecretService;
use drishti_infrastructure::{ConfigService, DrishtiPaths, SecretServiceImpl};
use std::path::Path;

pub fn path(base: Option<&Path>) -> Result<()> {
    let paths = DrishtiPaths::new(base)?;
    println!("config dir:  {}", paths.config_dir().display());
    println!("config:      {}", paths.config_file().display());
    println!("secrets:     {}", paths.secret_file().display());
    println!("transcripts: {}", paths.transcripts_dir().display());
    Ok(())
}

/// Masks all but the last four characters of a key.
fn redact(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{tail}")
}

fn describe_secret(secrets: &SecretConfig) -> serde_json::Value {
    match (&secrets.gemini, secrets.usable_gemini()) {
        (_, Some(gemini)) => serde_json::json!({
            "gemini": {
                "api_key": redact(&gemini.api_key),
                "model_name": gemini.model_name,
            }
        }),
        (Some(_), None) => serde_json::json!({ "gemini": "placeholder key (local-only mode)" }),
        (None, None) => serde_json::json!({ "gemini": null }),
    }
}

pub async fn show(base: Option<&Path>) -> Result<()> {
    let paths = DrishtiPaths::new(base)?;
    let config = ConfigService::new(&paths)
        .load()
        .context("Failed to load config.toml")?;
    let secrets = SecretServiceImpl::new(&paths)
        .load_secrets()
        .await
        .map_err(|e| anyhow!(e))?;

    println!("# {}", paths.config_file().display());
    println!("{}", toml::to_string_pretty(&config)?);
    println!("# secrets");
    println!("{}", serde_json::to_string_pretty(&describe_secret(&secrets))?);
    Ok(())
}
