use crate::cli::args::CliArgs;

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if let Some(url) = args.api_url.as_deref() {
        reqwest::Url::parse(url).map_err(|e| format!("invalid --api-url '{url}': {e}"))?;
    }
    if let Some(status) = args.status.as_deref() {
        validate_status_filter(status).map_err(|e| format!("invalid --status: {e}"))?;
    }
    if let Some(timeout) = args.timeout {
        if timeout == 0 {
            return Err("invalid timeout, expected positive integer".to_string());
        }
    }
    Ok(())
}

pub fn validate_status_filter(value: &str) -> Result<(), String> {
    match value.to_ascii_lowercase().as_str() {
        "alive" | "dead" | "unknown" => Ok(()),
        other => Err(format!("'{other}', expected alive, dead or unknown")),
    }
}
