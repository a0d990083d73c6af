// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `nova doctor` command implementation.
//!
//! Runs diagnostic checks against the Nova environment: speech models,
//! memory store, and model backend connectivity. These are the same
//! preconditions `nova serve` enforces, surfaced interactively.

use std::io::IsTerminal;
use std::time::{Duration, Instant};

use nova_config::model::NovaConfig;
use nova_core::NovaError;

/// Status of a diagnostic check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed successfully.
    Pass,
    /// Check passed with a warning.
    Warn,
    /// Check failed.
    Fail,
}

/// Result of a single diagnostic check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check.
    pub name: String,
    /// Check status.
    pub status: CheckStatus,
    /// Human-readable message.
    pub message: String,
    /// Duration the check took.
    pub duration: Duration,
}

/// Run the `nova doctor` command.
///
/// With `--plain`, disables colored output.
pub async fn run_doctor(config: &NovaConfig, plain: bool) -> Result<(), NovaError> {
    let use_color = !plain && std::io::stdout().is_terminal();

    let results = vec![
        check_speech_models(config),
        check_memory_store(config),
        check_backend(config).await,
    ];

    println!();
    println!("  nova doctor");
    println!("  {}", "-".repeat(50));

    let mut fail_count = 0;
    let mut warn_count = 0;

    for result in &results {
        match result.status {
            CheckStatus::Warn => warn_count += 1,
            CheckStatus::Fail => fail_count += 1,
            CheckStatus::Pass => {}
        }
        println!("{}", render_check(result, use_color));
    }

    println!();
    if fail_count > 0 {
        println!("  {fail_count} check(s) failed, {warn_count} warning(s)");
    } else if warn_count > 0 {
        println!("  all checks passed with {warn_count} warning(s)");
    } else {
        println!("  all checks passed");
    }
    println!();

    Ok(())
}

/// Render one check result line.
fn render_check(result: &CheckResult, use_color: bool) -> String {
    let duration_ms = result.duration.as_millis();
    if use_color {
        use colored::Colorize;
        let symbol = match result.status {
            CheckStatus::Pass => "\u{2713}".green().to_string(),
            CheckStatus::Warn => "!".yellow().to_string(),
            CheckStatus::Fail => "\u{2717}".red().to_string(),
        };
        format!(
            "    {symbol} {:<20} {} ({duration_ms}ms)",
            result.name, result.message
        )
    } else {
        let tag = match result.status {
            CheckStatus::Pass => "[OK]  ",
            CheckStatus::Warn => "[WARN]",
            CheckStatus::Fail => "[FAIL]",
        };
        format!(
            "    {tag} {:<20} {} ({duration_ms}ms)",
            result.name, result.message
        )
    }
}

/// Check that the Vosk and Piper models are in place.
fn check_speech_models(config: &NovaConfig) -> CheckResult {
    let start = Instant::now();
    match nova_speech::check_speech_models(&config.speech) {
        Ok(()) => CheckResult {
            name: "Speech models".to_string(),
            status: CheckStatus::Pass,
            message: "present".to_string(),
            duration: start.elapsed(),
        },
        Err(e) => CheckResult {
            name: "Speech models".to_string(),
            status: CheckStatus::Fail,
            message: e.to_string(),
            duration: start.elapsed(),
        },
    }
}

/// Check the memory store file.
fn check_memory_store(config: &NovaConfig) -> CheckResult {
    let start = Instant::now();
    let path = std::path::Path::new(&config.memory.path);
    if !path.exists() {
        return CheckResult {
            name: "Memory store".to_string(),
            status: CheckStatus::Warn,
            message: format!(
                "not found: {} (will be created on first run)",
                config.memory.path
            ),
            duration: start.elapsed(),
        };
    }

    let store = nova_memory::MemoryStore::open(path);
    CheckResult {
        name: "Memory store".to_string(),
        status: CheckStatus::Pass,
        message: format!("{} fact(s) stored", store.len()),
        duration: start.elapsed(),
    }
}

/// Check that the model backend answers HTTP at all.
async fn check_backend(config: &NovaConfig) -> CheckResult {
    let start = Instant::now();
    let base = backend_base_url(&config.model.endpoint);

    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            return CheckResult {
                name: "Model backend".to_string(),
                status: CheckStatus::Fail,
                message: format!("failed to create HTTP client: {e}"),
                duration: start.elapsed(),
            };
        }
    };

    match client.get(&base).send().await {
        Ok(resp) => CheckResult {
            name: "Model backend".to_string(),
            status: CheckStatus::Pass,
            message: format!("reachable ({})", resp.status()),
            duration: start.elapsed(),
        },
        Err(e) => CheckResult {
            name: "Model backend".to_string(),
            status: CheckStatus::Fail,
            message: format!("unreachable: {e}"),
            duration: start.elapsed(),
        },
    }
}

/// Derives the backend's base URL from the generate endpoint.
fn backend_base_url(endpoint: &str) -> String {
    endpoint
        .strip_suffix("/api/generate")
        .unwrap_or(endpoint)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_strips_generate_path() {
        assert_eq!(
            backend_base_url("http://localhost:11434/api/generate"),
            "http://localhost:11434"
        );
    }

    #[test]
    fn base_url_passes_through_custom_endpoint() {
        assert_eq!(
            backend_base_url("http://gpu-box:8080/generate"),
            "http://gpu-box:8080/generate"
        );
    }

    #[test]
    fn render_check_plain_tags_by_status() {
        let result = CheckResult {
            name: "Speech models".to_string(),
            status: CheckStatus::Fail,
            message: "missing".to_string(),
            duration: Duration::from_millis(3),
        };
        let line = render_check(&result, false);
        assert!(line.contains("[FAIL]"));
        assert!(line.contains("Speech models"));
    }

    #[test]
    fn missing_memory_file_is_a_warning() {
        let mut config = NovaConfig::default();
        config.memory.path = "/nonexistent/nova_memory.json".to_string();
        let result = check_memory_store(&config);
        assert_eq!(result.status, CheckStatus::Warn);
    }
}
