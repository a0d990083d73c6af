// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Probes backed by external OS utilities: `sensors` and `nvidia-smi`.
//!
//! Absence of a utility (no lm-sensors, no NVIDIA driver) is reported as a
//! descriptive text line, never an error.

use async_trait::async_trait;
use tracing::debug;

use nova_core::StatsProbe;

/// Runs an external utility and returns its trimmed stdout.
async fn run_utility(program: &str, args: &[&str]) -> Result<String, std::io::Error> {
    let output = tokio::process::Command::new(program)
        .args(args)
        .output()
        .await?;
    if !output.status.success() {
        return Err(std::io::Error::other(format!(
            "{program} exited with {}",
            output.status
        )));
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// CPU package temperature parsed from `sensors` output.
pub struct CpuTempProbe;

impl CpuTempProbe {
    /// Extracts the package temperature token from `sensors` output.
    ///
    /// Looks for the `Package id 0` (Intel) or `Tdie` (AMD) line and takes
    /// the first whitespace-delimited token after the colon.
    fn parse(output: &str) -> Option<String> {
        output
            .lines()
            .find(|line| line.contains("Package id 0") || line.contains("Tdie"))
            .and_then(|line| line.split(':').nth(1))
            .and_then(|rest| rest.trim().split_whitespace().next())
            .map(|token| token.to_string())
    }
}

#[async_trait]
impl StatsProbe for CpuTempProbe {
    fn name(&self) -> &str {
        "cpu_temp"
    }

    async fn read(&self) -> String {
        match run_utility("sensors", &[]).await {
            Ok(output) => match Self::parse(&output) {
                Some(temp) => format!("CPU temperature is {temp}."),
                None => "Could not find CPU temperature.".to_string(),
            },
            Err(e) => {
                debug!(error = %e, "sensors unavailable");
                format!("Error getting CPU temperature: {e}.")
            }
        }
    }
}

/// GPU temperature via `nvidia-smi`.
pub struct GpuTempProbe;

#[async_trait]
impl StatsProbe for GpuTempProbe {
    fn name(&self) -> &str {
        "gpu_temp"
    }

    async fn read(&self) -> String {
        match run_utility(
            "nvidia-smi",
            &["--query-gpu=temperature.gpu", "--format=csv,noheader,nounits"],
        )
        .await
        {
            Ok(output) => format!("GPU temperature is {output}\u{b0}C."),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "nvidia-smi not found. Are NVIDIA drivers installed?".to_string()
            }
            Err(e) => format!("Error getting GPU temperature: {e}."),
        }
    }
}

/// GPU utilization via `nvidia-smi`.
pub struct GpuUsageProbe;

#[async_trait]
impl StatsProbe for GpuUsageProbe {
    fn name(&self) -> &str {
        "gpu_usage"
    }

    async fn read(&self) -> String {
        match run_utility(
            "nvidia-smi",
            &["--query-gpu=utilization.gpu", "--format=csv,noheader,nounits"],
        )
        .await
        {
            Ok(output) => format!("GPU usage is at {output}%."),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "nvidia-smi not found. Are NVIDIA drivers installed?".to_string()
            }
            Err(e) => format!("Error getting GPU usage: {e}."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_finds_intel_package_line() {
        let output = "\
coretemp-isa-0000
Adapter: ISA adapter
Package id 0:  +45.0\u{b0}C  (high = +80.0\u{b0}C, crit = +100.0\u{b0}C)
Core 0:        +42.0\u{b0}C";
        assert_eq!(CpuTempProbe::parse(output).as_deref(), Some("+45.0\u{b0}C"));
    }

    #[test]
    fn parse_finds_amd_tdie_line() {
        let output = "k10temp-pci-00c3\nAdapter: PCI adapter\nTdie:  +51.2\u{b0}C";
        assert_eq!(CpuTempProbe::parse(output).as_deref(), Some("+51.2\u{b0}C"));
    }

    #[test]
    fn parse_returns_none_without_package_line() {
        let output = "acpitz-acpi-0\nAdapter: ACPI interface\ntemp1: +27.8\u{b0}C";
        assert!(CpuTempProbe::parse(output).is_none());
    }

    #[tokio::test]
    async fn gpu_probe_reports_missing_driver_as_text() {
        // Whatever the host has installed, the probe must produce a line.
        let line = GpuTempProbe.read().await;
        assert!(!line.is_empty());
    }
}
