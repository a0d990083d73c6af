// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! System-stats probe trait.

use async_trait::async_trait;

/// A single system-status probe.
///
/// Probes never fail: absence of the underlying OS utility is reported as a
/// descriptive text line, not an error.
#[async_trait]
pub trait StatsProbe: Send + Sync {
    /// Short identifier for the probe (used in logs).
    fn name(&self) -> &str;

    /// Reads the probe and returns one human-readable status line.
    async fn read(&self) -> String;
}
