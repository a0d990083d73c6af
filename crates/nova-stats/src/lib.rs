// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! System status probes for the Nova voice assistant.
//!
//! Each probe returns one human-readable line for the introspection
//! prompt's status block. Probes never fail; missing OS utilities are
//! reported in the line itself.

pub mod external;
pub mod system;

use std::sync::Arc;

use nova_core::StatsProbe;

pub use external::{CpuTempProbe, GpuTempProbe, GpuUsageProbe};
pub use system::{CpuUsageProbe, DiskUsageProbe, MemoryUsageProbe, UptimeProbe};

/// Returns the full probe set, in status-block order.
pub fn default_probes() -> Vec<Arc<dyn StatsProbe>> {
    vec![
        Arc::new(CpuUsageProbe),
        Arc::new(MemoryUsageProbe),
        Arc::new(DiskUsageProbe),
        Arc::new(UptimeProbe),
        Arc::new(CpuTempProbe),
        Arc::new(GpuTempProbe),
        Arc::new(GpuUsageProbe),
    ]
}
