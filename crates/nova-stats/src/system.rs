// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Probes backed by the `sysinfo` crate: CPU, memory, disk, and uptime.

use async_trait::async_trait;
use sysinfo::{Disks, System};

use nova_core::StatsProbe;

const MIB: u64 = 1024 * 1024;

/// Current global CPU utilization.
pub struct CpuUsageProbe;

#[async_trait]
impl StatsProbe for CpuUsageProbe {
    fn name(&self) -> &str {
        "cpu_usage"
    }

    async fn read(&self) -> String {
        let mut sys = System::new();
        sys.refresh_cpu_usage();
        // Two samples are needed for a meaningful utilization figure.
        tokio::time::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL).await;
        sys.refresh_cpu_usage();
        format!("CPU usage is at {:.1}%.", sys.global_cpu_usage())
    }
}

/// Current memory utilization with used/total MB.
pub struct MemoryUsageProbe;

#[async_trait]
impl StatsProbe for MemoryUsageProbe {
    fn name(&self) -> &str {
        "memory_usage"
    }

    async fn read(&self) -> String {
        let mut sys = System::new();
        sys.refresh_memory();
        let used = sys.used_memory() / MIB;
        let total = sys.total_memory() / MIB;
        let percent = if sys.total_memory() == 0 {
            0.0
        } else {
            sys.used_memory() as f64 / sys.total_memory() as f64 * 100.0
        };
        format!("Memory usage: {percent:.1}% ({used}MB used of {total}MB).")
    }
}

/// Disk utilization of the root partition.
pub struct DiskUsageProbe;

#[async_trait]
impl StatsProbe for DiskUsageProbe {
    fn name(&self) -> &str {
        "disk_usage"
    }

    async fn read(&self) -> String {
        let disks = Disks::new_with_refreshed_list();
        let root = disks
            .list()
            .iter()
            .find(|d| d.mount_point() == std::path::Path::new("/"));
        match root {
            Some(disk) if disk.total_space() > 0 => {
                let used = disk.total_space() - disk.available_space();
                let percent = used as f64 / disk.total_space() as f64 * 100.0;
                format!("Disk usage: {percent:.1}% used on root partition.")
            }
            _ => "Could not read disk usage for the root partition.".to_string(),
        }
    }
}

/// System uptime in hours and minutes.
pub struct UptimeProbe;

#[async_trait]
impl StatsProbe for UptimeProbe {
    fn name(&self) -> &str {
        "uptime"
    }

    async fn read(&self) -> String {
        let uptime = System::uptime();
        let hours = uptime / 3600;
        let minutes = (uptime % 3600) / 60;
        format!("System uptime: {hours} hours and {minutes} minutes.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn cpu_probe_reports_percentage() {
        let line = CpuUsageProbe.read().await;
        assert!(line.starts_with("CPU usage is at "));
        assert!(line.ends_with("%."));
    }

    #[tokio::test]
    async fn memory_probe_reports_used_of_total() {
        let line = MemoryUsageProbe.read().await;
        assert!(line.starts_with("Memory usage: "));
        assert!(line.contains("MB used of"));
    }

    #[tokio::test]
    async fn uptime_probe_reports_hours_and_minutes() {
        let line = UptimeProbe.read().await;
        assert!(line.starts_with("System uptime: "));
        assert!(line.contains("hours and"));
    }

    #[tokio::test]
    async fn disk_probe_never_panics() {
        // The root partition may not be visible in sandboxed environments;
        // either way the probe must return a line.
        let line = DiskUsageProbe.read().await;
        assert!(line.starts_with("Disk usage") || line.starts_with("Could not read"));
    }
}
