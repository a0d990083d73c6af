// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in clock capabilities: current time and date.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Local;

use nova_core::{CapabilityDescriptor, NovaError};

use crate::capability::Capability;

/// Reports the current wall-clock time.
pub struct CurrentTime {
    descriptor: CapabilityDescriptor,
}

impl CurrentTime {
    pub fn new() -> Self {
        Self {
            descriptor: CapabilityDescriptor::new("get_time", &["time"]),
        }
    }
}

impl Default for CurrentTime {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Capability for CurrentTime {
    fn descriptor(&self) -> &CapabilityDescriptor {
        &self.descriptor
    }

    async fn invoke(&self, _args: &HashMap<String, String>) -> Result<String, NovaError> {
        // The declared `time` parameter is accepted for protocol
        // compatibility; only "now" is meaningful and anything else is
        // answered with the current time as well.
        Ok(format!(
            "The current time is {}.",
            Local::now().format("%H:%M:%S")
        ))
    }
}

/// Reports today's date.
pub struct CurrentDate {
    descriptor: CapabilityDescriptor,
}

impl CurrentDate {
    pub fn new() -> Self {
        Self {
            descriptor: CapabilityDescriptor::new("get_date", &[]),
        }
    }
}

impl Default for CurrentDate {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Capability for CurrentDate {
    fn descriptor(&self) -> &CapabilityDescriptor {
        &self.descriptor
    }

    async fn invoke(&self, _args: &HashMap<String, String>) -> Result<String, NovaError> {
        Ok(format!(
            "Today is {}.",
            Local::now().format("%A, %B %d, %Y")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn time_result_has_expected_prefix() {
        let result = CurrentTime::new().invoke(&HashMap::new()).await.unwrap();
        assert!(result.starts_with("The current time is "));
        assert!(result.ends_with('.'));
    }

    #[tokio::test]
    async fn date_result_has_expected_prefix() {
        let result = CurrentDate::new().invoke(&HashMap::new()).await.unwrap();
        assert!(result.starts_with("Today is "));
    }

    #[test]
    fn descriptors_match_catalog_names() {
        assert_eq!(CurrentTime::new().descriptor().render(), "get_time(time)");
        assert_eq!(CurrentDate::new().descriptor().render(), "get_date()");
    }
}
