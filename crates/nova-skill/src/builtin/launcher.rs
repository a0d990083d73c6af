// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in application launcher capability.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::warn;

use nova_core::{CapabilityDescriptor, NovaError};

use crate::capability::Capability;

/// Launches the Firefox browser as a detached process.
///
/// A launch failure is reported as the capability's text result rather than
/// an error, so the model's reply still reaches the user as speech.
pub struct OpenFirefox {
    descriptor: CapabilityDescriptor,
    program: String,
}

impl OpenFirefox {
    pub fn new() -> Self {
        Self::with_program("firefox")
    }

    /// Overrides the launched program (used by tests).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            descriptor: CapabilityDescriptor::new("open_firefox", &[]),
            program: program.into(),
        }
    }
}

impl Default for OpenFirefox {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Capability for OpenFirefox {
    fn descriptor(&self) -> &CapabilityDescriptor {
        &self.descriptor
    }

    async fn invoke(&self, _args: &HashMap<String, String>) -> Result<String, NovaError> {
        match tokio::process::Command::new(&self.program).spawn() {
            Ok(_child) => Ok("Opening Firefox... launching you into the webiverse!".to_string()),
            Err(e) => {
                warn!(program = %self.program, error = %e, "browser launch failed");
                Ok(format!("Hmm, I tried but couldn't open Firefox: {e}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_program_reports_failure_as_text() {
        let launcher = OpenFirefox::with_program("definitely-not-a-real-binary");
        let result = launcher.invoke(&HashMap::new()).await.unwrap();
        assert!(result.contains("couldn't open Firefox"));
    }

    #[tokio::test]
    async fn present_program_reports_launch() {
        // `true` exists on any POSIX system and exits immediately.
        let launcher = OpenFirefox::with_program("true");
        let result = launcher.invoke(&HashMap::new()).await.unwrap();
        assert!(result.contains("Opening Firefox"));
    }
}
