// Copyright 2025 Beez Innovation Labs.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::infrastructure::constants::MAX_LABEL_LENGTH;
use crate::shared::error::{Result, TunnelError};
use k8s_openapi::api::apps::v1::DeploymentSpec;
use k8s_openapi::api::core::v1::Container;

/// Everything needed to synthesize one tunnel Deployment.
///
/// The request is consumed by the synthesizer; clone it to reuse it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TunnelWorkloadRequest {
    pub name: String,
    pub namespace: String,
    pub tunnel_id: String,
    pub container: Container,
    pub workload_template: DeploymentSpec,
}

impl TunnelWorkloadRequest {
    pub fn new(
        name: impl Into<String>,
        namespace: impl Into<String>,
        tunnel_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            tunnel_id: tunnel_id.into(),
            ..Default::default()
        }
    }

    pub fn with_container(mut self, container: Container) -> Self {
        self.container = container;
        self
    }

    pub fn with_workload_template(mut self, workload_template: DeploymentSpec) -> Self {
        self.workload_template = workload_template;
        self
    }

    /// Structural checks only. The name ends up as a label value, so it has
    /// to be one.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(TunnelError::precondition("name", "must not be empty"));
        }

        if self.namespace.is_empty() {
            return Err(TunnelError::precondition("namespace", "must not be empty"));
        }

        if self.tunnel_id.is_empty() {
            return Err(TunnelError::precondition("tunnel_id", "must not be empty"));
        }

        if !is_valid_label_value(&self.name) {
            return Err(TunnelError::ValidationError(format!(
                "Invalid tunnel name: '{}' is not a valid label value (max {} chars)",
                self.name, MAX_LABEL_LENGTH
            )));
        }

        Ok(())
    }
}

pub(crate) fn is_valid_label_value(value: &str) -> bool {
    if value.len() > MAX_LABEL_LENGTH {
        return false;
    }

    if value.is_empty() {
        return true;
    }

    if !value.chars().next().unwrap_or(' ').is_ascii_alphanumeric() {
        return false;
    }
    if !value.chars().last().unwrap_or(' ').is_ascii_alphanumeric() {
        return false;
    }

    value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
}
