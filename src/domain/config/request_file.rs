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

use crate::domain::tunnel::TunnelWorkloadRequest;
use crate::infrastructure::kubernetes::resources::template_utils::{
    container_from_value, resolve_file_path, workload_template_from_value,
};
use crate::shared::error::{Result, TunnelError};
use serde::Deserialize;
use serde_yaml::Value;

/// On-disk form of a tunnel workload request.
///
/// Identity fields are optional here so the CLI can supply them instead.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RequestFile {
    pub name: Option<String>,
    pub namespace: Option<String>,
    pub tunnel_id: Option<String>,
    pub container: Option<Value>,
    pub workload_template: Option<Value>,
}

impl RequestFile {
    pub fn from_path(file_path: &str) -> Result<Self> {
        let path = resolve_file_path(file_path)?;

        if !path.exists() {
            return Err(TunnelError::ConfigError(format!(
                "Request file does not exist: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            TunnelError::ConfigError(format!(
                "Failed to read request file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content).map_err(|e| {
            TunnelError::ConfigError(format!(
                "Failed to parse request file {}: {}",
                path.display(),
                e
            ))
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Builds a request; missing identity fields stay empty and fail validation later.
    pub fn into_request(self) -> Result<TunnelWorkloadRequest> {
        Ok(TunnelWorkloadRequest {
            name: self.name.unwrap_or_default(),
            namespace: self.namespace.unwrap_or_default(),
            tunnel_id: self.tunnel_id.unwrap_or_default(),
            container: container_from_value(self.container)?,
            workload_template: workload_template_from_value(self.workload_template)?,
        })
    }
}
