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

use crate::infrastructure::constants::CONTAINER_NAME;
use crate::shared::error::{Result, TunnelError};
use k8s_openapi::api::apps::v1::DeploymentSpec;
use k8s_openapi::api::core::v1::Container;
use serde_yaml::{Mapping, Value};
use std::path::PathBuf;

/// Reads container overrides from a loosely written YAML value.
///
/// `name` is a required field of the typed Container but the tunnel container
/// name is fixed anyway, so an absent name is filled in before parsing.
pub fn container_from_value(value: Option<Value>) -> Result<Container> {
    let value = with_default_keys(
        value,
        &[("name", Value::String(CONTAINER_NAME.to_string()))],
        "container",
    )?;

    serde_yaml::from_value(value)
        .map_err(|e| TunnelError::ConfigError(format!("Failed to parse container overrides: {}", e)))
}

/// Reads a Deployment spec template, tolerating absent `selector`, `template`
/// and pod `containers` keys.
pub fn workload_template_from_value(value: Option<Value>) -> Result<DeploymentSpec> {
    let mut value = with_default_keys(
        value,
        &[
            ("selector", Value::Mapping(Mapping::new())),
            ("template", Value::Mapping(Mapping::new())),
        ],
        "workloadTemplate",
    )?;

    if let Some(pod_spec) = value.get_mut("template").and_then(|t| t.get_mut("spec")) {
        if !pod_spec.is_null() {
            *pod_spec = with_default_keys(
                Some(pod_spec.clone()),
                &[("containers", Value::Sequence(Vec::new()))],
                "workloadTemplate.template.spec",
            )?;
        }
    }

    serde_yaml::from_value(value)
        .map_err(|e| TunnelError::ConfigError(format!("Failed to parse workload template: {}", e)))
}

fn with_default_keys(value: Option<Value>, defaults: &[(&str, Value)], what: &str) -> Result<Value> {
    let mut mapping = match value {
        None | Some(Value::Null) => Mapping::new(),
        Some(Value::Mapping(mapping)) => mapping,
        Some(_) => {
            return Err(TunnelError::ConfigError(format!(
                "{} must be a mapping",
                what
            )))
        }
    };

    for (key, default) in defaults {
        if !mapping.contains_key(*key) {
            mapping.insert(Value::from(*key), default.clone());
        }
    }

    Ok(Value::Mapping(mapping))
}

pub fn resolve_file_path(path: &str) -> Result<PathBuf> {
    let path = PathBuf::from(path);

    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(std::env::current_dir()
            .map_err(|e| TunnelError::ConfigError(format!("Cannot get current directory: {}", e)))?
            .join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_without_name() {
        let value: Value = serde_yaml::from_str("image: cloudflare/cloudflared:2024.1.0").unwrap();
        let container = container_from_value(Some(value)).unwrap();

        assert_eq!(container.name, "cloudfalred");
        assert_eq!(
            container.image.as_deref(),
            Some("cloudflare/cloudflared:2024.1.0")
        );
    }

    #[test]
    fn test_missing_container_is_empty() {
        let container = container_from_value(None).unwrap();
        assert!(container.image.is_none());
        assert!(container.ports.is_none());
    }

    #[test]
    fn test_workload_template_without_selector() {
        let value: Value = serde_yaml::from_str(
            r#"
replicas: 2
template:
  metadata:
    labels:
      tier: edge
"#,
        )
        .unwrap();

        let spec = workload_template_from_value(Some(value)).unwrap();

        assert_eq!(spec.replicas, Some(2));
        assert!(spec.selector.match_labels.is_none());
        let labels = spec.template.metadata.unwrap().labels.unwrap();
        assert_eq!(labels["tier"], "edge");
    }

    #[test]
    fn test_pod_spec_without_containers() {
        let value: Value = serde_yaml::from_str(
            r#"
template:
  spec:
    serviceAccountName: tunnel
"#,
        )
        .unwrap();

        let spec = workload_template_from_value(Some(value)).unwrap();
        let pod_spec = spec.template.spec.unwrap();

        assert!(pod_spec.containers.is_empty());
        assert_eq!(pod_spec.service_account_name.as_deref(), Some("tunnel"));
    }

    #[test]
    fn test_non_mapping_rejected() {
        let value = Value::String("nope".to_string());
        let err = workload_template_from_value(Some(value)).unwrap_err();
        assert!(matches!(err, TunnelError::ConfigError(_)));
    }

    #[test]
    fn test_resolve_absolute_path() {
        let path = resolve_file_path("/etc/tunnel.yaml").unwrap();
        assert_eq!(path, PathBuf::from("/etc/tunnel.yaml"));
    }
}
