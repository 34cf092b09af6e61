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
use crate::shared::error::{Result, TunnelError};
use k8s_openapi::api::core::v1::{PodSpec, ResourceRequirements};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

const KNOWN_KEYS: &[&str] = &[
    "tunnel.name",
    "tunnel.namespace",
    "tunnel.id",
    "tunnel.image",
    "tunnel.image-pull-policy",
    "tunnel.replicas",
    "tunnel.labels",
    "tunnel.annotations",
    "tunnel.node-selector",
    "tunnel.service-account",
    "tunnel.cpu",
    "tunnel.memory",
];

/// Parse dynamic configuration properties from -D key=value format
pub fn parse_dynamic_configs(configs: &[String]) -> Result<HashMap<String, String>> {
    let mut map = HashMap::new();

    for config in configs {
        let (key, value) = config.split_once('=').ok_or_else(|| {
            TunnelError::ConfigError(format!(
                "Invalid config format: '{}'. Expected 'key=value'",
                config
            ))
        })?;

        let key = key.trim();
        if key.is_empty() {
            return Err(TunnelError::ConfigError(format!(
                "Empty key in config: '{}'",
                config
            )));
        }

        map.insert(key.to_string(), value.trim().to_string());
    }

    Ok(map)
}

pub fn apply_to_request(configs: &HashMap<String, String>, request: &mut TunnelWorkloadRequest) {
    for key in configs.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn!(%key, "Ignoring unknown dynamic property");
        }
    }

    if let Some(name) = configs.get("tunnel.name") {
        request.name = name.clone();
    }

    if let Some(namespace) = configs.get("tunnel.namespace") {
        request.namespace = namespace.clone();
    }

    if let Some(tunnel_id) = configs.get("tunnel.id") {
        request.tunnel_id = tunnel_id.clone();
    }

    if let Some(image) = configs.get("tunnel.image") {
        request.container.image = Some(image.clone());
    }

    if let Some(policy) = configs.get("tunnel.image-pull-policy") {
        request.container.image_pull_policy = Some(policy.clone());
    }

    if let Some(replicas_str) = configs.get("tunnel.replicas") {
        if let Ok(replicas) = replicas_str.parse::<i32>() {
            request.workload_template.replicas = Some(replicas);
        }
    }

    if let Some(labels_str) = configs.get("tunnel.labels") {
        let metadata = request
            .workload_template
            .template
            .metadata
            .get_or_insert_with(ObjectMeta::default);
        metadata
            .labels
            .get_or_insert_with(BTreeMap::new)
            .extend(parse_key_value_list(labels_str));
    }

    if let Some(annotations_str) = configs.get("tunnel.annotations") {
        let metadata = request
            .workload_template
            .template
            .metadata
            .get_or_insert_with(ObjectMeta::default);
        metadata
            .annotations
            .get_or_insert_with(BTreeMap::new)
            .extend(parse_key_value_list(annotations_str));
    }

    if let Some(selector_str) = configs.get("tunnel.node-selector") {
        let pod_spec = request
            .workload_template
            .template
            .spec
            .get_or_insert_with(PodSpec::default);
        pod_spec
            .node_selector
            .get_or_insert_with(BTreeMap::new)
            .extend(parse_key_value_list(selector_str));
    }

    if let Some(service_account) = configs.get("tunnel.service-account") {
        request
            .workload_template
            .template
            .spec
            .get_or_insert_with(PodSpec::default)
            .service_account_name = Some(service_account.clone());
    }

    if let Some(cpu_str) = configs.get("tunnel.cpu") {
        if let Some(cpu_float) = cpu_str
            .parse::<f64>()
            .ok()
            .filter(|cpu| cpu.is_finite() && *cpu > 0.0)
        {
            let cpu_milli = (cpu_float * 1000.0) as i64;
            set_resource(
                request.container.resources.get_or_insert_with(Default::default),
                "cpu",
                Quantity(format!("{}m", cpu_milli)),
            );
        }
    }

    if let Some(mem_str) = configs.get("tunnel.memory") {
        set_resource(
            request.container.resources.get_or_insert_with(Default::default),
            "memory",
            Quantity(mem_str.clone()),
        );
    }
}

fn set_resource(resources: &mut ResourceRequirements, name: &str, quantity: Quantity) {
    resources
        .requests
        .get_or_insert_with(BTreeMap::new)
        .insert(name.to_string(), quantity.clone());
    resources
        .limits
        .get_or_insert_with(BTreeMap::new)
        .insert(name.to_string(), quantity);
}

/// Parses `k1=v1,k2=v2`; malformed pairs are skipped.
fn parse_key_value_list(value: &str) -> BTreeMap<String, String> {
    value
        .split(',')
        .filter_map(|pair| pair.split_once('='))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .filter(|(k, _)| !k.is_empty())
        .collect()
}
