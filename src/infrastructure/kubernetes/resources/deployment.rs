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

use crate::infrastructure::constants::*;
use crate::infrastructure::kubernetes::resources::naming::resource_name;
use crate::infrastructure::kubernetes::resources::traits::LabeledResourceBuilder;
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::collections::BTreeMap;

/// Wraps an assembled spec into the top-level Deployment.
pub struct DeploymentFinalizer {
    name: String,
    namespace: String,
}

impl LabeledResourceBuilder for DeploymentFinalizer {
    fn get_labels(&self) -> BTreeMap<String, String> {
        let mut labels = BTreeMap::new();
        labels.insert(LABEL_NAME.to_string(), self.name.clone());
        labels.insert(
            LABEL_COMPONENT.to_string(),
            COMPONENT_CONTROLLER.to_string(),
        );
        labels.insert(LABEL_CREATED_BY.to_string(), OPERATOR_NAME.to_string());
        labels
    }
}

impl DeploymentFinalizer {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }

    pub fn finalize(&self, spec: DeploymentSpec) -> Deployment {
        Deployment {
            metadata: ObjectMeta {
                name: Some(resource_name(&self.name)),
                namespace: Some(self.namespace.clone()),
                labels: Some(self.get_labels()),
                ..Default::default()
            },
            spec: Some(spec),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finalize_metadata() {
        let deployment = DeploymentFinalizer::new("edge", "ops").finalize(DeploymentSpec::default());

        assert_eq!(deployment.metadata.name.as_deref(), Some("edge-tunnel"));
        assert_eq!(deployment.metadata.namespace.as_deref(), Some("ops"));

        let labels = deployment.metadata.labels.unwrap();
        assert_eq!(labels.len(), 3);
        assert_eq!(labels["app.kubernetes.io/name"], "edge");
        assert_eq!(labels["app.kubernetes.io/component"], "controller");
        assert_eq!(
            labels["app.kubernetes.io/created-by"],
            "cloudflare-tunnel-operator"
        );
        assert!(deployment.status.is_none());
    }

    #[test]
    fn test_finalize_wraps_spec_unchanged() {
        let spec = DeploymentSpec {
            replicas: Some(3),
            revision_history_limit: Some(5),
            ..Default::default()
        };

        let deployment = DeploymentFinalizer::new("edge", "ops").finalize(spec.clone());

        assert_eq!(deployment.spec, Some(spec));
    }
}
