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
use k8s_openapi::api::apps::v1::DeploymentSpec;
use k8s_openapi::api::core::v1::{
    ConfigMapVolumeSource, Container, PodSpec, SecretVolumeSource, Volume,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::collections::BTreeMap;
use tracing::debug;

/// Places the tunnel container into a caller supplied Deployment spec.
///
/// Missing pod metadata, label maps, the annotation map, selector labels and
/// the pod spec are created on the fly, so any template is accepted.
pub struct WorkloadAssembler {
    name: String,
}

impl LabeledResourceBuilder for WorkloadAssembler {
    fn get_labels(&self) -> BTreeMap<String, String> {
        let mut labels = BTreeMap::new();
        labels.insert(LABEL_NAME.to_string(), self.name.clone());
        labels
    }
}

impl WorkloadAssembler {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn assemble(&self, template: DeploymentSpec, container: Container) -> DeploymentSpec {
        let mut spec = template;

        let pod_spec = spec.template.spec.get_or_insert_with(PodSpec::default);
        pod_spec.containers.push(container);
        pod_spec
            .volumes
            .get_or_insert_with(Vec::new)
            .extend(self.build_volumes());

        let metadata = spec
            .template
            .metadata
            .get_or_insert_with(ObjectMeta::default);
        metadata
            .annotations
            .get_or_insert_with(BTreeMap::new)
            .insert(
                ANNOTATION_DEFAULT_CONTAINER.to_string(),
                CONTAINER_NAME.to_string(),
            );
        metadata
            .labels
            .get_or_insert_with(BTreeMap::new)
            .extend(self.get_labels());

        spec.selector
            .match_labels
            .get_or_insert_with(BTreeMap::new)
            .extend(self.get_selector_labels());

        debug!(name = %self.name, "Assembled tunnel workload");

        spec
    }

    pub fn build_volumes(&self) -> Vec<Volume> {
        let backing_name = resource_name(&self.name);

        vec![
            Volume {
                name: VOLUME_NAME_CONFIG.to_string(),
                config_map: Some(ConfigMapVolumeSource {
                    name: backing_name.clone(),
                    ..Default::default()
                }),
                ..Default::default()
            },
            Volume {
                name: VOLUME_NAME_CREDENTIALS.to_string(),
                secret: Some(SecretVolumeSource {
                    secret_name: Some(backing_name),
                    ..Default::default()
                }),
                ..Default::default()
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::api::core::v1::{EmptyDirVolumeSource, PodTemplateSpec};
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;

    fn labels(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn sidecar() -> Container {
        Container {
            name: "sidecar".to_string(),
            image: Some("busybox:latest".to_string()),
            ..Default::default()
        }
    }

    fn scratch_volume() -> Volume {
        Volume {
            name: "scratch".to_string(),
            empty_dir: Some(EmptyDirVolumeSource::default()),
            ..Default::default()
        }
    }

    #[test]
    fn test_assemble_into_bare_template() {
        let tunnel = Container {
            name: CONTAINER_NAME.to_string(),
            ..Default::default()
        };

        let spec = WorkloadAssembler::new("edge").assemble(DeploymentSpec::default(), tunnel);

        let metadata = spec.template.metadata.unwrap();
        assert_eq!(
            metadata.labels.unwrap(),
            labels(&[("app.kubernetes.io/name", "edge")])
        );
        assert_eq!(
            metadata.annotations.unwrap(),
            labels(&[("kubectl.kubernetes.io/default-container", "cloudfalred")])
        );
        assert_eq!(
            spec.selector.match_labels.unwrap(),
            labels(&[("app.kubernetes.io/name", "edge")])
        );

        let pod_spec = spec.template.spec.unwrap();
        assert_eq!(pod_spec.containers.len(), 1);
        assert_eq!(pod_spec.containers[0].name, "cloudfalred");
        assert_eq!(pod_spec.volumes.unwrap().len(), 2);
    }

    #[test]
    fn test_assemble_preserves_caller_entries() {
        let template = DeploymentSpec {
            replicas: Some(2),
            selector: LabelSelector {
                match_labels: Some(labels(&[
                    ("tier", "edge"),
                    ("app.kubernetes.io/name", "stale"),
                ])),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(labels(&[("tier", "edge")])),
                    annotations: Some(labels(&[("team", "net")])),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![sidecar()],
                    volumes: Some(vec![scratch_volume()]),
                    ..Default::default()
                }),
            },
            ..Default::default()
        };

        let spec = WorkloadAssembler::new("edge").assemble(template, Container::default());

        assert_eq!(spec.replicas, Some(2));
        assert_eq!(
            spec.selector.match_labels.unwrap(),
            labels(&[("tier", "edge"), ("app.kubernetes.io/name", "edge")])
        );

        let metadata = spec.template.metadata.unwrap();
        assert_eq!(
            metadata.labels.unwrap(),
            labels(&[("tier", "edge"), ("app.kubernetes.io/name", "edge")])
        );
        assert_eq!(metadata.annotations.unwrap().len(), 2);

        let pod_spec = spec.template.spec.unwrap();
        assert_eq!(pod_spec.containers.len(), 2);
        assert_eq!(pod_spec.containers[0], sidecar());

        let volumes = pod_spec.volumes.unwrap();
        assert_eq!(volumes.len(), 3);
        assert_eq!(volumes[0], scratch_volume());
        assert_eq!(volumes[1].name, "cloudflared-config");
        assert_eq!(volumes[2].name, "cloudflared-creds");
    }

    #[test]
    fn test_volumes_reference_resource_name() {
        let volumes = WorkloadAssembler::new("edge").build_volumes();

        assert_eq!(
            volumes[0].config_map.as_ref().map(|c| c.name.as_str()),
            Some("edge-tunnel")
        );
        assert!(volumes[0].secret.is_none());
        assert_eq!(
            volumes[1]
                .secret
                .as_ref()
                .and_then(|s| s.secret_name.as_deref()),
            Some("edge-tunnel")
        );
        assert!(volumes[1].config_map.is_none());
    }

    #[test]
    fn test_default_container_annotation_replaces_stale_value() {
        let template = DeploymentSpec {
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    annotations: Some(labels(&[(
                        "kubectl.kubernetes.io/default-container",
                        "cloudflared",
                    )])),
                    ..Default::default()
                }),
                ..Default::default()
            },
            ..Default::default()
        };
        let tunnel = Container {
            name: CONTAINER_NAME.to_string(),
            ..Default::default()
        };

        let spec = WorkloadAssembler::new("edge").assemble(template, tunnel);

        let annotations = spec.template.metadata.unwrap().annotations.unwrap();
        let pod_spec = spec.template.spec.unwrap();
        assert_eq!(
            annotations["kubectl.kubernetes.io/default-container"],
            pod_spec.containers[0].name
        );
        assert_eq!(annotations["kubectl.kubernetes.io/default-container"], "cloudfalred");
    }
}
