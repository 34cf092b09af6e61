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
use crate::infrastructure::kubernetes::resources::naming::{
    credentials_file_name, credentials_mount_path,
};
use k8s_openapi::api::core::v1::{Container, ContainerPort, VolumeMount};
use tracing::debug;

/// Turns a partially specified container into the tunnel agent container.
///
/// Image, command and args are filled only when unset or empty. The container
/// name is always replaced. The metrics port and both mounts are appended on
/// every call, so running the builder over its own output adds them again.
pub struct TunnelContainerBuilder {
    tunnel_id: String,
    default_image: String,
}

impl TunnelContainerBuilder {
    pub fn new(tunnel_id: impl Into<String>) -> Self {
        Self {
            tunnel_id: tunnel_id.into(),
            default_image: DEFAULT_IMAGE.to_string(),
        }
    }

    pub fn with_default_image(mut self, image: impl Into<String>) -> Self {
        self.default_image = image.into();
        self
    }

    pub fn build(&self, overrides: Container) -> Container {
        let mut container = overrides;

        if container.image.as_deref().map_or(true, str::is_empty) {
            container.image = Some(self.default_image.clone());
        }

        if container.command.as_ref().map_or(true, Vec::is_empty) {
            container.command = Some(vec![DEFAULT_COMMAND.to_string()]);
        }

        if container.args.as_ref().map_or(true, Vec::is_empty) {
            container.args = Some(DEFAULT_ARGS.iter().map(|arg| arg.to_string()).collect());
        }

        container.name = CONTAINER_NAME.to_string();

        // Not fill-if-empty: callers that pre-declare ports get a duplicate.
        container
            .ports
            .get_or_insert_with(Vec::new)
            .push(Self::metrics_port());

        container
            .volume_mounts
            .get_or_insert_with(Vec::new)
            .extend(self.build_volume_mounts());

        debug!(
            tunnel_id = %self.tunnel_id,
            image = container.image.as_deref().unwrap_or_default(),
            "Defaulted tunnel container"
        );

        container
    }

    pub fn metrics_port() -> ContainerPort {
        ContainerPort {
            name: Some(PORT_NAME_METRICS.to_string()),
            container_port: METRICS_PORT,
            protocol: Some(PROTOCOL_TCP.to_string()),
            ..Default::default()
        }
    }

    pub fn build_volume_mounts(&self) -> Vec<VolumeMount> {
        vec![
            VolumeMount {
                name: VOLUME_NAME_CONFIG.to_string(),
                mount_path: CONFIG_MOUNT_PATH.to_string(),
                sub_path: Some(CONFIG_FILE_NAME.to_string()),
                ..Default::default()
            },
            VolumeMount {
                name: VOLUME_NAME_CREDENTIALS.to_string(),
                mount_path: credentials_mount_path(&self.tunnel_id),
                sub_path: Some(credentials_file_name(&self.tunnel_id)),
                ..Default::default()
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mount(name: &str, path: &str) -> VolumeMount {
        VolumeMount {
            name: name.to_string(),
            mount_path: path.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_applied_to_empty_container() {
        let container = TunnelContainerBuilder::new("t-1").build(Container::default());

        assert_eq!(container.name, "cloudfalred");
        assert_eq!(
            container.image.as_deref(),
            Some("cloudflare/cloudflared:latest")
        );
        assert_eq!(container.command, Some(vec!["cloudflared".to_string()]));
        assert_eq!(
            container.args.unwrap(),
            vec![
                "tunnel",
                "--metrics",
                "localhost:9090",
                "--no-autoupdate",
                "--config",
                "/config/config.yaml",
                "run"
            ]
        );

        let ports = container.ports.unwrap();
        assert_eq!(ports.len(), 1);
        assert_eq!(ports[0].container_port, 9090);
        assert_eq!(ports[0].name.as_deref(), Some("metrics"));
        assert_eq!(ports[0].protocol.as_deref(), Some("TCP"));
    }

    #[test]
    fn test_caller_values_preserved() {
        let overrides = Container {
            name: "custom".to_string(),
            image: Some("cloudflare/cloudflared:2024.2.1".to_string()),
            command: Some(vec!["/usr/local/bin/cloudflared".to_string()]),
            args: Some(vec!["tunnel".to_string(), "run".to_string()]),
            ..Default::default()
        };

        let container = TunnelContainerBuilder::new("t-1").build(overrides);

        assert_eq!(
            container.image.as_deref(),
            Some("cloudflare/cloudflared:2024.2.1")
        );
        assert_eq!(
            container.command,
            Some(vec!["/usr/local/bin/cloudflared".to_string()])
        );
        assert_eq!(
            container.args,
            Some(vec!["tunnel".to_string(), "run".to_string()])
        );
        // The name is never caller-configurable
        assert_eq!(container.name, "cloudfalred");
    }

    #[test]
    fn test_empty_values_receive_defaults() {
        let overrides = Container {
            image: Some(String::new()),
            command: Some(Vec::new()),
            args: Some(Vec::new()),
            ..Default::default()
        };

        let container = TunnelContainerBuilder::new("t-1").build(overrides);

        assert_eq!(
            container.image.as_deref(),
            Some("cloudflare/cloudflared:latest")
        );
        assert_eq!(container.command, Some(vec!["cloudflared".to_string()]));
        assert_eq!(container.args.map(|a| a.len()), Some(7));
    }

    #[test]
    fn test_metrics_port_appended_even_when_ports_set() {
        let overrides = Container {
            ports: Some(vec![ContainerPort {
                name: Some("http".to_string()),
                container_port: 8080,
                ..Default::default()
            }]),
            ..Default::default()
        };

        let container = TunnelContainerBuilder::new("t-1").build(overrides);
        let ports = container.ports.unwrap();

        assert_eq!(ports.len(), 2);
        assert_eq!(ports[0].container_port, 8080);
        assert_eq!(ports[1], TunnelContainerBuilder::metrics_port());
    }

    #[test]
    fn test_mounts_appended_after_existing() {
        let overrides = Container {
            volume_mounts: Some(vec![mount("tmp", "/tmp"), mount("certs", "/etc/certs")]),
            ..Default::default()
        };

        let container = TunnelContainerBuilder::new("abc123").build(overrides);
        let mounts = container.volume_mounts.unwrap();

        assert_eq!(mounts.len(), 4);
        assert_eq!(mounts[0], mount("tmp", "/tmp"));
        assert_eq!(mounts[1], mount("certs", "/etc/certs"));

        assert_eq!(mounts[2].name, "cloudflared-config");
        assert_eq!(mounts[2].mount_path, "/config/config.yaml");
        assert_eq!(mounts[2].sub_path.as_deref(), Some("config.yaml"));

        assert_eq!(mounts[3].name, "cloudflared-creds");
        assert_eq!(mounts[3].mount_path, "/config/abc123.json");
        assert_eq!(mounts[3].sub_path.as_deref(), Some("abc123.json"));
    }

    #[test]
    fn test_second_pass_appends_again() {
        let builder = TunnelContainerBuilder::new("t-1");
        let once = builder.build(Container::default());
        let twice = builder.build(once.clone());

        // Scalar defaults are stable
        assert_eq!(once.image, twice.image);
        assert_eq!(once.command, twice.command);
        assert_eq!(once.args, twice.args);

        // Appends are not
        assert_eq!(twice.ports.unwrap().len(), 2);
        assert_eq!(twice.volume_mounts.unwrap().len(), 4);
    }

    #[test]
    fn test_custom_default_image() {
        let container = TunnelContainerBuilder::new("t-1")
            .with_default_image("cloudflare/cloudflared:2024.6.0")
            .build(Container::default());

        assert_eq!(
            container.image.as_deref(),
            Some("cloudflare/cloudflared:2024.6.0")
        );
    }
}
