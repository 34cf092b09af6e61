//! Table rendering for CLI output

use super::{ColorTheme, OriginIcon};
use crate::infrastructure::constants::{
    CONTAINER_NAME, METRICS_PORT, PORT_NAME_METRICS, VOLUME_NAME_CONFIG, VOLUME_NAME_CREDENTIALS,
};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Volume;

/// One row of the Deployment summary
#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentEntry {
    pub kind: &'static str,
    pub name: String,
    pub detail: String,
    pub injected: bool,
}

/// Table renderer for formatted output
pub struct TableRenderer {
    theme: ColorTheme,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer {
    /// Create a new table renderer with default theme
    pub fn new() -> Self {
        Self {
            theme: ColorTheme::default(),
        }
    }

    /// Render a synthesized Deployment as a summary table
    pub fn render_deployment(&self, deployment: &Deployment) -> String {
        let entries = collect_entries(deployment);

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("KIND").set_alignment(CellAlignment::Left),
                Cell::new("NAME").set_alignment(CellAlignment::Left),
                Cell::new("DETAIL").set_alignment(CellAlignment::Left),
                Cell::new("ORIGIN").set_alignment(CellAlignment::Center),
            ]);

        for entry in &entries {
            let color = self.theme.get_origin_color(entry.injected);
            table.add_row(vec![
                Cell::new(entry.kind).fg(self.theme.heading),
                Cell::new(&entry.name),
                Cell::new(&entry.detail),
                Cell::new(format!(
                    "{} {}",
                    OriginIcon::get_origin_icon(entry.injected),
                    OriginIcon::get_origin_text(entry.injected)
                ))
                .fg(color),
            ]);
        }

        let name = deployment.metadata.name.as_deref().unwrap_or("<unnamed>");
        let namespace = deployment.metadata.namespace.as_deref().unwrap_or("default");
        let replicas = deployment
            .spec
            .as_ref()
            .and_then(|s| s.replicas)
            .map(|r| r.to_string())
            .unwrap_or_else(|| "default".to_string());

        let mut output = String::new();
        output.push_str(&format!(
            "╭─ Deployment {}/{} {} ─╮\n",
            namespace,
            name,
            format!("[replicas: {}]", replicas).bright_black()
        ));
        output.push_str(&table.to_string());
        output.push('\n');
        output.push_str(&format!(
            "Legend: {} injected  {} caller\n",
            OriginIcon::INJECTED.green(),
            OriginIcon::CALLER.bright_black()
        ));

        output
    }
}

pub fn collect_entries(deployment: &Deployment) -> Vec<DeploymentEntry> {
    let mut entries = Vec::new();

    let pod_spec = match deployment
        .spec
        .as_ref()
        .and_then(|s| s.template.spec.as_ref())
    {
        Some(pod_spec) => pod_spec,
        None => return entries,
    };

    for container in &pod_spec.containers {
        let is_tunnel = container.name == CONTAINER_NAME;

        entries.push(DeploymentEntry {
            kind: "container",
            name: container.name.clone(),
            detail: container.image.clone().unwrap_or_default(),
            injected: is_tunnel,
        });

        for port in container.ports.iter().flatten() {
            entries.push(DeploymentEntry {
                kind: "port",
                name: port.name.clone().unwrap_or_default(),
                detail: format!(
                    "{}/{}",
                    port.container_port,
                    port.protocol.as_deref().unwrap_or("TCP")
                ),
                injected: is_tunnel
                    && port.container_port == METRICS_PORT
                    && port.name.as_deref() == Some(PORT_NAME_METRICS),
            });
        }

        for mount in container.volume_mounts.iter().flatten() {
            entries.push(DeploymentEntry {
                kind: "mount",
                name: mount.name.clone(),
                detail: match mount.sub_path.as_deref() {
                    Some(sub_path) => format!("{} ({})", mount.mount_path, sub_path),
                    None => mount.mount_path.clone(),
                },
                injected: is_tunnel && is_injected_volume(&mount.name),
            });
        }
    }

    for volume in pod_spec.volumes.iter().flatten() {
        entries.push(DeploymentEntry {
            kind: "volume",
            name: volume.name.clone(),
            detail: describe_volume_source(volume),
            injected: is_injected_volume(&volume.name),
        });
    }

    entries
}

fn is_injected_volume(name: &str) -> bool {
    name == VOLUME_NAME_CONFIG || name == VOLUME_NAME_CREDENTIALS
}

fn describe_volume_source(volume: &Volume) -> String {
    if let Some(ref config_map) = volume.config_map {
        format!("configMap {}", config_map.name)
    } else if let Some(ref secret) = volume.secret {
        format!("secret {}", secret.secret_name.as_deref().unwrap_or_default())
    } else if volume.empty_dir.is_some() {
        "emptyDir".to_string()
    } else if let Some(ref pvc) = volume.persistent_volume_claim {
        format!("persistentVolumeClaim {}", pvc.claim_name)
    } else {
        "other".to_string()
    }
}
