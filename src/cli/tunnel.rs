//! Tunnel workload commands

use crate::cli::display::TableRenderer;
use crate::domain::config::{apply_to_request, parse_dynamic_configs, RequestFile, SynthesisConf};
use crate::domain::tunnel::{TunnelWorkloadRequest, TunnelWorkloadSynthesizer};
use clap::{Args, Parser, ValueEnum};
use k8s_openapi::api::apps::v1::Deployment;
use tracing::info;

/// Inputs shared by every command that synthesizes a Deployment
#[derive(Args, Debug, Clone, Default)]
pub struct RequestArgs {
    /// Logical tunnel name (overrides `name` in the request file)
    #[arg(long, short = 'N')]
    pub name: Option<String>,

    /// Target namespace (overrides `namespace` in the request file)
    #[arg(long, short = 'n')]
    pub namespace: Option<String>,

    /// Tunnel ID (overrides `tunnelId` in the request file)
    #[arg(long, short = 't')]
    pub tunnel_id: Option<String>,

    /// Path to a YAML request file with container overrides and workload template
    #[arg(long, short = 'f', value_name = "PATH")]
    pub request_file: Option<String>,

    /// Path to synthesis settings (TOML)
    /// If not provided, CLOUDFLARED_KUBE_CONF is consulted, then built-in defaults
    #[arg(long, value_name = "PATH")]
    pub config_file: Option<String>,

    /// Dynamic properties applied last (-D key=value)
    ///
    /// Identity: tunnel.name, tunnel.namespace, tunnel.id
    /// Container: tunnel.image, tunnel.image-pull-policy, tunnel.cpu, tunnel.memory
    /// Workload: tunnel.replicas, tunnel.service-account
    /// Maps (format: key1=val1,key2=val2): tunnel.labels, tunnel.annotations, tunnel.node-selector
    ///
    /// Example: -Dtunnel.replicas=2 -Dtunnel.labels=tier=edge
    #[arg(short = 'D', value_name = "KEY=VALUE")]
    pub properties: Vec<String>,
}

impl RequestArgs {
    /// Priority: -D properties > command line > request file
    pub fn build_request(&self) -> anyhow::Result<TunnelWorkloadRequest> {
        let mut request = match self.request_file {
            Some(ref path) => RequestFile::from_path(path)?.into_request()?,
            None => TunnelWorkloadRequest::default(),
        };

        if let Some(ref name) = self.name {
            request.name = name.clone();
        }
        if let Some(ref namespace) = self.namespace {
            request.namespace = namespace.clone();
        }
        if let Some(ref tunnel_id) = self.tunnel_id {
            request.tunnel_id = tunnel_id.clone();
        }

        if !self.properties.is_empty() {
            let dynamic_configs = parse_dynamic_configs(&self.properties)
                .map_err(|e| anyhow::anyhow!("Failed to parse dynamic configs: {}", e))?;
            apply_to_request(&dynamic_configs, &mut request);
        }

        Ok(request)
    }

    pub fn load_conf(&self) -> anyhow::Result<SynthesisConf> {
        if let Some(ref path) = self.config_file {
            Ok(SynthesisConf::from(path)?)
        } else if let Ok(env_path) = std::env::var("CLOUDFLARED_KUBE_CONF") {
            Ok(SynthesisConf::from(&env_path)?)
        } else {
            Ok(SynthesisConf::default())
        }
    }

    pub fn synthesize(&self) -> anyhow::Result<Deployment> {
        let synthesizer = TunnelWorkloadSynthesizer::new(self.load_conf()?);
        Ok(synthesizer.synthesize(self.build_request()?)?)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

#[derive(Parser, Debug, Clone)]
pub struct RenderCommand {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Output format
    #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Yaml)]
    pub output: OutputFormat,
}

impl RenderCommand {
    pub fn execute(&self) -> anyhow::Result<()> {
        let deployment = self.request.synthesize()?;
        println!("{}", render_deployment(&deployment, self.output)?);
        Ok(())
    }
}

pub fn render_deployment(deployment: &Deployment, format: OutputFormat) -> anyhow::Result<String> {
    let rendered = match format {
        OutputFormat::Yaml => serde_yaml::to_string(deployment)?,
        OutputFormat::Json => serde_json::to_string_pretty(deployment)?,
    };
    Ok(rendered)
}

#[derive(Parser, Debug, Clone)]
pub struct DescribeCommand {
    #[command(flatten)]
    pub request: RequestArgs,
}

impl DescribeCommand {
    pub fn execute(&self) -> anyhow::Result<()> {
        let deployment = self.request.synthesize()?;
        info!(
            deployment = deployment.metadata.name.as_deref().unwrap_or_default(),
            "Describing synthesized deployment"
        );

        let renderer = TableRenderer::new();
        println!("{}", renderer.render_deployment(&deployment));
        Ok(())
    }
}
