// CLI command definitions

use super::tunnel::{DescribeCommand, RenderCommand};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "cloudflared-kube",
    version,
    about = "Deployment synthesizer for cloudflared tunnel agents",
    long_about = "Builds the Kubernetes Deployment that runs a cloudflared tunnel agent, without touching a cluster"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Print the synthesized Deployment manifest
    Render(RenderCommand),

    /// Summarize the synthesized Deployment as a table
    Describe(DescribeCommand),
}
