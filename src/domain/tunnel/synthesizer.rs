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

use crate::domain::config::SynthesisConf;
use crate::domain::tunnel::request::TunnelWorkloadRequest;
use crate::infrastructure::kubernetes::resources::{
    DeploymentFinalizer, TunnelContainerBuilder, WorkloadAssembler,
};
use crate::shared::error::Result;
use k8s_openapi::api::apps::v1::Deployment;
use tracing::{debug, info};

/// Runs the three synthesis passes: container defaulting, workload assembly
/// and descriptor finalization.
#[derive(Debug, Clone, Default)]
pub struct TunnelWorkloadSynthesizer {
    conf: SynthesisConf,
}

impl TunnelWorkloadSynthesizer {
    pub fn new(conf: SynthesisConf) -> Self {
        Self { conf }
    }

    pub fn synthesize(&self, request: TunnelWorkloadRequest) -> Result<Deployment> {
        request.validate()?;

        let TunnelWorkloadRequest {
            name,
            namespace,
            tunnel_id,
            container,
            workload_template,
        } = request;

        debug!(%name, %namespace, %tunnel_id, "Synthesizing tunnel deployment");

        let container = TunnelContainerBuilder::new(tunnel_id)
            .with_default_image(self.conf.default_image.clone())
            .build(container);

        let spec = WorkloadAssembler::new(name.clone()).assemble(workload_template, container);

        let deployment = DeploymentFinalizer::new(name, namespace).finalize(spec);

        info!(
            deployment = deployment.metadata.name.as_deref().unwrap_or_default(),
            namespace = deployment.metadata.namespace.as_deref().unwrap_or_default(),
            "Synthesized tunnel deployment"
        );

        Ok(deployment)
    }
}

/// Synthesizes with the built-in defaults.
pub fn synthesize_deployment(request: TunnelWorkloadRequest) -> Result<Deployment> {
    TunnelWorkloadSynthesizer::default().synthesize(request)
}
