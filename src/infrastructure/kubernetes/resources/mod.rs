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

//! Builders for the tunnel agent Deployment

pub mod container;
pub mod deployment;
pub mod naming;
pub mod template_utils;
pub mod traits;
pub mod workload;

pub use self::container::TunnelContainerBuilder;
pub use self::deployment::DeploymentFinalizer;
pub use self::naming::{credentials_file_name, credentials_mount_path, resource_name};
pub use self::traits::LabeledResourceBuilder;
pub use self::workload::WorkloadAssembler;
