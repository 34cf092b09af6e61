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

//! Naming conventions shared with the ConfigMap and Secret provisioning.

use crate::infrastructure::constants::{CONFIG_DIR, CREDENTIALS_FILE_EXTENSION, RESOURCE_SUFFIX};

/// Name of the Deployment and of its backing ConfigMap and Secret.
pub fn resource_name(name: &str) -> String {
    format!("{}-{}", name, RESOURCE_SUFFIX)
}

pub fn credentials_file_name(tunnel_id: &str) -> String {
    format!("{}.{}", tunnel_id, CREDENTIALS_FILE_EXTENSION)
}

pub fn credentials_mount_path(tunnel_id: &str) -> String {
    format!("{}/{}", CONFIG_DIR, credentials_file_name(tunnel_id))
}
