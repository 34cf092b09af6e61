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

/// Tunnel agent defaults
pub const DEFAULT_IMAGE: &str = "cloudflare/cloudflared:latest";
pub const DEFAULT_COMMAND: &str = "cloudflared";
pub const DEFAULT_ARGS: &[&str] = &[
    "tunnel",
    "--metrics",
    "localhost:9090",
    "--no-autoupdate",
    "--config",
    "/config/config.yaml",
    "run",
];

/// Container name. The spelling is load-bearing for already deployed resources.
pub const CONTAINER_NAME: &str = "cloudfalred";

/// Metrics endpoint
pub const METRICS_PORT: i32 = 9090;
pub const PORT_NAME_METRICS: &str = "metrics";
pub const PROTOCOL_TCP: &str = "TCP";

/// Config and credential files
pub const CONFIG_DIR: &str = "/config";
pub const CONFIG_FILE_NAME: &str = "config.yaml";
pub const CONFIG_MOUNT_PATH: &str = "/config/config.yaml";
pub const CREDENTIALS_FILE_EXTENSION: &str = "json";

/// Volume and VolumeMount names
pub const VOLUME_NAME_CONFIG: &str = "cloudflared-config";
pub const VOLUME_NAME_CREDENTIALS: &str = "cloudflared-creds";

/// Naming
pub const RESOURCE_SUFFIX: &str = "tunnel";
pub const OPERATOR_NAME: &str = "cloudflare-tunnel-operator";

/// Resource labels
pub const LABEL_NAME: &str = "app.kubernetes.io/name";
pub const LABEL_COMPONENT: &str = "app.kubernetes.io/component";
pub const LABEL_CREATED_BY: &str = "app.kubernetes.io/created-by";

/// Components
pub const COMPONENT_CONTROLLER: &str = "controller";

/// Annotations
pub const ANNOTATION_DEFAULT_CONTAINER: &str = "kubectl.kubernetes.io/default-container";

/// Kubernetes name limits
pub const MAX_LABEL_LENGTH: usize = 63;
