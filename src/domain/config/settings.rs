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

use crate::infrastructure::constants::DEFAULT_IMAGE;
use crate::shared::error::{Result, TunnelError};
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;

/// Operator-side synthesis settings, read from TOML.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SynthesisConf {
    /// Image used when the container overrides leave `image` unset.
    pub default_image: String,
}

impl Default for SynthesisConf {
    fn default() -> Self {
        Self {
            default_image: DEFAULT_IMAGE.to_string(),
        }
    }
}

impl SynthesisConf {
    pub fn from<T: AsRef<str>>(path: T) -> Result<Self> {
        let content = read_to_string(path.as_ref()).map_err(|e| {
            TunnelError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.as_ref(),
                e
            ))
        })?;

        let conf: Self = toml::from_str(&content)?;

        if conf.default_image.is_empty() {
            return Err(TunnelError::ConfigError(format!(
                "default_image must not be empty in {}",
                path.as_ref()
            )));
        }

        Ok(conf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_keeps_latest_tag() {
        assert_eq!(
            SynthesisConf::default().default_image,
            "cloudflare/cloudflared:latest"
        );
    }

    #[test]
    fn test_load_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_image = \"cloudflare/cloudflared:2024.6.0\"").unwrap();

        let conf = SynthesisConf::from(file.path().to_str().unwrap()).unwrap();
        assert_eq!(conf.default_image, "cloudflare/cloudflared:2024.6.0");
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let conf = SynthesisConf::from(file.path().to_str().unwrap()).unwrap();
        assert_eq!(conf, SynthesisConf::default());
    }

    #[test]
    fn test_missing_file() {
        let err = SynthesisConf::from("/nonexistent/synthesis.toml").unwrap_err();
        assert!(matches!(err, TunnelError::ConfigError(_)));
    }
}
