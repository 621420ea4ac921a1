// Copyright 2023 Dmitry Tantsur <dtantsur@protonmail.com>
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

//! Service configuration.
//!
//! A configuration file (`redfish.yaml`) describes named services:
//!
//! ```yaml
//! services:
//!   lab-1:
//!     endpoint: https://10.0.0.5
//!     username: root
//!     password: calvin
//!     insecure: true
//!     strip_etag_quotes: false
//! ```

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::{Error, ErrorKind, Result};

const CONFIG_ENV: &str = "REDFISH_CONFIG";
const CONFIG_FILE: &str = "redfish.yaml";

/// Connection parameters of a single service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Base URL of the service, e.g. `https://10.0.0.5`.
    pub endpoint: String,
    /// User name for HTTP basic authentication.
    #[serde(default)]
    pub username: Option<String>,
    /// Password for HTTP basic authentication.
    #[serde(default)]
    pub password: Option<String>,
    /// Pre-existing session token (`X-Auth-Token`), wins over basic authentication.
    #[serde(default)]
    pub token: Option<String>,
    /// Skip TLS certificate verification.
    #[serde(default)]
    pub insecure: bool,
    /// Request timeout in seconds.
    #[serde(default)]
    pub timeout: Option<u64>,
    /// Remove quotes around ETags before sending them in `If-Match`.
    #[serde(default)]
    pub strip_etag_quotes: bool,
    /// Never send `If-Match`.
    #[serde(default)]
    pub disable_etag_match: bool,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    services: HashMap<String, Config>,
}

impl Config {
    /// Create a configuration for the endpoint.
    pub fn new<S: Into<String>>(endpoint: S) -> Config {
        Config {
            endpoint: endpoint.into(),
            ..Config::default()
        }
    }

    /// Load a named service from the configuration file.
    pub fn from_config<S: AsRef<str>>(name: S) -> Result<Config> {
        let path = find_config_file().ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidInput,
                format!("{} was not found", CONFIG_FILE),
            )
        })?;
        debug!("Loading service {} from {}", name.as_ref(), path.display());
        let content = fs::read_to_string(&path).map_err(|e| {
            Error::new(
                ErrorKind::InvalidInput,
                format!("cannot read {}: {}", path.display(), e),
            )
        })?;
        parse_config(&content, name.as_ref())
    }

    /// Create a configuration from environment variables.
    ///
    /// `REDFISH_ENDPOINT` is required; `REDFISH_USERNAME`, `REDFISH_PASSWORD`, `REDFISH_TOKEN`,
    /// `REDFISH_INSECURE` and `REDFISH_TIMEOUT` are optional.
    pub fn from_env() -> Result<Config> {
        from_vars(|name| env::var(name).ok())
    }
}

fn find_config_file() -> Option<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }

    let local = PathBuf::from(CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config/redfish").join(CONFIG_FILE))
        .filter(|path| path.is_file())
}

fn parse_config(content: &str, name: &str) -> Result<Config> {
    let mut file: ConfigFile = serde_yaml::from_str(content)?;
    let config = file.services.remove(name).ok_or_else(|| {
        Error::new(
            ErrorKind::InvalidInput,
            format!("service {} is not in the configuration file", name),
        )
    })?;
    if config.endpoint.is_empty() {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            format!("service {} has no endpoint", name),
        ));
    }
    Ok(config)
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn from_vars<F>(var: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let endpoint = var("REDFISH_ENDPOINT").ok_or_else(|| {
        Error::new(ErrorKind::InvalidInput, "REDFISH_ENDPOINT is not set")
    })?;
    let timeout = match var("REDFISH_TIMEOUT") {
        Some(value) => Some(value.parse().map_err(|_| {
            Error::new(
                ErrorKind::InvalidInput,
                format!("REDFISH_TIMEOUT must be a number of seconds, got {}", value),
            )
        })?),
        None => None,
    };

    Ok(Config {
        endpoint,
        username: var("REDFISH_USERNAME"),
        password: var("REDFISH_PASSWORD"),
        token: var("REDFISH_TOKEN"),
        insecure: var("REDFISH_INSECURE")
            .map(|v| parse_bool(&v))
            .unwrap_or(false),
        timeout,
        strip_etag_quotes: false,
        disable_etag_match: false,
    })
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::{from_vars, parse_config};
    use crate::ErrorKind;

    const CONFIG: &str = r#"
services:
  lab-1:
    endpoint: https://10.0.0.5
    username: root
    password: calvin
    insecure: true
  lab-2:
    endpoint: https://10.0.0.6
    token: abcdef
    timeout: 30
    strip_etag_quotes: true
"#;

    #[test]
    fn test_parse_config() {
        let config = parse_config(CONFIG, "lab-1").unwrap();
        assert_eq!(config.endpoint, "https://10.0.0.5");
        assert_eq!(config.username.as_deref(), Some("root"));
        assert_eq!(config.password.as_deref(), Some("calvin"));
        assert!(config.insecure);
        assert!(!config.strip_etag_quotes);

        let config = parse_config(CONFIG, "lab-2").unwrap();
        assert_eq!(config.token.as_deref(), Some("abcdef"));
        assert_eq!(config.timeout, Some(30));
        assert!(config.strip_etag_quotes);
        assert!(!config.insecure);
    }

    #[test]
    fn test_parse_config_missing() {
        let err = parse_config(CONFIG, "lab-3").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        let err = parse_config("services: [", "lab-1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_from_vars() {
        let vars: HashMap<&str, &str> = [
            ("REDFISH_ENDPOINT", "https://bmc"),
            ("REDFISH_USERNAME", "admin"),
            ("REDFISH_INSECURE", "Yes"),
            ("REDFISH_TIMEOUT", "5"),
        ]
        .into_iter()
        .collect();
        let config = from_vars(|name| vars.get(name).map(|v| v.to_string())).unwrap();
        assert_eq!(config.endpoint, "https://bmc");
        assert_eq!(config.username.as_deref(), Some("admin"));
        assert_eq!(config.password, None);
        assert!(config.insecure);
        assert_eq!(config.timeout, Some(5));
    }

    #[test]
    fn test_from_vars_errors() {
        let err = from_vars(|_| None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = from_vars(|name| match name {
            "REDFISH_ENDPOINT" => Some("https://bmc".into()),
            "REDFISH_TIMEOUT" => Some("soon".into()),
            _ => None,
        })
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
