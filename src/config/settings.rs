//! Settings structures for mxisd-directory configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Main settings structure matching the mxisd.yaml layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub outgoing: OutgoingSettings,
    pub dns: DnsSettings,
    pub directory: DirectorySettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with environment variables (MXISD_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("MXISD_LOG_LEVEL") {
            self.general.log_level = val;
        }
        if let Ok(val) = std::env::var("MXISD_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("MXISD_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("MXISD_PUBLIC_URL") {
            self.server.public_url = Some(val);
        }
    }

    /// Get provider config by name
    pub fn get_provider(&self, name: &str) -> Option<&ProviderConfig> {
        self.directory.providers.iter().find(|p| p.name == name)
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Default log level when RUST_LOG is not set
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
    /// Public base URL of the client-facing homeserver
    pub public_url: Option<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8090,
            bind_address: "127.0.0.1".to_string(),
            public_url: None,
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// User agent sent to homeservers and providers
    pub user_agent: String,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 10.0,
            user_agent: "mxisd".to_string(),
            verify_ssl: true,
            proxies: ProxySettings::default(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

/// `dns:` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsSettings {
    pub overwrite: DnsOverwriteSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsOverwriteSettings {
    pub homeserver: HomeserverOverwrite,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeserverOverwrite {
    /// Rewrites applied to client-server API targets
    pub client: Vec<DnsOverwriteEntry>,
}

/// A single host rewrite, e.g. `example.org` -> `http://localhost:8008`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsOverwriteEntry {
    pub name: String,
    pub value: String,
}

/// `directory:` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectorySettings {
    /// Providers, in the order they are queried
    pub providers: Vec<ProviderConfig>,
}

/// Individual provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Provider name (used in logs)
    pub name: String,
    /// Provider implementation to use
    #[serde(rename = "type")]
    pub provider: String,
    /// Whether the provider takes part in searches
    pub enabled: bool,
    /// Provider-specific settings
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            provider: String::new(),
            enabled: true,
            extra: HashMap::new(),
        }
    }
}

impl ProviderConfig {
    /// Deserialize the provider-specific keys into a typed struct
    pub fn extra_as<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        let mapping: serde_yaml::Mapping = self
            .extra
            .iter()
            .map(|(k, v)| (serde_yaml::Value::String(k.clone()), v.clone()))
            .collect();
        Ok(serde_yaml::from_value(serde_yaml::Value::Mapping(mapping))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8090);
        assert_eq!(settings.outgoing.user_agent, "mxisd");
        assert!(settings.directory.providers.is_empty());
        assert!(settings.dns.overwrite.homeserver.client.is_empty());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
server:
  port: 9000
dns:
  overwrite:
    homeserver:
      client:
        - name: example.org
          value: http://localhost:8008
directory:
  providers:
    - name: corp
      type: rest
      endpoint: http://localhost:9999/directory
    - name: static
      type: memory
      enabled: false
"#;
        let settings = Settings::from_yaml(yaml).unwrap();
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.bind_address, "127.0.0.1");
        assert_eq!(settings.dns.overwrite.homeserver.client[0].name, "example.org");

        let corp = settings.get_provider("corp").unwrap();
        assert_eq!(corp.provider, "rest");
        assert!(corp.enabled);
        assert!(corp.extra.contains_key("endpoint"));

        assert!(!settings.get_provider("static").unwrap().enabled);
    }

    #[test]
    fn test_extra_as() {
        #[derive(Deserialize)]
        struct Extra {
            endpoint: String,
        }

        let yaml = "name: corp\ntype: rest\nendpoint: http://localhost/x\n";
        let config: ProviderConfig = serde_yaml::from_str(yaml).unwrap();
        let extra: Extra = config.extra_as().unwrap();
        assert_eq!(extra.endpoint, "http://localhost/x");
    }
}
