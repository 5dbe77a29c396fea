// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use std::time::Duration;

pub const ENV_PORT: &str = "PORT";
pub const ENV_BIND_HOST: &str = "PORTAL_BIND_HOST";
pub const ENV_DATA_FILE: &str = "PORTAL_DATA_FILE";
pub const ENV_LOG_JSON: &str = "PORTAL_LOG_JSON";
pub const ENV_CORS_ORIGINS: &str = "PORTAL_CORS_ORIGINS";
pub const ENV_SHUTDOWN_DRAIN_MS: &str = "PORTAL_SHUTDOWN_DRAIN_MS";
pub const ENV_AUDIT_LOG: &str = "PORTAL_AUDIT_LOG";

pub const CORS_ANY_ORIGIN: &str = "*";

#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub bind_host: String,
    pub port: u16,
    pub data_file: PathBuf,
    pub log_json: bool,
    pub cors_allowed_origins: Vec<String>,
    pub shutdown_drain: Duration,
    pub enable_audit_log: bool,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            bind_host: "0.0.0.0".to_string(),
            port: 5000,
            data_file: PathBuf::from("data.json"),
            log_json: true,
            cors_allowed_origins: vec![CORS_ANY_ORIGIN.to_string()],
            shutdown_drain: Duration::ZERO,
            enable_audit_log: true,
        }
    }
}

impl PortalConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unparseable values keep their defaults.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            bind_host: lookup(ENV_BIND_HOST)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.bind_host),
            port: parsed(&lookup, ENV_PORT).unwrap_or(defaults.port),
            data_file: lookup(ENV_DATA_FILE)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map_or(defaults.data_file, PathBuf::from),
            log_json: flag(&lookup, ENV_LOG_JSON).unwrap_or(defaults.log_json),
            cors_allowed_origins: lookup(ENV_CORS_ORIGINS)
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|x| !x.is_empty())
                        .map(ToString::to_string)
                        .collect()
                })
                .unwrap_or(defaults.cors_allowed_origins),
            shutdown_drain: parsed::<u64>(&lookup, ENV_SHUTDOWN_DRAIN_MS)
                .map_or(defaults.shutdown_drain, Duration::from_millis),
            enable_audit_log: flag(&lookup, ENV_AUDIT_LOG).unwrap_or(defaults.enable_audit_log),
        }
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        if self.bind_host.contains(':') {
            format!("[{}]:{}", self.bind_host, self.port)
        } else {
            format!("{}:{}", self.bind_host, self.port)
        }
    }

    #[must_use]
    pub fn allows_origin(&self, origin: &str) -> bool {
        self.cors_allowed_origins
            .iter()
            .any(|x| x == CORS_ANY_ORIGIN || x == origin)
    }
}

fn parsed<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    lookup(name).and_then(|v| v.trim().parse::<T>().ok())
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<bool> {
    lookup(name).and_then(|v| match v.trim() {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    })
}

pub fn validate_startup_config(config: &PortalConfig) -> Result<(), String> {
    if config.port == 0 {
        return Err("port must be > 0".to_string());
    }
    if config.cors_allowed_origins.is_empty() {
        return Err(format!(
            "{ENV_CORS_ORIGINS} must list at least one origin (use `*` for any)"
        ));
    }
    if config.data_file.as_os_str().is_empty() {
        return Err("data file path must not be empty".to_string());
    }
    Ok(())
}
