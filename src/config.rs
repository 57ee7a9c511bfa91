use std::env;
use anyhow::{Context, Result};

pub const DEFAULT_LOCAL_ENDPOINT: &str = "http://localhost:8000";
pub const LOCAL_REGION: &str = "localhost";

#[derive(Debug, Clone)]
pub struct Config {
    pub users_table: String,
    pub is_offline: bool,
    pub local_endpoint: String,
    pub aws_region: Option<String>,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let users_table = env::var("USERS_TABLE")
            .context("USERS_TABLE environment variable is required")?;

        // Any non-empty value, "false" and "0" included, selects local mode.
        let is_offline = env::var("IS_OFFLINE")
            .map(|value| !value.is_empty())
            .unwrap_or(false);

        let local_endpoint = env::var("DYNAMODB_LOCAL_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_LOCAL_ENDPOINT.to_string());

        let aws_region = env::var("AWS_REGION").ok();

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            users_table,
            is_offline,
            local_endpoint,
            aws_region,
            service_port,
            service_host,
        })
    }

    /// Endpoint override for DynamoDB Local, `None` when talking to AWS.
    pub fn offline_endpoint(&self) -> Option<&str> {
        self.is_offline.then_some(self.local_endpoint.as_str())
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Users table: {}", self.users_table);
        tracing::info!("  DynamoDB endpoint: {}",
            self.offline_endpoint().unwrap_or("AWS (default endpoint resolution)"));
        tracing::info!("  AWS region: {}",
            if self.is_offline { LOCAL_REGION } else { self.aws_region.as_deref().unwrap_or("default chain") });
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        users_table: "users-table-test".to_string(),
        is_offline: true,
        local_endpoint: DEFAULT_LOCAL_ENDPOINT.to_string(),
        aws_region: None,
        service_port: 3000,
        service_host: "0.0.0.0".to_string(),
    }
}
