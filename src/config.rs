use std::env;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub table_name: String,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let table_name = env::var("DYNAMODB_TABLE_NAME")
            .unwrap_or_else(|_| "picus_data".to_string());

        let service_port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            table_name,
            service_port,
            service_host,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  DynamoDB table: {}", self.table_name);
        tracing::info!(
            "  Service listening on: {}:{}",
            self.service_host,
            self.service_port
        );
    }
}
