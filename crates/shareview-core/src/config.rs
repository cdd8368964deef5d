//! Server configuration.

use std::net::{IpAddr, SocketAddr};

use http::HeaderValue;

use crate::error::{ShareviewError, ShareviewResult};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Where the server listens and which browser origin it trusts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// The single origin allowed to make credentialed cross-origin calls.
    pub allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16, allowed_origin: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            allowed_origin: allowed_origin.into(),
        }
    }

    /// Check the whole configuration, failing on the first bad field.
    pub fn validate(&self) -> ShareviewResult<()> {
        self.socket_addr()?;
        self.origin_header()?;
        Ok(())
    }

    /// Address to bind. The host must be a literal IP address.
    pub fn socket_addr(&self) -> ShareviewResult<SocketAddr> {
        let ip: IpAddr = self.host.parse().map_err(|_| {
            ShareviewError::invalid_config(format!("host '{}' is not an IP address", self.host))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// The allowed origin as a header value, as sent back in
    /// `Access-Control-Allow-Origin`.
    pub fn origin_header(&self) -> ShareviewResult<HeaderValue> {
        let origin = self.allowed_origin.trim_end_matches('/');
        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            return Err(ShareviewError::invalid_config(format!(
                "allowed origin '{}' must start with http:// or https://",
                self.allowed_origin
            )));
        }
        HeaderValue::from_str(origin).map_err(|e| {
            ShareviewError::invalid_config(format!(
                "allowed origin '{}' is not a valid header value: {e}",
                self.allowed_origin
            ))
        })
    }
}
