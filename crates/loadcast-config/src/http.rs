//! HTTP listener configuration.

use serde::{Deserialize, Serialize};

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    8000
}

/// Blocking request workers. tiny_http receive loops block, so this is the
/// number of requests served concurrently.
const fn default_workers() -> usize {
    4
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind. 0 picks an ephemeral port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of blocking request workers.
    #[serde(default = "default_workers")]
    pub workers: usize,
}

impl HttpConfig {
    /// The `host:port` string handed to the server.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}
