//! CORS configuration.

use serde::{Deserialize, Serialize};

fn default_allow_origin() -> String {
    "*".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Value of the `Access-Control-Allow-Origin` header on every response.
    /// Narrow to the frontend origin in production deployments.
    #[serde(default = "default_allow_origin")]
    pub allow_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origin: default_allow_origin(),
        }
    }
}
