use serde::Deserialize;

use campus_core::config::Config;

/// Platform service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct PlatformConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3120). Env var: `PLATFORM_PORT`.
    #[serde(default = "default_platform_port")]
    pub platform_port: u16,
    /// Directory holding uploaded files. Env var: `UPLOAD_ROOT`.
    #[serde(default = "default_upload_root")]
    pub upload_root: String,
}

fn default_platform_port() -> u16 {
    3120
}

fn default_upload_root() -> String {
    "storage/app/uploads".to_owned()
}

impl Config for PlatformConfig {}
