use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Spreadsheet webhook that receives each submitted sample. `None`
    /// disables relaying; samples are still recorded locally.
    pub webhook_url: Option<String>,
    pub relay_timeout_secs: u64,
    pub relay_user_agent: String,
    pub export_path: PathBuf,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            // Apps Script webhook URLs embed the deployment key.
            .field("webhook_url", &self.webhook_url.as_ref().map(|_| "[redacted]"))
            .field("relay_timeout_secs", &self.relay_timeout_secs)
            .field("relay_user_agent", &self.relay_user_agent)
            .field("export_path", &self.export_path)
            .finish()
    }
}
