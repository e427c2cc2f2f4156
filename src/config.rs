use confique::Config;

/// Application configuration
#[derive(Debug, Clone, Config)]
pub struct ServerConfig {
    #[config(env = "BIND_ADDRESS", default = "0.0.0.0:8000")]
    pub bind_address: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn load_and_validate() -> Result<Self, confique::Error> {
        Self::builder().env().load()
    }
}
