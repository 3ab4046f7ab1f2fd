use std::sync::Arc;

use tracing::info;

use crate::{config::Config, error::ConfigError, gateway::Gateway};

pub struct State {
    pub config: Config,
    pub gateway: Gateway,
}

impl State {
    pub fn new(config: Config) -> Result<Arc<Self>, ConfigError> {
        info!("Upstream API: {}", config.upstream_api_base);
        let gateway = Gateway::new(&config)?;

        Ok(Arc::new(Self { config, gateway }))
    }
}
