use crate::config::Config;
use crate::player::PlayerRegistry;

/// Root context handed to the UI at launch: the loaded configuration and
/// the application's single player registry.
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub registry: PlayerRegistry,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        AppContext {
            config,
            registry: PlayerRegistry::new(),
        }
    }
}
