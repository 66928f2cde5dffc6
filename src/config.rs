use bulletin_config::{BulletinConfig, ID};
use cosmic_config::{Config, CosmicConfigEntry};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Load the user's bulletin defaults, falling back to built-in defaults on errors.
pub fn load() -> BulletinConfig {
    let helper = match Config::new(ID, BulletinConfig::VERSION) {
        Ok(helper) => helper,
        Err(err) => {
            tracing::error!("Failed to open config {ID}: {:?}", err);
            return BulletinConfig::default();
        }
    };

    match BulletinConfig::get_entry(&helper) {
        Ok(config) => config,
        Err((errs, config)) => {
            for err in errs {
                tracing::warn!("Error loading bulletin config: {:?}", err);
            }
            config
        }
    }
}
