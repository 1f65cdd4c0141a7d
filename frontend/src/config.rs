//! Explorer configuration embedded into the bundle.

use shared::ExplorerConfig;

const EXPLORER_TOML: &str = include_str!("../explorer.toml");

/// Parse the embedded `explorer.toml`, falling back to the built-in defaults
/// when it is malformed.
pub fn load_explorer_config() -> ExplorerConfig {
    match ExplorerConfig::from_toml_str(EXPLORER_TOML) {
        Ok(config) => {
            debug_log!(crate::DEBUG_CONFIG, "Explorer config loaded: {:?}", config.map);
            config
        }
        Err(error) => {
            zoon::eprintln!("Invalid explorer.toml, using defaults: {error}");
            ExplorerConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_matches_defaults() {
        let embedded = ExplorerConfig::from_toml_str(EXPLORER_TOML).unwrap();
        assert_eq!(embedded, ExplorerConfig::default());
    }
}
