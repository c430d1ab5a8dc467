use brainfog::LayoutConfig;

/// Environment variable naming an optional JSON layout configuration file.
const CONFIG_ENV: &str = "BRAINFOG_CONFIG";

fn load_config() -> LayoutConfig {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return LayoutConfig::default();
    };
    let loaded = std::fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read {path}: {e}"))
        .and_then(|json| LayoutConfig::from_json(&json));
    match loaded {
        Ok(config) => {
            log::info!("Loaded layout config from {path}");
            config
        }
        Err(err) => {
            log::warn!("{err}; using default layout config");
            LayoutConfig::default()
        }
    }
}

fn main() -> Result<(), eframe::Error> {
    // Set up logging; filter with RUST_LOG
    env_logger::init();

    brainfog::run_app(load_config())
}
