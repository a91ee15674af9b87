use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub classifier: ClassifierConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ClassifierConfig {
    /// Full URL of the detect endpoint
    pub endpoint: String,

    /// Seconds between capture ticks while detecting
    pub tick_interval_secs: u64,
}

#[derive(Debug, Deserialize)]
pub struct UiConfig {
    /// How long a toast stays on screen, in milliseconds
    pub toast_dwell_ms: u64,
}

impl Config {
    /// Load configuration. Every key has a default, so the file is optional
    /// and may override any subset.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("service.name", "moodline")?
            .set_default("classifier.endpoint", "http://127.0.0.1:5000/detect_emotion")?
            .set_default("classifier.tick_interval_secs", 2_i64)?
            .set_default("ui.toast_dwell_ms", 3000_i64)?
            .add_source(config::File::with_name(path).required(false))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_a_file() {
        let cfg = Config::load("config/does-not-exist").unwrap();
        assert_eq!(cfg.service.name, "moodline");
        assert_eq!(cfg.classifier.tick_interval_secs, 2);
        assert_eq!(cfg.ui.toast_dwell_ms, 3000);
        assert!(cfg.classifier.endpoint.ends_with("/detect_emotion"));
    }
}
