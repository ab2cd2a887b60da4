use std::path::PathBuf;

use gemslap_audio::EngineConfig;
use serde::Deserialize;

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    audio: AudioConfig,
    #[serde(default)]
    defaults: DefaultsConfig,
    #[serde(default)]
    export: ExportConfig,
}

#[derive(Deserialize, Default)]
struct AudioConfig {
    lookahead_ms: Option<f64>,
    tick_interval_ms: Option<f64>,
    unit_ceiling: Option<usize>,
    cleanup_margin_ms: Option<f64>,
    start_offset_ms: Option<f64>,
}

#[derive(Deserialize, Default)]
struct DefaultsConfig {
    style: Option<u32>,
    music: Option<bool>,
}

#[derive(Deserialize, Default)]
struct ExportConfig {
    sample_rate: Option<u32>,
    loops: Option<u32>,
    seed: Option<u64>,
}

pub struct Config {
    audio: AudioConfig,
    defaults: DefaultsConfig,
    export: ExportConfig,
}

impl Config {
    pub fn load() -> Self {
        let user = user_config_path().filter(|p| p.exists()).and_then(|path| {
            match std::fs::read_to_string(&path) {
                Ok(contents) => Some((path, contents)),
                Err(e) => {
                    log::warn!(target: "config", "could not read config {}: {}", path.display(), e);
                    None
                }
            }
        });
        match user {
            Some((path, contents)) => Self::layered(Some(&contents)).unwrap_or_else(|e| {
                log::warn!(target: "config", "ignoring malformed config {}: {}", path.display(), e);
                Self::embedded()
            }),
            None => Self::embedded(),
        }
    }

    fn embedded() -> Self {
        Self::from_file(embedded_file())
    }

    /// Embedded defaults overlaid with `user`, if given.
    fn layered(user: Option<&str>) -> Result<Self, toml::de::Error> {
        let mut base = embedded_file();
        if let Some(contents) = user {
            let user: ConfigFile = toml::from_str(contents)?;
            merge_audio(&mut base.audio, user.audio);
            merge_defaults(&mut base.defaults, user.defaults);
            merge_export(&mut base.export, user.export);
        }
        Ok(Self::from_file(base))
    }

    fn from_file(file: ConfigFile) -> Self {
        Config {
            audio: file.audio,
            defaults: file.defaults,
            export: file.export,
        }
    }

    /// Engine timing and budget, clamped to workable ranges. Non-finite
    /// values fall back to the defaults.
    pub fn engine(&self) -> EngineConfig {
        let fallback = EngineConfig::default();
        let audio = &self.audio;
        let lookahead_ms = finite_or(audio.lookahead_ms, fallback.lookahead_ms).clamp(10.0, 1000.0);
        EngineConfig {
            lookahead_ms,
            // ticks must come at least once per window or steps arrive late
            tick_interval_ms: finite_or(audio.tick_interval_ms, fallback.tick_interval_ms)
                .clamp(1.0, lookahead_ms),
            unit_ceiling: audio
                .unit_ceiling
                .unwrap_or(fallback.unit_ceiling)
                .clamp(1, 10_000),
            cleanup_margin_ms: finite_or(audio.cleanup_margin_ms, fallback.cleanup_margin_ms)
                .clamp(0.0, 5000.0),
            start_offset_ms: finite_or(audio.start_offset_ms, fallback.start_offset_ms)
                .clamp(0.0, 1000.0),
            seed: self.export.seed.unwrap_or(fallback.seed),
        }
    }

    pub fn default_style(&self) -> u32 {
        self.defaults.style.unwrap_or(0)
    }

    pub fn music_enabled(&self) -> bool {
        self.defaults.music.unwrap_or(true)
    }

    /// Export sample rate (clamped to 8000..192000).
    pub fn export_sample_rate(&self) -> u32 {
        self.export.sample_rate.unwrap_or(44_100).clamp(8_000, 192_000)
    }

    pub fn export_loops(&self) -> u32 {
        self.export.loops.unwrap_or(2).clamp(1, 1000)
    }
}

fn embedded_file() -> ConfigFile {
    toml::from_str(DEFAULT_CONFIG).expect("Failed to parse embedded config.toml")
}

fn finite_or(value: Option<f64>, fallback: f64) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(fallback)
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("gemslap").join("config.toml"))
}

fn merge_audio(base: &mut AudioConfig, user: AudioConfig) {
    if user.lookahead_ms.is_some() {
        base.lookahead_ms = user.lookahead_ms;
    }
    if user.tick_interval_ms.is_some() {
        base.tick_interval_ms = user.tick_interval_ms;
    }
    if user.unit_ceiling.is_some() {
        base.unit_ceiling = user.unit_ceiling;
    }
    if user.cleanup_margin_ms.is_some() {
        base.cleanup_margin_ms = user.cleanup_margin_ms;
    }
    if user.start_offset_ms.is_some() {
        base.start_offset_ms = user.start_offset_ms;
    }
}

fn merge_defaults(base: &mut DefaultsConfig, user: DefaultsConfig) {
    if user.style.is_some() {
        base.style = user.style;
    }
    if user.music.is_some() {
        base.music = user.music;
    }
}

fn merge_export(base: &mut ExportConfig, user: ExportConfig) {
    if user.sample_rate.is_some() {
        base.sample_rate = user.sample_rate;
    }
    if user.loops.is_some() {
        base.loops = user.loops;
    }
    if user.seed.is_some() {
        base.seed = user.seed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_matches_engine_defaults() {
        let config = Config::embedded();
        assert_eq!(config.engine(), EngineConfig::default());
        assert_eq!(config.default_style(), 0);
        assert!(config.music_enabled());
        assert_eq!(config.export_sample_rate(), 44_100);
        assert_eq!(config.export_loops(), 2);
    }

    #[test]
    fn test_user_values_override_field_by_field() {
        let config = Config::layered(Some(
            "[audio]\nunit_ceiling = 64\n\n[defaults]\nstyle = 7\n",
        ))
        .unwrap();
        let engine = config.engine();
        assert_eq!(engine.unit_ceiling, 64);
        assert!((engine.lookahead_ms - 80.0).abs() < f64::EPSILON);
        assert_eq!(config.default_style(), 7);
        assert!(config.music_enabled());
    }

    #[test]
    fn test_values_are_clamped() {
        let config = Config::layered(Some(
            "[audio]\nlookahead_ms = 50.0\ntick_interval_ms = 500.0\nunit_ceiling = 0\n\n[export]\nsample_rate = 10\nloops = 0\n",
        ))
        .unwrap();
        let engine = config.engine();
        assert!((engine.tick_interval_ms - 50.0).abs() < f64::EPSILON);
        assert_eq!(engine.unit_ceiling, 1);
        assert_eq!(config.export_sample_rate(), 8_000);
        assert_eq!(config.export_loops(), 1);
    }

    #[test]
    fn test_non_finite_values_fall_back_to_defaults() {
        let config = Config::layered(Some(
            "[audio]\nlookahead_ms = nan\ntick_interval_ms = inf\ncleanup_margin_ms = -inf\nstart_offset_ms = nan\n",
        ))
        .unwrap();
        assert_eq!(config.engine(), EngineConfig::default());
    }

    #[test]
    fn test_malformed_user_config_is_an_error() {
        assert!(Config::layered(Some("[audio\nlookahead_ms = ")).is_err());
        assert!(Config::layered(Some("[audio]\nunit_ceiling = \"many\"\n")).is_err());
    }
}
