use crate::chart::animation::{AnimationParams, SpringParams};
use crate::chart::model::{IconKey, LayoutMode, SegmentName};
use crate::chart::{
    EXTRA_PADDING, ICON_SIZE, LIFT_OFFSET, MAGNITUDE_DURATION_MS, SCALE_MAX, SECTOR_REVEAL_MS,
    SLIDER_MAX, SLIDER_MIN, SLIDER_STEP, SPRING_DAMPING, SPRING_MASS, SPRING_STIFFNESS,
    WHEEL_RADIUS,
};
use crate::theme::Color;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::path::{Path, PathBuf};
use std::time::Duration;
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

/// Built-in seed tables.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    SerializeDisplay,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Preset {
    /// Eight named life areas with icons, equal spans.
    #[default]
    Life,
    /// Eight plain sectors on fixed 45° start angles that sweep in on mount.
    Sectors,
}

impl Preset {
    pub fn segments(&self) -> Vec<SegmentConfig> {
        match self {
            Self::Life => vec![
                seed("health", "#FF0000", 10.0, IconKey::Medkit),
                seed("career", "#00FF00", 5.0, IconKey::Briefcase),
                seed("finance", "#0000FF", 6.5, IconKey::Cash),
                seed("family", "#FFFF00", 7.5, IconKey::People),
                seed("friends", "#FF00FF", 10.0, IconKey::Person),
                seed("hobbies", "#00FFFF", 9.3, IconKey::GameController),
                seed("personal-growth", "#FFA500", 8.4, IconKey::Scale),
                seed("romance", "#800080", 7.4, IconKey::Heart),
            ],
            Self::Sectors => [
                ("red", 5.0),
                ("yellow", 2.0),
                ("blue", 10.0),
                ("orange", 7.0),
                ("green", 3.0),
                ("white", 6.0),
                ("purple", 8.0),
                ("navy", 3.0),
            ]
            .into_iter()
            .map(|(color, value)| SegmentConfig {
                name: None,
                color: color.parse().unwrap_or_default(),
                value,
                icon: None,
            })
            .collect(),
        }
    }

    pub fn angles(&self) -> Option<Vec<f64>> {
        match self {
            Self::Life => None,
            Self::Sectors => Some((0..8u8).map(|i| f64::from(i) * 45.0).collect()),
        }
    }

    pub fn reveal_ms(&self) -> u64 {
        match self {
            Self::Life => 0,
            Self::Sectors => SECTOR_REVEAL_MS,
        }
    }
}

fn seed(name: &str, color: &str, value: f64, icon: IconKey) -> SegmentConfig {
    SegmentConfig {
        name: Some(SegmentName::new(name)),
        color: color.parse().unwrap_or_default(),
        value,
        icon: Some(icon),
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SegmentConfig {
    #[serde(default)]
    pub name: Option<SegmentName>,
    pub color: Color,
    pub value: f64,
    #[serde(default)]
    pub icon: Option<IconKey>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: SLIDER_MIN,
            max: SLIDER_MAX,
            step: SLIDER_STEP,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub magnitude_ms: u64,
    /// Falls back to the preset's reveal duration when unset.
    pub reveal_ms: Option<u64>,
    pub spring: SpringConfig,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            magnitude_ms: MAGNITUDE_DURATION_MS,
            reveal_ms: None,
            spring: SpringConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChartConfig {
    pub radius: f64,
    pub padding: f64,
    pub icon_size: f64,
    pub scale_max: f64,
    pub lift_offset: f64,
    /// Explicit start angles in degrees; equal division when unset.
    pub angles: Option<Vec<f64>>,
    pub slider: SliderConfig,
    pub animation: AnimationConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            radius: WHEEL_RADIUS,
            padding: EXTRA_PADDING,
            icon_size: ICON_SIZE,
            scale_max: SCALE_MAX,
            lift_offset: LIFT_OFFSET,
            angles: None,
            slider: SliderConfig::default(),
            animation: AnimationConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub preset: Preset,
    #[serde(default)]
    pub chart: ChartConfig,
    /// Overrides the preset's seed table when present.
    #[serde(default)]
    pub segments: Option<Vec<SegmentConfig>>,
}

impl Config {
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            preset,
            ..Self::default()
        }
    }

    /// Switches to `preset`, dropping any seeds or angles that would shadow it.
    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.preset = preset;
        self.segments = None;
        self.chart.angles = None;
        self.chart.animation.reveal_ms = None;
        self
    }

    pub fn segments(&self) -> Vec<SegmentConfig> {
        self.segments
            .clone()
            .unwrap_or_else(|| self.preset.segments())
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.chart
            .angles
            .clone()
            .or_else(|| self.preset.angles())
            .map_or(LayoutMode::Equal, LayoutMode::Explicit)
    }

    pub fn animation_params(&self) -> AnimationParams {
        let animation = &self.chart.animation;
        AnimationParams {
            magnitude_duration: Duration::from_millis(animation.magnitude_ms),
            reveal_duration: Duration::from_millis(
                animation.reveal_ms.unwrap_or_else(|| self.preset.reveal_ms()),
            ),
            spring: SpringParams {
                stiffness: animation.spring.stiffness,
                damping: animation.spring.damping,
                mass: animation.spring.mass,
            },
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("org", "lifewheel", "lifewheel")
        .ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("LIFEWHEEL")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;
    load_config_from(&config_path, false)
}

/// Reads `path` (optional unless `required`) with `LIFEWHEEL_*` environment overrides on top.
pub fn load_config_from(path: &Path, required: bool) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path).required(required))
        .add_source(environment())
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> Config {
    match load_config() {
        Ok(c) => {
            log::info!("Loaded chart config ({} preset)", c.preset);
            c
        }
        Err(e) => {
            log::warn!("Falling back to the built-in preset: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> Result<PathBuf, ConfigError> {
    let path = get_config_path()?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_toml(source: &str) -> Config {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_default_config_matches_life_preset() {
        let cfg = parse_toml(DEFAULT_CONFIG);
        let seeds = cfg.segments();
        let expected = Preset::Life.segments();

        assert_eq!(cfg.preset, Preset::Life);
        assert_eq!(cfg.chart, ChartConfig::default());
        assert_eq!(seeds.len(), expected.len());
        for (seed, want) in seeds.iter().zip(&expected) {
            assert_eq!(seed.name, want.name);
            assert_eq!(seed.color, want.color);
            assert_eq!(seed.value, want.value);
            assert_eq!(seed.icon, want.icon);
        }
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = parse_toml("");
        assert_eq!(cfg.preset, Preset::Life);
        assert_eq!(cfg.layout_mode(), LayoutMode::Equal);
        assert_eq!(cfg.segments().len(), 8);
        assert_eq!(
            cfg.animation_params().magnitude_duration,
            Duration::from_millis(250)
        );
    }

    #[test]
    fn test_overrides() {
        let cfg = parse_toml(
            r#"
preset = "SECTORS"

[chart]
radius = 140
lift_offset = 12.5

[chart.animation]
reveal_ms = 0

[[segments]]
color = "teal"
value = 4
"#,
        );

        assert_eq!(cfg.preset, Preset::Sectors);
        assert_eq!(cfg.chart.radius, 140.0);
        assert_eq!(cfg.chart.lift_offset, 12.5);
        assert_eq!(cfg.chart.slider, SliderConfig::default());
        assert_eq!(cfg.animation_params().reveal_duration, Duration::ZERO);

        let seeds = cfg.segments();
        assert_eq!(seeds.len(), 1);
        assert_eq!(seeds[0].color, "teal".parse().unwrap());
        assert_eq!(seeds[0].value, 4.0);
        assert_eq!(seeds[0].icon, None);

        assert!(matches!(cfg.layout_mode(), LayoutMode::Explicit(ref a) if a.len() == 8));
    }

    #[test]
    fn test_sectors_preset() {
        let cfg = Config::from_preset(Preset::Sectors);
        assert_eq!(
            cfg.animation_params().reveal_duration,
            Duration::from_millis(2000)
        );
        let seeds = cfg.segments();
        assert_eq!(seeds[1].value, 2.0);
        assert_eq!(seeds[7].color, "navy".parse().unwrap());
    }

    #[test]
    fn test_with_preset_drops_shadowing_fields() {
        let mut cfg = Config::default();
        cfg.chart.angles = Some(vec![0.0, 180.0]);
        cfg.segments = Some(Vec::new());

        let cfg = cfg.with_preset(Preset::Life);
        assert_eq!(cfg.layout_mode(), LayoutMode::Equal);
        assert_eq!(cfg.segments().len(), 8);
    }

    #[test]
    fn test_preset_deserialization() {
        let cases = vec![
            ("\"life\"", Preset::Life),
            ("\"Life\"", Preset::Life),
            ("\"sectors\"", Preset::Sectors),
        ];

        for (json, expected) in cases {
            let deserialized: Preset = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }
}
