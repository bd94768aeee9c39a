use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::cyclone::{Arrangement, DesignInput, EfficiencyModel, DEFAULT_EFFECTIVE_TURNS_FALLBACK};
use crate::presets::Preset;
use crate::units::*;

/// 설정 파일 기본 경로.
pub const CONFIG_PATH: &str = "config.toml";

/// 결과 표시용 기본 단위.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub flow_rate: FlowRateUnit,
    pub velocity: VelocityUnit,
    pub length: LengthUnit,
    pub pressure: PressureUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            flow_rate: FlowRateUnit::CubicMeterPerSecond,
            velocity: VelocityUnit::MeterPerSecond,
            length: LengthUnit::Meter,
            pressure: PressureUnit::Pascal,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub preset: Preset,
    /// 프리셋 모델 대신 쓸 효율 모델
    pub model: Option<EfficiencyModel>,
    /// 프리셋 K 대신 쓸 압력손실 계수
    pub loss_coefficient: Option<f64>,
    /// 입구 높이가 0 이하일 때 쓰는 유효 회전수
    pub effective_turns_fallback: f64,
    /// 목표 입경 [μm]. 없으면 프리셋 값.
    pub target_diameter_um: Option<f64>,
    pub curve_min_um: f64,
    pub curve_max_um: f64,
    pub curve_points: usize,
    pub series: u32,
    /// 병렬 대수. 없으면 총 유량에서 필요한 대수를 산정한다.
    pub parallel: Option<u32>,
    pub default_units: DefaultUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preset: Preset::CementKiln,
            model: None,
            loss_coefficient: None,
            effective_turns_fallback: DEFAULT_EFFECTIVE_TURNS_FALLBACK,
            target_diameter_um: None,
            curve_min_um: 0.1,
            curve_max_um: 10.0,
            curve_points: crate::cyclone::DEFAULT_CURVE_POINTS,
            series: 1,
            parallel: None,
            default_units: DefaultUnits::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_create(Path::new(CONFIG_PATH))
}

/// 지정 경로의 설정을 읽는다. 파일이 없으면 기본 설정을 저장하고 돌려준다.
pub fn load_or_create(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(CONFIG_PATH))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 프리셋에 설정의 덮어쓰기 값을 적용한 계산 입력.
    ///
    /// 모델만 바꾸고 K를 지정하지 않으면 새 모델의 기본 K를 쓴다.
    /// 병렬 대수를 지정하지 않으면 총 유량에서 필요한 대수를 쓴다.
    pub fn design_input(&self) -> DesignInput {
        let mut input = self.preset.design_input();
        if let Some(model) = self.model {
            input.model = model;
            input.loss_coefficient = model.default_loss_coefficient();
        }
        if let Some(k) = self.loss_coefficient {
            input.loss_coefficient = k;
        }
        if let Some(dp) = self.target_diameter_um {
            input.target_diameter_um = dp;
        }
        input.effective_turns_fallback = self.effective_turns_fallback;
        let parallel = self.parallel.unwrap_or_else(|| input.required_units());
        input.arrangement = Arrangement::from_counts(self.series, parallel);
        input
    }
}
