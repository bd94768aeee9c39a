use std::fs;
use std::path::Path;

use tracing::info;

use crate::config::Config;
use crate::conversion;
use crate::cyclone::{self, DesignInput};
use crate::export;
use crate::presets::Preset;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
    /// 잘못된 명령 인자
    InvalidArgument(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
            AppError::InvalidArgument(msg) => write!(f, "인자 오류: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

/// 성능 계산 결과를 출력하고, 경로가 주어지면 구간별 표와 요약을 CSV로 저장한다.
pub fn evaluate(
    cfg: &Config,
    csv_path: Option<&Path>,
    summary_path: Option<&Path>,
) -> Result<(), AppError> {
    let input = cfg.design_input();
    let report = cyclone::evaluate(&input);
    ui_cli::print_report(&report, cfg);
    if let Some(path) = csv_path {
        fs::write(path, export::distribution_csv(&report.distribution))?;
        info!(path = %path.display(), "distribution table written");
        println!("구간별 집진 표를 {} 에 저장했습니다.", path.display());
    }
    if let Some(path) = summary_path {
        fs::write(path, export::summary_csv(&report))?;
        info!(path = %path.display(), "summary written");
        println!("성능 요약을 {} 에 저장했습니다.", path.display());
    }
    Ok(())
}

/// 효율 곡선을 CSV로 출력한다. 경로가 없으면 표준 출력으로 내보낸다.
pub fn curve(cfg: &Config, out_path: Option<&Path>) -> Result<(), AppError> {
    if cfg.curve_max_um < cfg.curve_min_um {
        return Err(AppError::InvalidArgument(format!(
            "곡선 최대 입경 {} μm 가 최소 입경 {} μm 보다 작습니다.",
            cfg.curve_max_um, cfg.curve_min_um
        )));
    }
    let input = cfg.design_input();
    let points =
        cyclone::efficiency_curve(&input, cfg.curve_min_um, cfg.curve_max_um, cfg.curve_points);
    let csv = export::curve_csv(&points);
    match out_path {
        Some(path) => {
            fs::write(path, csv)?;
            info!(path = %path.display(), points = points.len(), "efficiency curve written");
            println!("효율 곡선을 {} 에 저장했습니다.", path.display());
        }
        None => print!("{csv}"),
    }
    Ok(())
}

/// 프리셋 목록을 출력한다.
pub fn list_presets() {
    for preset in Preset::ALL {
        let row = preset.row();
        println!(
            "{:<12} {:<12} D={} m, V={} m/s, ρp={} kg/m³, K={}, 모델={}",
            format!("{preset:?}"),
            row.label,
            row.geometry.body_diameter_m,
            row.gas.inlet_velocity_m_per_s,
            row.particle.density_kg_per_m3,
            row.loss_coefficient,
            row.model.label()
        );
    }
}

/// 단위 변환 명령을 처리한다.
pub fn convert(kind: &str, value: f64, from: &str, to: &str) -> Result<f64, AppError> {
    let kind = conversion::parse_quantity(kind)?;
    Ok(conversion::convert(kind, value, from, to)?)
}

/// 설정 메뉴에서 바뀔 수 있는 값만 편집 중인 입력에 반영한다.
pub fn apply_settings(input: &mut DesignInput, config: &Config) {
    input.effective_turns_fallback = config.effective_turns_fallback;
}

/// 대화형 메뉴 루프를 실행한다. 종료 시 설정을 저장한다.
pub fn run(config: &mut Config) -> Result<(), AppError> {
    let mut input: DesignInput = config.design_input();
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::SelectPreset => {
                ui_cli::handle_select_preset(config)?;
                input = config.design_input();
            }
            MenuChoice::EditParameters => ui_cli::handle_edit_parameters(&mut input)?,
            MenuChoice::Evaluate => {
                let report = cyclone::evaluate(&input);
                ui_cli::print_report(&report, config);
            }
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion()?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(config)?;
                config.save()?;
                apply_settings(&mut input, config);
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("프로그램을 종료합니다.");
                break;
            }
        }
    }
    Ok(())
}
