use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion;
use crate::cyclone::{Arrangement, DesignInput, EfficiencyModel, PerformanceReport};
use crate::presets::Preset;
use crate::units::{convert_flow_rate, convert_pressure, FlowRateUnit, PressureUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SelectPreset,
    EditParameters,
    Evaluate,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Multi-Cyclone Design Simulator ===");
    println!("1) 프리셋 선택");
    println!("2) 설계 파라미터 수정");
    println!("3) 성능 계산");
    println!("4) 단위 변환기");
    println!("5) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::SelectPreset),
            "2" => return Ok(MenuChoice::EditParameters),
            "3" => return Ok(MenuChoice::Evaluate),
            "4" => return Ok(MenuChoice::UnitConversion),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 프리셋 선택 메뉴를 처리한다.
pub fn handle_select_preset(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 프리셋 --");
    for (i, preset) in Preset::ALL.iter().enumerate() {
        println!("{}) {}", i + 1, preset.label());
    }
    let sel = read_line("번호(취소하려면 엔터): ")?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    match sel.trim().parse::<usize>() {
        Ok(n) if (1..=Preset::ALL.len()).contains(&n) => {
            cfg.preset = Preset::ALL[n - 1];
            println!("프리셋이 {} 로 설정되었습니다.", cfg.preset.label());
        }
        _ => println!("잘못된 입력이므로 변경하지 않습니다."),
    }
    Ok(())
}

/// 설계 파라미터 수정 메뉴를 처리한다. 수정값은 현재 세션 입력에만 반영된다.
pub fn handle_edit_parameters(input: &mut DesignInput) -> Result<(), AppError> {
    loop {
        println!("\n-- 설계 파라미터 --");
        let g = &input.geometry;
        println!(" 1) 본체 직경 D        = {} m", g.body_diameter_m);
        println!(" 2) 입구 너비 a        = {} m", g.inlet_width_m);
        println!(" 3) 입구 높이 b        = {} m", g.inlet_height_m);
        println!(" 4) 원통부 높이 H      = {} m", g.body_length_m);
        println!(" 5) 원추부 높이 h      = {} m", g.cone_length_m);
        println!(" 6) 먼지 배출구 직경 B = {} m", g.dust_outlet_diameter_m);
        println!(" 7) 내통 침입 깊이 S   = {} m", g.vortex_finder_depth_m);
        println!(" 8) 내통 직경 De       = {} m", g.gas_exit_diameter_m);
        println!(" 9) 유입 속도 V        = {} m/s", input.gas.inlet_velocity_m_per_s);
        println!("10) 총 처리 유량 Q     = {:.4} m³/s", input.total_flow_m3_per_s);
        println!("11) 가스 점도 μ        = {:.3e} kg/m·s", input.gas.viscosity_pa_s);
        println!("12) 가스 밀도 ρg       = {} kg/m³", input.gas.density_kg_per_m3);
        println!("13) 입자 밀도 ρp       = {} kg/m³", input.particle.density_kg_per_m3);
        println!("14) 압력손실 계수 K    = {}", input.loss_coefficient);
        println!("15) 목표 입경 dp       = {} μm", input.target_diameter_um);
        println!(
            "16) 직렬 단수          = {}",
            input.arrangement.series_count()
        );
        println!(
            "17) 병렬 대수          = {}",
            input.arrangement.parallel_count()
        );
        println!("18) 효율 모델          = {}", input.model.label());
        let sel = read_line("수정할 번호(끝내려면 엔터): ")?;
        let sel = sel.trim();
        if sel.is_empty() {
            return Ok(());
        }
        let Ok(n) = sel.parse::<u32>() else {
            println!("잘못된 입력입니다.");
            continue;
        };
        match n {
            1..=15 => {
                let v = read_f64("새 값: ")?;
                let g = &mut input.geometry;
                match n {
                    1 => g.body_diameter_m = v,
                    2 => g.inlet_width_m = v,
                    3 => g.inlet_height_m = v,
                    4 => g.body_length_m = v,
                    5 => g.cone_length_m = v,
                    6 => g.dust_outlet_diameter_m = v,
                    7 => g.vortex_finder_depth_m = v,
                    8 => g.gas_exit_diameter_m = v,
                    9 => input.gas.inlet_velocity_m_per_s = v,
                    10 => input.total_flow_m3_per_s = v,
                    11 => input.gas.viscosity_pa_s = v,
                    12 => input.gas.density_kg_per_m3 = v,
                    13 => input.particle.density_kg_per_m3 = v,
                    14 => input.loss_coefficient = v,
                    _ => input.target_diameter_um = v,
                }
            }
            16 | 17 => {
                let count = read_u32("새 값: ")?;
                let (series, parallel) = if n == 16 {
                    (count, input.arrangement.parallel_count())
                } else {
                    (input.arrangement.series_count(), count)
                };
                input.arrangement = Arrangement::from_counts(series, parallel);
            }
            18 => {
                println!("1) Lapple  2) 시멘트 먼지 최적화  3) Stairmand");
                let m = read_line("선택: ")?;
                let model = match m.trim() {
                    "1" => Some(EfficiencyModel::Lapple),
                    "2" => Some(EfficiencyModel::CementOptimized),
                    "3" => Some(EfficiencyModel::Stairmand),
                    _ => None,
                };
                match model {
                    Some(model) => input.model = model,
                    None => println!("잘못된 입력이므로 변경하지 않습니다."),
                }
            }
            _ => println!("지원하지 않는 번호입니다."),
        }
    }
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion() -> Result<(), AppError> {
    println!("\n-- 단위 변환 --");
    println!("물리량: length, velocity, flow, pressure, viscosity, density");
    let kind = loop {
        let sel = read_line("물리량 입력: ")?;
        match conversion::parse_quantity(&sel) {
            Ok(kind) => break kind,
            Err(e) => println!("{e}"),
        }
    };
    let value = read_f64("값 입력: ")?;
    let from_unit = read_line("입력 단위(ex: m3/min, m/s, mm): ")?;
    let to_unit = read_line("변환 단위(ex: m3/s, ft/min, in): ")?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!("변환 결과: {result} {}", to_unit.trim());
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!("현재 압력 표시 단위: {:?}", cfg.default_units.pressure);
    println!("현재 유량 표시 단위: {:?}", cfg.default_units.flow_rate);
    println!("1) 압력 단위 변경  2) 유량 단위 변경  3) 유효 회전수 기본값 변경");
    let sel = read_line("변경할 번호(취소하려면 엔터): ")?;
    match sel.trim() {
        "" => {}
        "1" => {
            println!("1=Pa 2=kPa 3=mmH2O 4=inH2O 5=mbar");
            let u = read_line("선택: ")?;
            cfg.default_units.pressure = match u.trim() {
                "1" => PressureUnit::Pascal,
                "2" => PressureUnit::KiloPascal,
                "3" => PressureUnit::MmH2O,
                "4" => PressureUnit::InH2O,
                "5" => PressureUnit::MilliBar,
                _ => {
                    println!("잘못된 입력이므로 변경하지 않습니다.");
                    cfg.default_units.pressure
                }
            };
        }
        "2" => {
            println!("1=m3/s 2=m3/min 3=m3/h 4=CFM");
            let u = read_line("선택: ")?;
            cfg.default_units.flow_rate = match u.trim() {
                "1" => FlowRateUnit::CubicMeterPerSecond,
                "2" => FlowRateUnit::CubicMeterPerMinute,
                "3" => FlowRateUnit::CubicMeterPerHour,
                "4" => FlowRateUnit::CubicFootPerMinute,
                _ => {
                    println!("잘못된 입력이므로 변경하지 않습니다.");
                    cfg.default_units.flow_rate
                }
            };
        }
        "3" => {
            cfg.effective_turns_fallback = read_f64("유효 회전수 기본값: ")?;
        }
        _ => println!("잘못된 입력이므로 변경하지 않습니다."),
    }
    Ok(())
}

fn pressure_label(unit: PressureUnit) -> &'static str {
    match unit {
        PressureUnit::Pascal => "Pa",
        PressureUnit::KiloPascal => "kPa",
        PressureUnit::Bar => "bar",
        PressureUnit::MilliBar => "mbar",
        PressureUnit::MmH2O => "mmH2O",
        PressureUnit::InH2O => "inH2O",
        PressureUnit::Psi => "psi",
    }
}

fn flow_label(unit: FlowRateUnit) -> &'static str {
    match unit {
        FlowRateUnit::CubicMeterPerSecond => "m³/s",
        FlowRateUnit::CubicMeterPerMinute => "m³/min",
        FlowRateUnit::CubicMeterPerHour => "m³/h",
        FlowRateUnit::LiterPerSecond => "L/s",
        FlowRateUnit::CubicFootPerMinute => "CFM",
    }
}

/// 성능 계산 결과를 출력한다.
pub fn print_report(report: &PerformanceReport, cfg: &Config) {
    let units = &cfg.default_units;
    println!("\n-- 성능 지표 ({}, {}) --", report.model.label(), report.arrangement.describe());
    println!("유효 회전수 Ne: {:.3}", report.effective_turns);
    if report.cut_size_um.is_finite() {
        println!("Cut-size Diameter (dp₅₀): {:.2} μm", report.cut_size_um);
    } else {
        println!("Cut-size Diameter (dp₅₀): 정의되지 않음 (집진 불가)");
    }
    println!(
        "단일 사이클론 효율 ({} μm): {:.2}%",
        report.target_diameter_um,
        report.target_single_efficiency * 100.0
    );
    println!(
        "멀티사이클론 누적 효율 ({} μm): {:.2}%",
        report.target_diameter_um,
        report.target_system_efficiency * 100.0
    );
    let dp = convert_pressure(report.pressure_loss_pa, PressureUnit::Pascal, units.pressure);
    println!("예상 압력 손실: {:.1} {}", dp, pressure_label(units.pressure));
    let q = convert_flow_rate(
        report.single_unit_flow_m3_per_s,
        FlowRateUnit::CubicMeterPerSecond,
        units.flow_rate,
    );
    println!("단일 사이클론 유량: {:.4} {}", q, flow_label(units.flow_rate));
    println!("필요 사이클론 수: {}", report.required_units);
    println!("Reynolds 수: {:.3e}", report.reynolds_number);

    println!("\n-- 주요 설계 비율 --");
    for r in &report.design_ratios {
        let mark = if r.in_range() { "" } else { " (!)" };
        println!(
            "{:<5} {:>7.3}  권장 {:.1}-{:.1}{mark}",
            r.label, r.value, r.recommended_min, r.recommended_max
        );
    }

    println!("\n-- 입자 크기별 집진 효율 --");
    println!(
        "{:<10} {:>7} {:>10} {:>10} {:>6} {:>12}",
        "size range", "dp avg", "dpc/dp", "Nj", "Mj%", "% collected"
    );
    for b in &report.distribution.bins {
        println!(
            "{:<10} {:>7} {:>10.4} {:>10.6} {:>6} {:>12.6}",
            b.size_range,
            b.dp_avg_um,
            b.dpc_over_dp,
            b.nj,
            b.mass_percent,
            b.collected_fraction * 100.0
        );
    }
    println!("Overall Effic = {:.2}%", report.overall_single_efficiency * 100.0);
    println!("멀티 효율 = {:.6}%", report.overall_system_efficiency * 100.0);

    for c in &report.caveats {
        println!("주의: {c}");
    }
    for w in &report.warnings {
        println!("경고: {w}");
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    let n = io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    if n == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "입력이 종료되었습니다.",
        )));
    }
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(v),
            _ => println!("숫자를 입력하세요."),
        }
    }
}

fn read_u32(prompt: &str) -> Result<u32, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("0 이상의 정수를 입력하세요."),
        }
    }
}
