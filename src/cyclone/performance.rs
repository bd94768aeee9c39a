use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::compounding::{required_unit_count, Arrangement};
use super::cut_size::cut_size_for_model;
use super::distribution::{aggregate_efficiency, DistributionResult, ParticleSizeDistribution};
use super::effective_turns::effective_turns_or;
use super::efficiency::EfficiencyModel;
use super::geometry::{CycloneGeometry, DesignRatio};
use super::pressure_loss::pressure_loss;
use super::properties::{GasProperties, ParticleProperties};
use crate::units::meters_to_micrometers;

/// 성능 계산 한 번에 필요한 모든 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignInput {
    pub geometry: CycloneGeometry,
    pub gas: GasProperties,
    pub particle: ParticleProperties,
    /// 총 처리 유량 Q_total [m³/s]
    pub total_flow_m3_per_s: f64,
    pub model: EfficiencyModel,
    /// 압력손실 계수 K
    pub loss_coefficient: f64,
    pub arrangement: Arrangement,
    /// 성능 지표를 표시할 목표 입경 [μm]
    pub target_diameter_um: f64,
    pub distribution: ParticleSizeDistribution,
    /// 입구 높이가 0 이하일 때 쓰는 유효 회전수
    pub effective_turns_fallback: f64,
}

/// 계산 결과와 함께 알려야 하는 모델상의 한계.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caveat {
    /// 모델 전용 절단 입경 식이 없어 Lapple 식을 빌려 썼다.
    BorrowedCutSizeFormula(EfficiencyModel),
    /// 분포 합산은 선택 모델과 무관하게 Lapple Nj 식을 쓴다.
    DistributionUsesLapple(EfficiencyModel),
}

impl std::fmt::Display for Caveat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Caveat::BorrowedCutSizeFormula(m) => write!(
                f,
                "{} 모델은 전용 절단 입경 식이 없어 Lapple 식을 사용했습니다. 결과 해석에 유의하세요.",
                m.label()
            ),
            Caveat::DistributionUsesLapple(m) => write!(
                f,
                "입경 분포 합산은 {} 모델이 아닌 Lapple Nj 식으로 계산됩니다.",
                m.label()
            ),
        }
    }
}

/// 성능 계산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceReport {
    pub model: EfficiencyModel,
    pub arrangement: Arrangement,
    /// 유효 회전수 Ne
    pub effective_turns: f64,
    /// 절단 입경 dpc [μm]. 정의되지 않으면 무한대.
    pub cut_size_um: f64,
    pub target_diameter_um: f64,
    /// 목표 입경 단일 사이클론 효율(소수)
    pub target_single_efficiency: f64,
    /// 목표 입경 배치 전체 효율(소수)
    pub target_system_efficiency: f64,
    pub distribution: DistributionResult,
    /// 분포 기준 단일 사이클론 전체 효율(소수, 자르지 않음)
    pub overall_single_efficiency: f64,
    /// 분포 기준 배치 전체 효율(소수)
    pub overall_system_efficiency: f64,
    /// 압력손실 [Pa]
    pub pressure_loss_pa: f64,
    /// 유입 레이놀즈 수 ρ_g·V_in·D/μ
    pub reynolds_number: f64,
    pub inlet_area_m2: f64,
    pub single_unit_flow_m3_per_s: f64,
    /// 총 유량 처리에 필요한 병렬 사이클론 수
    pub required_units: u32,
    pub design_ratios: Vec<DesignRatio>,
    pub warnings: Vec<String>,
    pub caveats: Vec<Caveat>,
}

/// 효율 곡선의 한 점.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub diameter_um: f64,
    pub single_efficiency: f64,
    pub system_efficiency: f64,
}

/// 곡선 기본 샘플 수.
pub const DEFAULT_CURVE_POINTS: usize = 100;

impl DesignInput {
    pub fn effective_turns(&self) -> f64 {
        effective_turns_or(
            self.geometry.inlet_height_m,
            self.geometry.body_length_m,
            self.geometry.cone_length_m,
            self.effective_turns_fallback,
        )
    }

    /// 모델 보정이 반영된 절단 입경 [μm]. 식은 m 단위로 계산하고 여기서 μm로 바꾼다.
    pub fn cut_size_um(&self) -> f64 {
        let dpc_m = cut_size_for_model(
            self.model,
            self.geometry.inlet_width_m,
            self.gas.viscosity_pa_s,
            self.gas.inlet_velocity_m_per_s,
            self.effective_turns(),
            self.particle.density_kg_per_m3,
            self.gas.density_kg_per_m3,
        );
        meters_to_micrometers(dpc_m)
    }

    /// 총 유량을 처리하는 데 필요한 병렬 사이클론 수.
    pub fn required_units(&self) -> u32 {
        let single_unit_flow = self
            .geometry
            .single_unit_flow_m3_per_s(self.gas.inlet_velocity_m_per_s);
        required_unit_count(self.total_flow_m3_per_s, single_unit_flow)
    }

    /// 유입 레이놀즈 수. 점도가 0 이하이면 0.
    pub fn reynolds_number(&self) -> f64 {
        if self.gas.viscosity_pa_s <= 0.0 {
            return 0.0;
        }
        self.gas.density_kg_per_m3
            * self.gas.inlet_velocity_m_per_s
            * self.geometry.body_diameter_m
            / self.gas.viscosity_pa_s
    }
}

/// 유효 회전수부터 압력손실까지 전체 계산을 수행한다. 어떤 유한 입력에도 실패하지 않는다.
pub fn evaluate(input: &DesignInput) -> PerformanceReport {
    let effective_turns = input.effective_turns();
    let cut_size_um = input.cut_size_um();
    debug!(effective_turns, cut_size_um, model = ?input.model, "cyclone cut-size");

    let mut warnings = Vec::new();
    let mut caveats = Vec::new();

    warnings.extend(input.geometry.warnings());
    if input.geometry.inlet_height_m <= 0.0 {
        warnings.push(format!(
            "입구 높이가 0 이하이므로 유효 회전수 기본값 {:.1} 을 사용합니다.",
            input.effective_turns_fallback
        ));
    }
    warnings.extend(input.gas.warnings());
    if input.particle.density_difference(&input.gas) <= 0.0 {
        warnings.push(
            "입자 밀도가 가스 밀도 이하입니다. 절단 입경을 정의할 수 없어 집진 효율은 0 입니다."
                .to_string(),
        );
    }
    warnings.extend(input.arrangement.warnings());

    if !input.model.has_dedicated_cut_size_formula() {
        caveats.push(Caveat::BorrowedCutSizeFormula(input.model));
    }
    if input.model != EfficiencyModel::Lapple && !input.distribution.bins.is_empty() {
        caveats.push(Caveat::DistributionUsesLapple(input.model));
    }

    let target_single_efficiency = input.model.efficiency(input.target_diameter_um, cut_size_um);
    let target_system_efficiency = input.arrangement.system_efficiency(target_single_efficiency);

    let distribution = aggregate_efficiency(&input.distribution, cut_size_um);
    warnings.extend(distribution.warnings.iter().cloned());
    let overall_single_efficiency = distribution.overall_efficiency;
    let overall_system_efficiency = input
        .arrangement
        .system_efficiency(overall_single_efficiency);

    let pressure_loss_pa = pressure_loss(
        input.gas.density_kg_per_m3,
        input.gas.inlet_velocity_m_per_s,
        input.loss_coefficient,
        input.arrangement.series_count(),
    );

    let single_unit_flow = input
        .geometry
        .single_unit_flow_m3_per_s(input.gas.inlet_velocity_m_per_s);
    let required_units = input.required_units();
    if input.arrangement.parallel_count() < required_units {
        warnings.push(format!(
            "총 유량 {:.3} m³/s 처리에는 병렬 {} 대가 필요하지만 {} 대로 설정되어 있습니다.",
            input.total_flow_m3_per_s,
            required_units,
            input.arrangement.parallel_count()
        ));
    }

    for w in &warnings {
        warn!("{w}");
    }
    for c in &caveats {
        warn!("{c}");
    }

    PerformanceReport {
        model: input.model,
        arrangement: input.arrangement,
        effective_turns,
        cut_size_um,
        target_diameter_um: input.target_diameter_um,
        target_single_efficiency,
        target_system_efficiency,
        distribution,
        overall_single_efficiency,
        overall_system_efficiency,
        pressure_loss_pa,
        reynolds_number: input.reynolds_number(),
        inlet_area_m2: input.geometry.inlet_area_m2(),
        single_unit_flow_m3_per_s: single_unit_flow,
        required_units,
        design_ratios: input.geometry.design_ratios(),
        warnings,
        caveats,
    }
}

/// min~max 구간을 양 끝 포함 `points`개로 등분한다. `points < 2`이면 min 한 점.
pub fn sample_diameters(min_um: f64, max_um: f64, points: usize) -> Vec<f64> {
    if points < 2 {
        return vec![min_um];
    }
    let step = (max_um - min_um) / (points - 1) as f64;
    (0..points)
        .map(|i| {
            if i == points - 1 {
                max_um
            } else {
                min_um + step * i as f64
            }
        })
        .collect()
}

/// 입경별 단일/배치 효율 곡선.
pub fn efficiency_curve(
    input: &DesignInput,
    min_um: f64,
    max_um: f64,
    points: usize,
) -> Vec<CurvePoint> {
    let cut_size_um = input.cut_size_um();
    let diameters = sample_diameters(min_um, max_um, points);
    input
        .model
        .efficiencies(&diameters, cut_size_um)
        .zip(&diameters)
        .map(|(single, &diameter_um)| CurvePoint {
            diameter_um,
            single_efficiency: single,
            system_efficiency: input.arrangement.system_efficiency(single),
        })
        .collect()
}
