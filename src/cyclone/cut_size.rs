use std::f64::consts::PI;

use super::efficiency::EfficiencyModel;

/// 절단 입경을 정의할 수 없는 경우의 값. 어떤 입경도 포집하지 못한다는 뜻이다.
pub const UNDEFINED_CUT_SIZE: f64 = f64::INFINITY;

/// Lapple 형 절단 입경 dpc [m].
///
/// dpc = sqrt( 9·μ·W / (2π·Ne·V_in·(ρ_p - ρ_g)) )
///
/// 밀도차, 유효 회전수, 유입 속도 중 하나라도 0 이하이면 [`UNDEFINED_CUT_SIZE`]를 돌려준다.
/// 점도나 입구 너비가 음수이면 근호 안을 0으로 보아 0을 돌려준다.
pub fn cut_size(
    inlet_width_m: f64,
    viscosity_pa_s: f64,
    inlet_velocity_m_per_s: f64,
    effective_turns: f64,
    particle_density_kg_per_m3: f64,
    gas_density_kg_per_m3: f64,
) -> f64 {
    let density_difference = particle_density_kg_per_m3 - gas_density_kg_per_m3;
    if density_difference <= 0.0 || effective_turns <= 0.0 || inlet_velocity_m_per_s <= 0.0 {
        return UNDEFINED_CUT_SIZE;
    }
    let numerator = 9.0 * viscosity_pa_s * inlet_width_m;
    let denominator = 2.0 * PI * effective_turns * inlet_velocity_m_per_s * density_difference;
    (numerator / denominator).max(0.0).sqrt()
}

/// 모델 보정 계수를 곱한 절단 입경 [m]. 무한대는 그대로 유지된다.
pub fn cut_size_for_model(
    model: EfficiencyModel,
    inlet_width_m: f64,
    viscosity_pa_s: f64,
    inlet_velocity_m_per_s: f64,
    effective_turns: f64,
    particle_density_kg_per_m3: f64,
    gas_density_kg_per_m3: f64,
) -> f64 {
    cut_size(
        inlet_width_m,
        viscosity_pa_s,
        inlet_velocity_m_per_s,
        effective_turns,
        particle_density_kg_per_m3,
        gas_density_kg_per_m3,
    ) * model.cut_size_factor()
}

/// 집진이 불가능한(정의되지 않은) 절단 입경인지 확인한다.
pub fn is_undefined_cut_size(cut_size: f64) -> bool {
    cut_size.is_infinite()
}
