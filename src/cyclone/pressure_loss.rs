/// 사이클론 압력손실 ΔP = 0.5·ρ_g·V_in²·K·N_series [Pa].
///
/// K는 효율 모델이나 설계 기준(프리셋)에 따라 달라지므로 항상 호출자가 넘긴다.
/// 직렬 단수만 손실을 선형으로 늘리며, 병렬 대수는 손실에 영향을 주지 않는다.
/// `series_count`가 0이면 1단으로 본다.
pub fn pressure_loss(
    gas_density_kg_per_m3: f64,
    inlet_velocity_m_per_s: f64,
    loss_coefficient: f64,
    series_count: u32,
) -> f64 {
    let stages = f64::from(series_count.max(1));
    0.5 * gas_density_kg_per_m3
        * inlet_velocity_m_per_s
        * inlet_velocity_m_per_s
        * loss_coefficient
        * stages
}

/// 단일 사이클론(1단) 압력손실 [Pa].
pub fn single_unit_pressure_loss(
    gas_density_kg_per_m3: f64,
    inlet_velocity_m_per_s: f64,
    loss_coefficient: f64,
) -> f64 {
    pressure_loss(gas_density_kg_per_m3, inlet_velocity_m_per_s, loss_coefficient, 1)
}
