use serde::{Deserialize, Serialize};

/// 처리 가스 물성과 유입 조건.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasProperties {
    /// 점도 μ [kg/(m·s)]
    pub viscosity_pa_s: f64,
    /// 밀도 ρ_g [kg/m³]
    pub density_kg_per_m3: f64,
    /// 유입 속도 V_in [m/s]
    pub inlet_velocity_m_per_s: f64,
}

/// 분진 입자 물성.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleProperties {
    /// 입자 밀도 ρ_p [kg/m³]
    pub density_kg_per_m3: f64,
}

impl GasProperties {
    /// 물성 입력 경고. 값은 그대로 계산에 사용한다.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.viscosity_pa_s <= 0.0 {
            warnings.push(format!(
                "가스 점도 {:.3e} kg/m·s 가 0 이하입니다.",
                self.viscosity_pa_s
            ));
        }
        if self.density_kg_per_m3 <= 0.0 {
            warnings.push(format!(
                "가스 밀도 {:.4} kg/m³ 가 0 이하입니다.",
                self.density_kg_per_m3
            ));
        }
        if self.inlet_velocity_m_per_s <= 0.0 {
            warnings.push(format!(
                "유입 속도 {:.3} m/s 가 0 이하입니다. 집진이 일어나지 않습니다.",
                self.inlet_velocity_m_per_s
            ));
        }
        warnings
    }
}

impl ParticleProperties {
    /// ρ_p - ρ_g [kg/m³]
    pub fn density_difference(&self, gas: &GasProperties) -> f64 {
        self.density_kg_per_m3 - gas.density_kg_per_m3
    }
}
