//! 설계 기준별 기본값 표. 분기 없이 데이터 행으로만 관리한다.

use serde::{Deserialize, Serialize};

use crate::cyclone::{
    Arrangement, CycloneGeometry, DesignInput, EfficiencyModel, GasProperties,
    ParticleProperties, ParticleSizeDistribution, DEFAULT_EFFECTIVE_TURNS_FALLBACK,
};

/// 이름 붙은 설계 프리셋.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    /// 표준 공기 조건 Lapple 설계
    Epa,
    /// 시멘트 소성로 배출가스 멀티사이클론
    CementKiln,
    /// 화력발전소 비산재(fly ash)
    PowerPlant,
    /// 사용자 지정. 시멘트 소성로 값에서 출발한다.
    Custom,
}

/// 프리셋 한 행.
#[derive(Debug, Clone, Copy)]
pub struct PresetRow {
    pub preset: Preset,
    pub label: &'static str,
    pub geometry: CycloneGeometry,
    pub gas: GasProperties,
    pub particle: ParticleProperties,
    pub total_flow_m3_per_s: f64,
    pub loss_coefficient: f64,
    pub model: EfficiencyModel,
    pub target_diameter_um: f64,
    /// (구간 표기, 대표 입경 μm, 질량 분율 %)
    pub distribution: &'static [(&'static str, f64, f64)],
}

const KILN_DISTRIBUTION: &[(&str, f64, f64)] = &[
    ("1~5", 2.5, 5.0),
    ("5~10", 7.5, 10.0),
    ("10~20", 15.0, 15.0),
    ("20~40", 30.0, 20.0),
    ("40~60", 50.0, 20.0),
    ("60~80", 70.0, 15.0),
    ("80~100", 90.0, 10.0),
    ("100+", 100.0, 5.0),
];

const KILN_GEOMETRY: CycloneGeometry = CycloneGeometry {
    body_diameter_m: 0.04,
    inlet_width_m: 0.02,
    inlet_height_m: 0.04,
    body_length_m: 0.16,
    cone_length_m: 0.16,
    dust_outlet_diameter_m: 0.02,
    vortex_finder_depth_m: 0.05,
    gas_exit_diameter_m: 0.02,
};

const KILN_GAS: GasProperties = GasProperties {
    viscosity_pa_s: 0.10728 / 3600.0,
    density_kg_per_m3: 0.5975,
    inlet_velocity_m_per_s: 15.083,
};

pub static PRESETS: [PresetRow; 4] = [
    PresetRow {
        preset: Preset::Epa,
        label: "EPA 표준 공기",
        geometry: CycloneGeometry {
            body_diameter_m: 0.3,
            inlet_width_m: 0.09,
            inlet_height_m: 0.15,
            body_length_m: 0.6,
            cone_length_m: 0.6,
            dust_outlet_diameter_m: 0.075,
            vortex_finder_depth_m: 0.12,
            gas_exit_diameter_m: 0.15,
        },
        gas: GasProperties {
            viscosity_pa_s: 1.81e-5,
            density_kg_per_m3: 1.225,
            inlet_velocity_m_per_s: 18.3,
        },
        particle: ParticleProperties {
            density_kg_per_m3: 1500.0,
        },
        total_flow_m3_per_s: 1.0,
        loss_coefficient: 16.0,
        model: EfficiencyModel::Lapple,
        target_diameter_um: 2.5,
        distribution: KILN_DISTRIBUTION,
    },
    PresetRow {
        preset: Preset::CementKiln,
        label: "시멘트 소성로",
        geometry: KILN_GEOMETRY,
        gas: KILN_GAS,
        particle: ParticleProperties {
            density_kg_per_m3: 480.0,
        },
        total_flow_m3_per_s: 625.0 / 60.0,
        loss_coefficient: 16.0,
        model: EfficiencyModel::Lapple,
        target_diameter_um: 2.5,
        distribution: KILN_DISTRIBUTION,
    },
    PresetRow {
        preset: Preset::PowerPlant,
        label: "화력발전소 비산재",
        geometry: CycloneGeometry {
            body_diameter_m: 0.25,
            inlet_width_m: 0.1,
            inlet_height_m: 0.125,
            body_length_m: 0.75,
            cone_length_m: 0.5,
            dust_outlet_diameter_m: 0.075,
            vortex_finder_depth_m: 0.15,
            gas_exit_diameter_m: 0.125,
        },
        gas: GasProperties {
            viscosity_pa_s: 2.3e-5,
            density_kg_per_m3: 0.85,
            inlet_velocity_m_per_s: 20.0,
        },
        particle: ParticleProperties {
            density_kg_per_m3: 2200.0,
        },
        total_flow_m3_per_s: 25.0,
        loss_coefficient: 8.0,
        model: EfficiencyModel::Stairmand,
        target_diameter_um: 10.0,
        distribution: KILN_DISTRIBUTION,
    },
    PresetRow {
        preset: Preset::Custom,
        label: "사용자 지정",
        geometry: KILN_GEOMETRY,
        gas: KILN_GAS,
        particle: ParticleProperties {
            density_kg_per_m3: 480.0,
        },
        total_flow_m3_per_s: 625.0 / 60.0,
        loss_coefficient: 16.0,
        model: EfficiencyModel::Lapple,
        target_diameter_um: 2.5,
        distribution: KILN_DISTRIBUTION,
    },
];

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Epa,
        Preset::CementKiln,
        Preset::PowerPlant,
        Preset::Custom,
    ];

    pub fn row(self) -> &'static PresetRow {
        // PRESETS는 Preset::ALL과 같은 순서로 모든 프리셋을 담는다.
        let idx = match self {
            Preset::Epa => 0,
            Preset::CementKiln => 1,
            Preset::PowerPlant => 2,
            Preset::Custom => 3,
        };
        &PRESETS[idx]
    }

    pub fn label(self) -> &'static str {
        self.row().label
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "epa" => Some(Preset::Epa),
            "cement" | "cement-kiln" | "cement_kiln" | "kiln" => Some(Preset::CementKiln),
            "power" | "power-plant" | "power_plant" => Some(Preset::PowerPlant),
            "custom" => Some(Preset::Custom),
            _ => None,
        }
    }

    /// 프리셋 값으로 단일 사이클론 계산 입력을 만든다.
    pub fn design_input(self) -> DesignInput {
        let row = self.row();
        DesignInput {
            geometry: row.geometry,
            gas: row.gas,
            particle: row.particle,
            total_flow_m3_per_s: row.total_flow_m3_per_s,
            model: row.model,
            loss_coefficient: row.loss_coefficient,
            arrangement: Arrangement::Single,
            target_diameter_um: row.target_diameter_um,
            distribution: ParticleSizeDistribution::from_rows(row.distribution),
            effective_turns_fallback: DEFAULT_EFFECTIVE_TURNS_FALLBACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_enum() {
        for preset in Preset::ALL {
            assert_eq!(preset.row().preset, preset);
        }
    }

    #[test]
    fn custom_starts_from_kiln_values() {
        let custom = Preset::Custom.design_input();
        let kiln = Preset::CementKiln.design_input();
        assert_eq!(custom, kiln);
    }

    #[test]
    fn names_parse() {
        assert_eq!(Preset::parse("cement-kiln"), Some(Preset::CementKiln));
        assert_eq!(Preset::parse("EPA"), Some(Preset::Epa));
        assert_eq!(Preset::parse("refinery"), None);
    }
}
