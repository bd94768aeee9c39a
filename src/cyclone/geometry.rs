use serde::{Deserialize, Serialize};

/// 단일 사이클론의 주요 치수. 모든 길이는 m 단위이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CycloneGeometry {
    /// 본체 직경 D
    pub body_diameter_m: f64,
    /// 입구 너비 a (W)
    pub inlet_width_m: f64,
    /// 입구 높이 b (H_in)
    pub inlet_height_m: f64,
    /// 원통부 높이 H
    pub body_length_m: f64,
    /// 원추부 높이 h
    pub cone_length_m: f64,
    /// 먼지 배출구 직경 B
    pub dust_outlet_diameter_m: f64,
    /// 내통(vortex finder) 침입 깊이 S
    pub vortex_finder_depth_m: f64,
    /// 내통 직경 De
    pub gas_exit_diameter_m: f64,
}

/// D 대비 치수 비율과 권장 범위.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignRatio {
    pub label: &'static str,
    pub value: f64,
    pub recommended_min: f64,
    pub recommended_max: f64,
}

impl DesignRatio {
    pub fn in_range(&self) -> bool {
        self.value >= self.recommended_min && self.value <= self.recommended_max
    }
}

impl CycloneGeometry {
    /// 입구 단면적 A_in = a·b [m²]
    pub fn inlet_area_m2(&self) -> f64 {
        self.inlet_width_m * self.inlet_height_m
    }

    /// 단일 사이클론 처리 유량 Q = V_in·A_in [m³/s]
    pub fn single_unit_flow_m3_per_s(&self, inlet_velocity_m_per_s: f64) -> f64 {
        inlet_velocity_m_per_s * self.inlet_area_m2()
    }

    /// D 대비 설계 비율 7종을 반환한다. D가 0 이하이면 비율을 정의할 수 없어 빈 목록이다.
    pub fn design_ratios(&self) -> Vec<DesignRatio> {
        let d = self.body_diameter_m;
        if d <= 0.0 {
            return Vec::new();
        }
        let ratio = |label, length: f64, min, max| DesignRatio {
            label,
            value: length / d,
            recommended_min: min,
            recommended_max: max,
        };
        vec![
            ratio("a/D", self.inlet_width_m, 0.3, 0.5),
            ratio("b/D", self.inlet_height_m, 0.3, 0.7),
            ratio("S/D", self.vortex_finder_depth_m, 0.3, 0.8),
            ratio("De/D", self.gas_exit_diameter_m, 0.4, 0.6),
            ratio("H/D", self.body_length_m, 2.0, 4.0),
            ratio("h/D", self.cone_length_m, 1.5, 3.0),
            ratio("B/D", self.dust_outlet_diameter_m, 0.2, 0.4),
        ]
    }

    /// 치수 경고 목록. 비율 이탈과 0 이하 길이는 경고일 뿐 계산을 막지 않는다.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let lengths = [
            ("D", self.body_diameter_m),
            ("a", self.inlet_width_m),
            ("b", self.inlet_height_m),
            ("H", self.body_length_m),
            ("h", self.cone_length_m),
            ("B", self.dust_outlet_diameter_m),
            ("S", self.vortex_finder_depth_m),
            ("De", self.gas_exit_diameter_m),
        ];
        for (name, value) in lengths {
            if value <= 0.0 {
                warnings.push(format!("치수 {name} = {value} m 가 0 이하입니다."));
            }
        }
        for r in self.design_ratios() {
            if !r.in_range() {
                warnings.push(format!(
                    "{} = {:.3} 이(가) 권장 범위 {:.1}-{:.1} 을 벗어났습니다.",
                    r.label, r.value, r.recommended_min, r.recommended_max
                ));
            }
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CycloneGeometry {
        CycloneGeometry {
            body_diameter_m: 0.3,
            inlet_width_m: 0.09,
            inlet_height_m: 0.15,
            body_length_m: 0.6,
            cone_length_m: 0.6,
            dust_outlet_diameter_m: 0.075,
            vortex_finder_depth_m: 0.12,
            gas_exit_diameter_m: 0.15,
        }
    }

    #[test]
    fn ratios_within_range_produce_no_warning() {
        let g = sample();
        assert_eq!(g.design_ratios().len(), 7);
        assert!(g.warnings().is_empty(), "{:?}", g.warnings());
    }

    #[test]
    fn out_of_range_ratio_is_only_a_warning() {
        let g = CycloneGeometry {
            inlet_height_m: 0.3,
            ..sample()
        };
        let warnings = g.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("b/D"));
    }

    #[test]
    fn zero_diameter_has_no_ratios() {
        let g = CycloneGeometry {
            body_diameter_m: 0.0,
            ..sample()
        };
        assert!(g.design_ratios().is_empty());
        assert!(g.warnings().iter().any(|w| w.contains("치수 D")));
    }

    #[test]
    fn inlet_area_and_flow() {
        let g = sample();
        assert!((g.inlet_area_m2() - 0.0135).abs() < 1e-12);
        assert!((g.single_unit_flow_m3_per_s(20.0) - 0.27).abs() < 1e-12);
    }
}
