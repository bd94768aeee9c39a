use serde::{Deserialize, Serialize};

/// 효율 계산 모델. 모델별 보정 계수와 곡선 상수는 모두 여기서만 정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EfficiencyModel {
    /// Lapple 모델: η = 1/(1+(dpc/dp)²)
    Lapple,
    /// 시멘트 먼지 최적화 모델: 절단 입경 ×0.8, η = 1 - exp(-2.5·(dp/dpc)²)
    CementOptimized,
    /// Stairmand 모델: η = 1 - exp(-2·(dp/dpc)²). 전용 절단 입경 식이 없어 Lapple 식을 빌려 쓴다.
    Stairmand,
}

/// 입경별 효율 곡선 형태.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EfficiencyCurve {
    /// η = 1/(1+(dpc/dp)²)
    Lapple,
    /// η = 1 - exp(-k·(dp/dpc)²)
    Exponential { k: f64 },
}

impl EfficiencyModel {
    pub const ALL: [EfficiencyModel; 3] = [
        EfficiencyModel::Lapple,
        EfficiencyModel::CementOptimized,
        EfficiencyModel::Stairmand,
    ];

    /// 절단 입경에 곱하는 보정 계수.
    pub fn cut_size_factor(self) -> f64 {
        match self {
            EfficiencyModel::Lapple => 1.0,
            EfficiencyModel::CementOptimized => 0.8,
            EfficiencyModel::Stairmand => 1.0,
        }
    }

    pub fn curve(self) -> EfficiencyCurve {
        match self {
            EfficiencyModel::Lapple => EfficiencyCurve::Lapple,
            EfficiencyModel::CementOptimized => EfficiencyCurve::Exponential { k: 2.5 },
            EfficiencyModel::Stairmand => EfficiencyCurve::Exponential { k: 2.0 },
        }
    }

    /// 모델 기본 압력손실 계수 K. 프리셋이나 사용자가 별도로 지정할 수 있다.
    pub fn default_loss_coefficient(self) -> f64 {
        match self {
            EfficiencyModel::Lapple => 16.0,
            EfficiencyModel::CementOptimized => 10.0,
            EfficiencyModel::Stairmand => 8.0,
        }
    }

    /// 모델 고유의 절단 입경 식이 있는지 여부.
    pub fn has_dedicated_cut_size_formula(self) -> bool {
        !matches!(self, EfficiencyModel::Stairmand)
    }

    pub fn label(self) -> &'static str {
        match self {
            EfficiencyModel::Lapple => "Lapple",
            EfficiencyModel::CementOptimized => "시멘트 먼지 최적화",
            EfficiencyModel::Stairmand => "Stairmand",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "lapple" => Some(EfficiencyModel::Lapple),
            "cement" | "cement-optimized" | "cement_optimized" | "optimized" => {
                Some(EfficiencyModel::CementOptimized)
            }
            "stairmand" => Some(EfficiencyModel::Stairmand),
            _ => None,
        }
    }

    /// 선택한 모델로 입경 dp(μm)의 단일 사이클론 효율을 계산한다.
    pub fn efficiency(self, particle_diameter_um: f64, cut_size_um: f64) -> f64 {
        self.curve().efficiency(particle_diameter_um, cut_size_um)
    }

    /// 여러 입경에 대해 효율을 차례로 계산한다. 곡선 그리기용.
    pub fn efficiencies<'a>(
        self,
        particle_diameters_um: &'a [f64],
        cut_size_um: f64,
    ) -> impl Iterator<Item = f64> + 'a {
        let curve = self.curve();
        particle_diameters_um
            .iter()
            .map(move |&dp| curve.efficiency(dp, cut_size_um))
    }
}

impl EfficiencyCurve {
    /// 절단 입경이 0 이하이거나 무한대(집진 불가)이면, 또는 입경이 0 이하이면 0을 돌려준다.
    pub fn efficiency(self, particle_diameter_um: f64, cut_size_um: f64) -> f64 {
        if !cut_size_um.is_finite() || cut_size_um <= 0.0 || particle_diameter_um <= 0.0 {
            return 0.0;
        }
        match self {
            EfficiencyCurve::Lapple => {
                let ratio = cut_size_um / particle_diameter_um;
                1.0 / (1.0 + ratio * ratio)
            }
            EfficiencyCurve::Exponential { k } => {
                let ratio = particle_diameter_um / cut_size_um;
                1.0 - (-k * ratio * ratio).exp()
            }
        }
    }
}

/// Lapple 입경별 집진 효율 η = 1/(1+(dpc/dp)²). 입력은 모두 μm.
pub fn collection_efficiency(particle_diameter_um: f64, cut_size_um: f64) -> f64 {
    EfficiencyCurve::Lapple.efficiency(particle_diameter_um, cut_size_um)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_at_cut_size_is_half_collected() {
        assert!((collection_efficiency(4.0, 4.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn degenerate_inputs_collect_nothing() {
        for model in EfficiencyModel::ALL {
            assert_eq!(model.efficiency(5.0, f64::INFINITY), 0.0);
            assert_eq!(model.efficiency(5.0, 0.0), 0.0);
            assert_eq!(model.efficiency(5.0, -1.0), 0.0);
            assert_eq!(model.efficiency(0.0, 3.0), 0.0);
            assert_eq!(model.efficiency(-2.0, 3.0), 0.0);
        }
    }

    #[test]
    fn exponential_models_use_their_own_constant() {
        let dp = 2.0;
        let dpc = 4.0;
        let cement = EfficiencyModel::CementOptimized.efficiency(dp, dpc);
        let stairmand = EfficiencyModel::Stairmand.efficiency(dp, dpc);
        assert!((cement - (1.0 - (-2.5_f64 * 0.25).exp())).abs() < 1e-12);
        assert!((stairmand - (1.0 - (-2.0_f64 * 0.25).exp())).abs() < 1e-12);
    }

    #[test]
    fn element_wise_mapping_matches_scalar() {
        let dps = [0.5, 1.0, 2.5, 10.0];
        let etas: Vec<f64> = EfficiencyModel::Lapple.efficiencies(&dps, 2.5).collect();
        assert_eq!(etas.len(), dps.len());
        for (dp, eta) in dps.iter().zip(&etas) {
            assert_eq!(*eta, collection_efficiency(*dp, 2.5));
        }
    }

    #[test]
    fn model_names_parse() {
        assert_eq!(EfficiencyModel::parse("Lapple"), Some(EfficiencyModel::Lapple));
        assert_eq!(
            EfficiencyModel::parse("cement"),
            Some(EfficiencyModel::CementOptimized)
        );
        assert_eq!(EfficiencyModel::parse("muschelknautz"), None);
    }
}
