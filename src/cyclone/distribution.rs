use serde::{Deserialize, Serialize};

/// 입경 분포의 한 구간.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeBin {
    /// 구간 표기(예: "10~20")
    pub size_range: String,
    /// 대표 입경 dp_avg [μm]
    pub dp_avg_um: f64,
    /// 질량 분율 Mj [%]
    pub mass_percent: f64,
}

/// 구간별 입경 분포. 질량 분율 합이 100%가 되도록 강제하지는 않는다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParticleSizeDistribution {
    pub bins: Vec<SizeBin>,
}

/// 구간별 집진 결과(사용자에게 그대로 보여주는 진단 값).
#[derive(Debug, Clone, PartialEq)]
pub struct BinEfficiency {
    pub size_range: String,
    pub dp_avg_um: f64,
    /// dpc/dp. dp가 0 이하이면 무한대.
    pub dpc_over_dp: f64,
    /// 구간 효율 Nj
    pub nj: f64,
    pub mass_percent: f64,
    /// Nj·Mj/100 (소수)
    pub collected_fraction: f64,
}

/// 분포 전체 집진 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionResult {
    pub bins: Vec<BinEfficiency>,
    /// 질량 가중 전체 효율(소수). 100% 초과여도 자르지 않는다.
    pub overall_efficiency: f64,
    pub warnings: Vec<String>,
}

/// 질량 분율 합이 100%에서 이만큼(%p) 넘게 벗어나면 경고한다.
const MASS_SUM_TOLERANCE_PERCENT: f64 = 0.5;

impl ParticleSizeDistribution {
    pub fn from_rows(rows: &[(&str, f64, f64)]) -> Self {
        Self {
            bins: rows
                .iter()
                .map(|&(size_range, dp_avg_um, mass_percent)| SizeBin {
                    size_range: size_range.to_string(),
                    dp_avg_um,
                    mass_percent,
                })
                .collect(),
        }
    }

    /// 시멘트 소성로 배출 분진의 8구간 기본 분포.
    pub fn cement_kiln_default() -> Self {
        Self::from_rows(&[
            ("1~5", 2.5, 5.0),
            ("5~10", 7.5, 10.0),
            ("10~20", 15.0, 15.0),
            ("20~40", 30.0, 20.0),
            ("40~60", 50.0, 20.0),
            ("60~80", 70.0, 15.0),
            ("80~100", 90.0, 10.0),
            ("100+", 100.0, 5.0),
        ])
    }

    pub fn total_mass_percent(&self) -> f64 {
        self.bins.iter().map(|b| b.mass_percent).sum()
    }
}

/// 구간별 Lapple 효율을 질량 가중 합산한다.
///
/// 각 구간에서 dpc/dp → Nj = 1/(1+(dpc/dp)²) → Nj·Mj/100 을 구하고 합한다.
/// dpc/dp가 무한대이면 Nj = 0이다. 절단 입경이 0이면 비가 0이므로 Nj = 1이 된다.
pub fn aggregate_efficiency(
    distribution: &ParticleSizeDistribution,
    cut_size_um: f64,
) -> DistributionResult {
    let mut bins = Vec::with_capacity(distribution.bins.len());
    let mut overall = 0.0;

    for bin in &distribution.bins {
        let dpc_over_dp = if bin.dp_avg_um > 0.0 {
            cut_size_um / bin.dp_avg_um
        } else {
            f64::INFINITY
        };
        let nj = if dpc_over_dp.is_finite() {
            1.0 / (1.0 + dpc_over_dp * dpc_over_dp)
        } else {
            0.0
        };
        let collected_fraction = nj * (bin.mass_percent / 100.0);
        overall += collected_fraction;
        bins.push(BinEfficiency {
            size_range: bin.size_range.clone(),
            dp_avg_um: bin.dp_avg_um,
            dpc_over_dp,
            nj,
            mass_percent: bin.mass_percent,
            collected_fraction,
        });
    }

    let mut warnings = Vec::new();
    let total_mass = distribution.total_mass_percent();
    if !distribution.bins.is_empty() && (total_mass - 100.0).abs() > MASS_SUM_TOLERANCE_PERCENT {
        warnings.push(format!(
            "질량 분율 합이 {total_mass:.2}% 입니다. 100% 가 되도록 분포를 확인하세요."
        ));
    }
    if overall > 1.0 {
        warnings.push(format!(
            "단일 사이클론 누적 효율이 100% 를 초과했습니다({:.2}%). 입력된 입자 분포나 파라미터를 다시 확인하세요.",
            overall * 100.0
        ));
    }

    DistributionResult {
        bins,
        overall_efficiency: overall,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_diameter_bin_collects_nothing() {
        let dist = ParticleSizeDistribution::from_rows(&[("0", 0.0, 50.0), ("10", 10.0, 50.0)]);
        let res = aggregate_efficiency(&dist, 10.0);
        assert!(res.bins[0].dpc_over_dp.is_infinite());
        assert_eq!(res.bins[0].nj, 0.0);
        assert!((res.overall_efficiency - 0.25).abs() < 1e-12);
    }

    #[test]
    fn undefined_cut_size_collects_nothing() {
        let dist = ParticleSizeDistribution::cement_kiln_default();
        let res = aggregate_efficiency(&dist, f64::INFINITY);
        assert_eq!(res.overall_efficiency, 0.0);
        assert!(res.bins.iter().all(|b| b.nj == 0.0));
    }

    #[test]
    fn zero_cut_size_collects_everything() {
        let dist = ParticleSizeDistribution::from_rows(&[("10", 10.0, 100.0)]);
        let res = aggregate_efficiency(&dist, 0.0);
        assert_eq!(res.bins[0].dpc_over_dp, 0.0);
        assert_eq!(res.bins[0].nj, 1.0);
        assert_eq!(res.overall_efficiency, 1.0);
    }

    #[test]
    fn over_collection_is_reported_not_clamped() {
        let dist = ParticleSizeDistribution::from_rows(&[("a", 100.0, 80.0), ("b", 100.0, 80.0)]);
        let res = aggregate_efficiency(&dist, 1.0);
        assert!(res.overall_efficiency > 1.0);
        assert!(res.warnings.iter().any(|w| w.contains("초과")));
    }

    #[test]
    fn default_distribution_sums_to_hundred() {
        let dist = ParticleSizeDistribution::cement_kiln_default();
        assert!((dist.total_mass_percent() - 100.0).abs() < 1e-12);
        assert!(aggregate_efficiency(&dist, 4.0).warnings.is_empty());
    }
}
