use serde::{Deserialize, Serialize};

/// 다수 유닛 합성 효율 η_sys = 1 - (1 - η)^N.
///
/// 각 유닛이 앞 유닛을 빠져나온 분진을 독립적으로 다시 포집한다고 본다.
/// η는 [0, 1]로 제한하고, N = 0은 1대로 취급한다.
/// 작은 η에서 자릿수를 잃지 않도록 -expm1(N·ln(1-η))로 계산한다.
pub fn compound_efficiency(single_unit_efficiency: f64, unit_count: u32) -> f64 {
    let eta = single_unit_efficiency.clamp(0.0, 1.0);
    let n = unit_count.max(1);
    if n == 1 {
        return eta;
    }
    -(f64::from(n) * (-eta).ln_1p()).exp_m1()
}

/// 사이클론 배치 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Arrangement {
    #[default]
    Single,
    /// 가스가 차례로 통과하는 직렬 단수
    Series(u32),
    /// 가스를 나누어 동시에 처리하는 병렬 대수
    Parallel(u32),
    /// 직렬 단 각각이 병렬 대수로 구성된 혼합 배치
    Hybrid { series: u32, parallel: u32 },
}

impl Arrangement {
    /// 직렬/병렬 수로 배치를 만든다. 0은 1로 올린다.
    pub fn from_counts(series: u32, parallel: u32) -> Self {
        match (series.max(1), parallel.max(1)) {
            (1, 1) => Arrangement::Single,
            (s, 1) => Arrangement::Series(s),
            (1, p) => Arrangement::Parallel(p),
            (s, p) => Arrangement::Hybrid {
                series: s,
                parallel: p,
            },
        }
    }

    pub fn series_count(&self) -> u32 {
        match *self {
            Arrangement::Single | Arrangement::Parallel(_) => 1,
            Arrangement::Series(n) => n.max(1),
            Arrangement::Hybrid { series, .. } => series.max(1),
        }
    }

    pub fn parallel_count(&self) -> u32 {
        match *self {
            Arrangement::Single | Arrangement::Series(_) => 1,
            Arrangement::Parallel(n) => n.max(1),
            Arrangement::Hybrid { parallel, .. } => parallel.max(1),
        }
    }

    /// 총 유닛 수 = 직렬 × 병렬.
    pub fn unit_count(&self) -> u32 {
        self.series_count().saturating_mul(self.parallel_count())
    }

    /// 배치 전체의 합성 효율.
    ///
    /// 병렬 배치도 직렬과 같은 합성식을 쓴다(대수 평균 포집 근사). 배치별로 분기를
    /// 나눠 두었으므로 병렬 식을 따로 두게 되면 해당 분기만 고치면 된다.
    pub fn system_efficiency(&self, single_unit_efficiency: f64) -> f64 {
        match *self {
            Arrangement::Single => compound_efficiency(single_unit_efficiency, 1),
            Arrangement::Series(n) => compound_efficiency(single_unit_efficiency, n),
            Arrangement::Parallel(n) => compound_efficiency(single_unit_efficiency, n),
            Arrangement::Hybrid { .. } => {
                compound_efficiency(single_unit_efficiency, self.unit_count())
            }
        }
    }

    /// 0 대수가 들어 있으면 경고를 반환한다.
    pub fn warnings(&self) -> Vec<String> {
        let zero = match *self {
            Arrangement::Single => false,
            Arrangement::Series(n) | Arrangement::Parallel(n) => n == 0,
            Arrangement::Hybrid { series, parallel } => series == 0 || parallel == 0,
        };
        if zero {
            vec!["사이클론 수 0 은 1 로 보정하여 계산합니다.".to_string()]
        } else {
            Vec::new()
        }
    }

    pub fn describe(&self) -> String {
        match *self {
            Arrangement::Single => "단일".to_string(),
            Arrangement::Series(n) => format!("직렬 {n}단"),
            Arrangement::Parallel(n) => format!("병렬 {n}대"),
            Arrangement::Hybrid { series, parallel } => {
                format!("직렬 {series}단 × 병렬 {parallel}대")
            }
        }
    }
}

/// 총 처리 유량을 감당하는 데 필요한 병렬 사이클론 수 max(1, ceil(Q_total/Q_single)).
pub fn required_unit_count(total_flow_m3_per_s: f64, single_unit_flow_m3_per_s: f64) -> u32 {
    if single_unit_flow_m3_per_s <= 0.0 || total_flow_m3_per_s <= 0.0 {
        return 1;
    }
    let n = (total_flow_m3_per_s / single_unit_flow_m3_per_s).ceil();
    if n >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        (n as u32).max(1)
    }
}
