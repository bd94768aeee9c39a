use serde::{Deserialize, Serialize};

/// 체적 유량 단위. 내부 기준은 m³/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowRateUnit {
    CubicMeterPerSecond,
    CubicMeterPerMinute,
    CubicMeterPerHour,
    LiterPerSecond,
    /// ft³/min (CFM)
    CubicFootPerMinute,
}

const M3_PER_FT3: f64 = 0.028_316_846_592;

fn to_m3_per_s(value: f64, unit: FlowRateUnit) -> f64 {
    match unit {
        FlowRateUnit::CubicMeterPerSecond => value,
        FlowRateUnit::CubicMeterPerMinute => value / 60.0,
        FlowRateUnit::CubicMeterPerHour => value / 3600.0,
        FlowRateUnit::LiterPerSecond => value / 1000.0,
        FlowRateUnit::CubicFootPerMinute => value * M3_PER_FT3 / 60.0,
    }
}

fn from_m3_per_s(value: f64, unit: FlowRateUnit) -> f64 {
    match unit {
        FlowRateUnit::CubicMeterPerSecond => value,
        FlowRateUnit::CubicMeterPerMinute => value * 60.0,
        FlowRateUnit::CubicMeterPerHour => value * 3600.0,
        FlowRateUnit::LiterPerSecond => value * 1000.0,
        FlowRateUnit::CubicFootPerMinute => value * 60.0 / M3_PER_FT3,
    }
}

/// 유량을 변환한다.
pub fn convert_flow_rate(value: f64, from: FlowRateUnit, to: FlowRateUnit) -> f64 {
    let base = to_m3_per_s(value, from);
    from_m3_per_s(base, to)
}
