use serde::{Deserialize, Serialize};

/// 길이 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Centimeter,
    Millimeter,
    Micrometer,
    Inch,
    Foot,
}

fn to_meter(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value,
        LengthUnit::Centimeter => value / 100.0,
        LengthUnit::Millimeter => value / 1000.0,
        LengthUnit::Micrometer => value / 1_000_000.0,
        LengthUnit::Inch => value * 0.0254,
        LengthUnit::Foot => value * 0.3048,
    }
}

fn from_meter(value_m: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value_m,
        LengthUnit::Centimeter => value_m * 100.0,
        LengthUnit::Millimeter => value_m * 1000.0,
        LengthUnit::Micrometer => value_m * 1_000_000.0,
        LengthUnit::Inch => value_m / 0.0254,
        LengthUnit::Foot => value_m / 0.3048,
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let m = to_meter(value, from);
    from_meter(m, to)
}

/// m → μm. 입자 직경은 계산식 바깥(표시 경계)에서만 μm로 바꾼다.
pub fn meters_to_micrometers(value_m: f64) -> f64 {
    convert_length(value_m, LengthUnit::Meter, LengthUnit::Micrometer)
}

/// μm → m.
pub fn micrometers_to_meters(value_um: f64) -> f64 {
    convert_length(value_um, LengthUnit::Micrometer, LengthUnit::Meter)
}
