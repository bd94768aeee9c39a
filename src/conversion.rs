use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
    /// 지원하지 않는 물리량
    UnsupportedQuantity(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
            ConversionError::UnsupportedQuantity(q) => write!(f, "지원하지 않는 물리량: {q}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 물리량 이름 문자열을 해석한다.
pub fn parse_quantity(s: &str) -> Result<QuantityKind, ConversionError> {
    QuantityKind::parse(s).ok_or_else(|| ConversionError::UnsupportedQuantity(s.to_string()))
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `m3/min`, `m/s`, `mm`, `Pa`, `mmH2O`, `cP` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        QuantityKind::Velocity => {
            let from = parse_velocity_unit(from_unit_str)?;
            let to = parse_velocity_unit(to_unit_str)?;
            Ok(convert_velocity(value, from, to))
        }
        QuantityKind::FlowRate => {
            let from = parse_flow_rate_unit(from_unit_str)?;
            let to = parse_flow_rate_unit(to_unit_str)?;
            Ok(convert_flow_rate(value, from, to))
        }
        QuantityKind::Pressure => {
            let from = parse_pressure_unit(from_unit_str)?;
            let to = parse_pressure_unit(to_unit_str)?;
            Ok(convert_pressure(value, from, to))
        }
        QuantityKind::Viscosity => {
            let from = parse_viscosity_unit(from_unit_str)?;
            let to = parse_viscosity_unit(to_unit_str)?;
            Ok(convert_viscosity(value, from, to))
        }
        QuantityKind::Density => {
            let from = parse_density_unit(from_unit_str)?;
            let to = parse_density_unit(to_unit_str)?;
            Ok(convert_density(value, from, to))
        }
    }
}

pub fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "cm" => Ok(LengthUnit::Centimeter),
        "mm" => Ok(LengthUnit::Millimeter),
        "um" | "μm" | "micron" => Ok(LengthUnit::Micrometer),
        "in" | "inch" => Ok(LengthUnit::Inch),
        "ft" | "foot" => Ok(LengthUnit::Foot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_velocity_unit(s: &str) -> Result<VelocityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m/s" | "mps" => Ok(VelocityUnit::MeterPerSecond),
        "ft/s" | "fps" => Ok(VelocityUnit::FootPerSecond),
        "ft/min" | "fpm" => Ok(VelocityUnit::FootPerMinute),
        "km/h" | "kph" => Ok(VelocityUnit::KilometerPerHour),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_flow_rate_unit(s: &str) -> Result<FlowRateUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m3/s" | "m^3/s" | "cms" => Ok(FlowRateUnit::CubicMeterPerSecond),
        "m3/min" | "m^3/min" | "cmm" => Ok(FlowRateUnit::CubicMeterPerMinute),
        "m3/h" | "m^3/h" | "cmh" => Ok(FlowRateUnit::CubicMeterPerHour),
        "l/s" | "lps" => Ok(FlowRateUnit::LiterPerSecond),
        "cfm" | "ft3/min" | "ft^3/min" => Ok(FlowRateUnit::CubicFootPerMinute),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "pa" | "pascal" => Ok(PressureUnit::Pascal),
        "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
        "bar" => Ok(PressureUnit::Bar),
        "mbar" | "millibar" => Ok(PressureUnit::MilliBar),
        "mmh2o" | "mmaq" | "mmwc" => Ok(PressureUnit::MmH2O),
        "inh2o" | "inwg" | "inwc" => Ok(PressureUnit::InH2O),
        "psi" => Ok(PressureUnit::Psi),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_viscosity_unit(s: &str) -> Result<ViscosityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "pa·s" | "pa.s" | "pas" | "kg/m·s" | "kg/ms" => Ok(ViscosityUnit::PascalSecond),
        "cp" | "cps" => Ok(ViscosityUnit::Centipoise),
        "kg/m·h" | "kg/mh" => Ok(ViscosityUnit::KgPerMeterHour),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_density_unit(s: &str) -> Result<DensityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kg/m3" | "kg/m^3" => Ok(DensityUnit::KgPerCubicMeter),
        "g/cm3" | "g/cc" => Ok(DensityUnit::GramPerCubicCentimeter),
        "lb/ft3" | "lb/ft^3" | "pcf" => Ok(DensityUnit::PoundPerCubicFoot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
