/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Length,
    Velocity,
    FlowRate,
    Pressure,
    Viscosity,
    Density,
}

impl QuantityKind {
    /// CLI 인자 문자열을 물리량으로 해석한다.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "length" | "len" | "길이" => Some(QuantityKind::Length),
            "velocity" | "vel" | "speed" | "속도" => Some(QuantityKind::Velocity),
            "flow" | "flow_rate" | "flowrate" | "유량" => Some(QuantityKind::FlowRate),
            "pressure" | "dp" | "압력" => Some(QuantityKind::Pressure),
            "viscosity" | "visc" | "점도" => Some(QuantityKind::Viscosity),
            "density" | "rho" | "밀도" => Some(QuantityKind::Density),
            _ => None,
        }
    }
}
