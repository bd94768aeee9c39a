use serde::{Deserialize, Serialize};

/// 차압 단위. 내부 기준은 Pa이다.
/// 사이클론 압력손실은 항상 차압이므로 게이지/절대 구분을 두지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    Bar,
    MilliBar,
    /// mmH₂O (mmAq)
    MmH2O,
    /// inH₂O (inWG)
    InH2O,
    Psi,
}

const PA_PER_MMH2O: f64 = 9.806_65;
const PA_PER_INH2O: f64 = 249.088_9;
const PA_PER_PSI: f64 = 6_894.757;
const PA_PER_BAR: f64 = 100_000.0;

/// 주어진 차압을 Pa로 변환한다.
pub fn to_pascal(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value,
        PressureUnit::KiloPascal => value * 1000.0,
        PressureUnit::Bar => value * PA_PER_BAR,
        PressureUnit::MilliBar => value * 100.0,
        PressureUnit::MmH2O => value * PA_PER_MMH2O,
        PressureUnit::InH2O => value * PA_PER_INH2O,
        PressureUnit::Psi => value * PA_PER_PSI,
    }
}

/// Pa 값을 원하는 단위로 변환한다.
pub fn from_pascal(value_pa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value_pa,
        PressureUnit::KiloPascal => value_pa / 1000.0,
        PressureUnit::Bar => value_pa / PA_PER_BAR,
        PressureUnit::MilliBar => value_pa / 100.0,
        PressureUnit::MmH2O => value_pa / PA_PER_MMH2O,
        PressureUnit::InH2O => value_pa / PA_PER_INH2O,
        PressureUnit::Psi => value_pa / PA_PER_PSI,
    }
}

/// 차압을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let pa = to_pascal(value, from);
    from_pascal(pa, to)
}
