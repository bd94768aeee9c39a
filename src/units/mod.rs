//! 단위 정의 및 변환 모듈 모음.

pub mod density;
pub mod flow_rate;
pub mod length;
pub mod pressure;
pub mod velocity;
pub mod viscosity;

pub use density::{convert_density, DensityUnit};
pub use flow_rate::{convert_flow_rate, FlowRateUnit};
pub use length::{convert_length, meters_to_micrometers, micrometers_to_meters, LengthUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use velocity::{convert_velocity, VelocityUnit};
pub use viscosity::{convert_viscosity, ViscosityUnit};
