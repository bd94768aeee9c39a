//! 단위 변환 왕복 및 문자열 변환 테스트.
use multicyclone_simulator::conversion::{self, ConversionError};
use multicyclone_simulator::quantity::QuantityKind;
use multicyclone_simulator::units::*;
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

proptest! {
    #[test]
    fn flow_rate_round_trip(q in 0.0_f64..1.0e4) {
        let per_min = convert_flow_rate(q, FlowRateUnit::CubicMeterPerSecond, FlowRateUnit::CubicMeterPerMinute);
        let back = convert_flow_rate(per_min, FlowRateUnit::CubicMeterPerMinute, FlowRateUnit::CubicMeterPerSecond);
        prop_assert!(close(back, q));
        let cfm = convert_flow_rate(q, FlowRateUnit::CubicMeterPerSecond, FlowRateUnit::CubicFootPerMinute);
        prop_assert!(close(convert_flow_rate(cfm, FlowRateUnit::CubicFootPerMinute, FlowRateUnit::CubicMeterPerSecond), q));
    }

    #[test]
    fn velocity_round_trip(v in 0.0_f64..200.0) {
        let fpm = convert_velocity(v, VelocityUnit::MeterPerSecond, VelocityUnit::FootPerMinute);
        prop_assert!(close(convert_velocity(fpm, VelocityUnit::FootPerMinute, VelocityUnit::MeterPerSecond), v));
    }

    #[test]
    fn length_round_trip(l in 0.0_f64..100.0) {
        let um = convert_length(l, LengthUnit::Meter, LengthUnit::Micrometer);
        prop_assert!(close(convert_length(um, LengthUnit::Micrometer, LengthUnit::Meter), l));
        let inch = convert_length(l, LengthUnit::Meter, LengthUnit::Inch);
        prop_assert!(close(convert_length(inch, LengthUnit::Inch, LengthUnit::Meter), l));
    }

    #[test]
    fn pressure_round_trip(p in 0.0_f64..1.0e5) {
        let mmaq = convert_pressure(p, PressureUnit::Pascal, PressureUnit::MmH2O);
        prop_assert!(close(convert_pressure(mmaq, PressureUnit::MmH2O, PressureUnit::Pascal), p));
        let inwg = convert_pressure(p, PressureUnit::Pascal, PressureUnit::InH2O);
        prop_assert!(close(convert_pressure(inwg, PressureUnit::InH2O, PressureUnit::Pascal), p));
    }
}

#[test]
fn kiln_flow_in_cubic_meters_per_minute() {
    let q = conversion::convert(QuantityKind::FlowRate, 625.0, "m3/min", "m3/s").expect("flow");
    assert!((q - 625.0 / 60.0).abs() < 1e-12);
}

#[test]
fn kiln_viscosity_from_hourly_units() {
    let mu = conversion::convert(QuantityKind::Viscosity, 0.10728, "kg/m·h", "Pa.s").expect("mu");
    assert!((mu - 2.98e-5).abs() < 1e-12);
}

#[test]
fn micrometer_helpers() {
    assert!((meters_to_micrometers(4.4e-6) - 4.4).abs() < 1e-9);
    assert!((micrometers_to_meters(2.5) - 2.5e-6).abs() < 1e-18);
}

#[test]
fn unknown_unit_is_rejected() {
    let err = conversion::convert(QuantityKind::Pressure, 1.0, "furlong", "Pa").unwrap_err();
    assert!(matches!(err, ConversionError::UnknownUnit(ref u) if u == "furlong"));
    assert!(conversion::parse_quantity("temperature").is_err());
}
