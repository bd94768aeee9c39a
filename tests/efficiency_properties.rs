//! 효율 합성/곡선의 성질 테스트.
use multicyclone_simulator::cyclone::{
    collection_efficiency, compound_efficiency, efficiency_curve, sample_diameters,
    EfficiencyModel,
};
use multicyclone_simulator::presets::Preset;
use proptest::prelude::*;

proptest! {
    #[test]
    fn compounding_never_lowers_efficiency(eta in 0.001_f64..0.999, n in 1_u32..50) {
        let sys = compound_efficiency(eta, n);
        prop_assert!(sys >= eta);
        if n == 1 {
            prop_assert_eq!(sys, eta);
        } else {
            prop_assert!(sys > eta);
        }
    }

    #[test]
    fn compounding_is_monotone_in_unit_count(eta in 0.0_f64..1.0, n in 1_u32..60) {
        prop_assert!(compound_efficiency(eta, n + 1) >= compound_efficiency(eta, n));
    }

    #[test]
    fn compounding_is_monotone_in_efficiency(a in 0.0_f64..1.0, b in 0.0_f64..1.0, n in 1_u32..20) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(compound_efficiency(hi, n) >= compound_efficiency(lo, n));
    }

    #[test]
    fn efficiency_stays_in_unit_interval(dp in 0.0_f64..500.0, dpc in 0.01_f64..50.0) {
        for model in EfficiencyModel::ALL {
            let eta = model.efficiency(dp, dpc);
            prop_assert!((0.0..=1.0).contains(&eta));
        }
    }

    #[test]
    fn efficiency_grows_with_particle_size(dp in 0.01_f64..100.0, dpc in 0.1_f64..20.0) {
        for model in EfficiencyModel::ALL {
            prop_assert!(model.efficiency(dp * 1.5, dpc) >= model.efficiency(dp, dpc));
        }
    }
}

#[test]
fn lapple_limits() {
    let dpc = 4.0;
    assert!(collection_efficiency(1e-6, dpc) < 1e-9);
    assert!(collection_efficiency(1e6, dpc) > 1.0 - 1e-9);
}

#[test]
fn compounding_approaches_one() {
    assert!(compound_efficiency(0.3, 200) > 1.0 - 1e-12);
    assert_eq!(compound_efficiency(0.0, 10), 0.0);
}

#[test]
fn curve_samples_are_inclusive() {
    let d = sample_diameters(0.1, 10.0, 100);
    assert_eq!(d.len(), 100);
    assert_eq!(d[0], 0.1);
    assert_eq!(d[99], 10.0);
    assert_eq!(sample_diameters(2.0, 8.0, 1), vec![2.0]);
}

#[test]
fn curve_system_efficiency_dominates_single() {
    let mut input = Preset::CementKiln.design_input();
    input.arrangement = multicyclone_simulator::cyclone::Arrangement::Parallel(2);
    let points = efficiency_curve(&input, 0.1, 10.0, 100);
    assert_eq!(points.len(), 100);
    for p in &points {
        assert!(p.system_efficiency >= p.single_efficiency);
    }
    let dpc = input.cut_size_um();
    let mid = points
        .iter()
        .min_by(|a, b| {
            (a.diameter_um - dpc)
                .abs()
                .total_cmp(&(b.diameter_um - dpc).abs())
        })
        .map(|p| p.single_efficiency)
        .unwrap_or_default();
    assert!((mid - 0.5).abs() < 0.02, "η(dpc) ≈ 0.5, got {mid}");
}
