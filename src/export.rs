//! 계산 결과를 CSV 텍스트로 만든다. 파일 쓰기는 호출하는 쪽이 맡는다.

use std::fmt::Write;

use crate::cyclone::{CurvePoint, DistributionResult, PerformanceReport};

fn fmt_ratio(value: f64) -> String {
    if value.is_infinite() {
        "inf".to_string()
    } else {
        format!("{value:.4}")
    }
}

fn fmt_metric(value: f64) -> String {
    if value.is_infinite() {
        "inf".to_string()
    } else {
        format!("{value:.6}")
    }
}

fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// 구간별 집진 표. 열: size range, dp avg, dpc/dp, Nj, Mj%, % collected.
pub fn distribution_csv(result: &DistributionResult) -> String {
    let mut out = String::from("size range,dp avg,dpc/dp,Nj,Mj%,% collected\n");
    for bin in &result.bins {
        let _ = writeln!(
            out,
            "{},{},{},{:.6},{},{:.6}",
            quote(&bin.size_range),
            bin.dp_avg_um,
            fmt_ratio(bin.dpc_over_dp),
            bin.nj,
            bin.mass_percent,
            bin.collected_fraction * 100.0
        );
    }
    out
}

/// 입경별 효율 곡선.
pub fn curve_csv(points: &[CurvePoint]) -> String {
    let mut out = String::from("Particle Diameter (um),Single Efficiency,Multi Efficiency\n");
    for p in points {
        let _ = writeln!(
            out,
            "{},{},{}",
            p.diameter_um, p.single_efficiency, p.system_efficiency
        );
    }
    out
}

/// 주요 성능 지표 요약(항목,값).
pub fn summary_csv(report: &PerformanceReport) -> String {
    let mut out = String::from("metric,value\n");
    let rows = [
        ("effective turns", fmt_metric(report.effective_turns)),
        ("cut-size (um)", fmt_metric(report.cut_size_um)),
        (
            "overall single efficiency (%)",
            fmt_metric(report.overall_single_efficiency * 100.0),
        ),
        (
            "overall multi efficiency (%)",
            fmt_metric(report.overall_system_efficiency * 100.0),
        ),
        ("pressure loss (Pa)", fmt_metric(report.pressure_loss_pa)),
        ("reynolds number", fmt_metric(report.reynolds_number)),
        ("required units", report.required_units.to_string()),
    ];
    for (name, value) in rows {
        let _ = writeln!(out, "{name},{value}");
    }
    out
}
