/// 입구 높이가 0 이하일 때 사용하는 유효 회전수 기본값.
pub const DEFAULT_EFFECTIVE_TURNS_FALLBACK: f64 = 8.0;

/// 유효 회전수 Ne = (1/b)·(H + h/2).
///
/// `inlet_height_m`이 0 이하이면 식이 정의되지 않으므로 기본값 8.0을 돌려준다.
pub fn effective_turns(inlet_height_m: f64, body_length_m: f64, cone_length_m: f64) -> f64 {
    effective_turns_or(
        inlet_height_m,
        body_length_m,
        cone_length_m,
        DEFAULT_EFFECTIVE_TURNS_FALLBACK,
    )
}

/// 기본값을 지정하는 [`effective_turns`].
pub fn effective_turns_or(
    inlet_height_m: f64,
    body_length_m: f64,
    cone_length_m: f64,
    fallback: f64,
) -> f64 {
    if inlet_height_m <= 0.0 {
        return fallback;
    }
    (1.0 / inlet_height_m) * (body_length_m + cone_length_m / 2.0)
}
