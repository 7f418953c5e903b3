/// Reads a loosely typed numeric parameter the way a browser form would send
/// it. Fractions truncate toward zero; anything that is not a finite number
/// becomes `0`, which the search paging rules then lift to their minimum.
pub fn coerce_int(raw: &str) -> i64 {
    match raw.trim().parse::<f64>() {
        // `as` saturates at the i64 bounds.
        Ok(value) if value.is_finite() => value.trunc() as i64,
        _ => 0,
    }
}

/// Missing or empty parameters stay `None` so the caller's default applies.
pub fn coerce_optional_int(raw: Option<&str>) -> Option<i64> {
    raw.filter(|value| !value.trim().is_empty()).map(coerce_int)
}
