//! Small numeric helpers shared by the analyzers.

/// Variance below this is treated as zero (constant series).
const ZERO_VARIANCE: f64 = 1e-9;

/// Rounds half away from zero to the given number of decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Pearson correlation coefficient of two equally long series.
///
/// # Edge Cases
/// - Empty or mismatched lengths: `None`
/// - Either series constant (zero variance): `None`
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.is_empty() || xs.len() != ys.len() {
        return None;
    }

    let mean_x = mean(xs)?;
    let mean_y = mean(ys)?;

    let mut covariance = 0.0;
    let mut variance_x = 0.0;
    let mut variance_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        variance_x += dx * dx;
        variance_y += dy * dy;
    }

    if variance_x < ZERO_VARIANCE || variance_y < ZERO_VARIANCE {
        return None;
    }

    let r = covariance / (variance_x * variance_y).sqrt();
    // Guard against floating point drift just outside [-1, 1].
    Some(r.clamp(-1.0, 1.0))
}
