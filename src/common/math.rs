//! Series math: trailing means and Wilder smoothing

/// Arithmetic mean of a slice, `None` when empty
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Trailing mean over `values[max(0, i + 1 - window)..=i]` for every `i`.
///
/// The window shrinks near the start of the series instead of leaving the
/// first `window - 1` positions undefined, so the output always has the same
/// length as the input. Each window is summed directly. A window made of one
/// repeated value yields that value exactly, so flat stretches give identical
/// means whatever the window width.
///
/// A zero window yields an empty vector.
pub fn trailing_means(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 {
        return Vec::new();
    }

    // Length of the run of identical values ending at `i`.
    let mut run = 0usize;
    (0..values.len())
        .map(|i| {
            run = if i > 0 && values[i] == values[i - 1] {
                run + 1
            } else {
                1
            };

            let start = (i + 1).saturating_sub(window);
            if run >= i + 1 - start {
                return values[i];
            }
            // Range is never empty: start <= i.
            mean(&values[start..=i]).unwrap_or(f64::NAN)
        })
        .collect()
}

/// Wilder smoothing (EMA with `alpha = 1 / window`) as an explicit fold.
///
/// The first observation seeds the average; every later one updates it with
/// `avg = alpha * value + (1 - alpha) * prev`. A smoothed value is only
/// reported once `window` observations have been folded in; earlier slots are
/// `None`.
///
/// ```
/// use troyonix::common::math::wilder_smoothing;
///
/// let smoothed = wilder_smoothing(&[1.0, 1.0, 1.0], 2);
/// assert_eq!(smoothed, vec![None, Some(1.0), Some(1.0)]);
/// ```
pub fn wilder_smoothing(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }

    let alpha = 1.0 / window as f64;
    let mut previous: Option<f64> = None;

    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let avg = match previous {
                Some(prev) => alpha * value + (1.0 - alpha) * prev,
                None => value,
            };
            previous = Some(avg);
            (i + 1 >= window).then_some(avg)
        })
        .collect()
}
