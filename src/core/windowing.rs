use crate::error::{MarmosetError, MarmosetResult};

/// Sums every stride-1 window of `window` consecutive values.
///
/// Produces `values.len() - window + 1` sums. Each window is summed left to
/// right from scratch, so equal windows yield bit-identical sums.
pub fn sliding_window_sums(values: &[f64], window: usize) -> MarmosetResult<Vec<f64>> {
    if window == 0 || window > values.len() {
        return Err(MarmosetError::InvalidWindow {
            window,
            steps: values.len(),
        });
    }

    Ok(values
        .windows(window)
        .map(|chunk| chunk.iter().sum())
        .collect())
}
