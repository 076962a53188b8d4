use crate::errors::AnalyticsError;
use crate::palette::Scheme;
use crate::ticks::nice_ticks;

/// Boundary that separates days with no activity from days with a little.
pub const ZERO_SENTINEL: f64 = 0.001;

/// Colour painted on days without activity, replacing the lightest scheme entry.
pub const EMPTY_DAY_COLOR: &str = "#EFF2F5";

const HEATMAP_TICK_COUNT: usize = 4;

/// Step function from numbers to one of `boundaries.len() + 1` outputs.
///
/// Bucket `i` covers `[boundaries[i-1], boundaries[i])`: a value equal to a
/// boundary belongs to the bucket above it.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdScale<T> {
    boundaries: Vec<f64>,
    palette: Vec<T>,
}

impl<T> ThresholdScale<T> {
    pub fn new(boundaries: Vec<f64>, palette: Vec<T>) -> Result<Self, AnalyticsError> {
        if let Some(bad) = boundaries.iter().find(|value| !value.is_finite()) {
            return Err(AnalyticsError::invalid(format!(
                "boundary {bad} is not finite"
            )));
        }
        if let Some(pair) = boundaries.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(AnalyticsError::invalid(format!(
                "boundaries must be strictly increasing, found {} then {}",
                pair[0], pair[1]
            )));
        }
        if palette.len() != boundaries.len() + 1 {
            return Err(AnalyticsError::invalid(format!(
                "expected {} palette entries for {} boundaries, got {}",
                boundaries.len() + 1,
                boundaries.len(),
                palette.len()
            )));
        }

        Ok(Self {
            boundaries,
            palette,
        })
    }

    /// Number of boundaries `<= value`. NaN falls in the first bucket.
    pub fn bucket_index(&self, value: f64) -> usize {
        if value.is_nan() {
            return 0;
        }
        self.boundaries.partition_point(|boundary| *boundary <= value)
    }

    pub fn apply(&self, value: f64) -> &T {
        &self.palette[self.bucket_index(value)]
    }

    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    pub fn palette(&self) -> &[T] {
        &self.palette
    }
}

/// Builds a colour step function from boundaries and a palette.
pub fn make_color_scale<T: Clone>(
    boundaries: &[f64],
    palette: &[T],
) -> Result<impl Fn(f64) -> T, AnalyticsError> {
    let scale = ThresholdScale::new(boundaries.to_vec(), palette.to_vec())?;
    Ok(move |value| scale.apply(value).clone())
}

/// Drops any zero boundary and puts [`ZERO_SENTINEL`] first, so exact zeros
/// stay in bucket 0 while any value from 0.001 up moves to bucket 1.
pub fn with_zero_sentinel(raw: &[f64]) -> Vec<f64> {
    let mut boundaries = Vec::with_capacity(raw.len() + 1);
    boundaries.push(ZERO_SENTINEL);
    boundaries.extend(raw.iter().copied().filter(|value| *value != 0.0));
    boundaries
}

/// [`with_zero_sentinel`] with every later boundary at or below the
/// sentinel removed, so tiny or negative raw values cannot break the
/// increasing order.
pub fn above_sentinel(raw: &[f64]) -> Vec<f64> {
    drop_below_sentinel(with_zero_sentinel(raw))
}

/// Heatmap boundaries for a value domain: nice ticks over `[lo, hi]`,
/// sentinel in front, and the top tick dropped so the darkest colour is
/// open-ended. Ticks at or below the sentinel are discarded; a degenerate
/// domain still keeps the sentinel.
pub fn heatmap_boundaries(lo: f64, hi: f64) -> Vec<f64> {
    let mut boundaries = with_zero_sentinel(&nice_ticks(lo, hi, HEATMAP_TICK_COUNT));
    if boundaries.len() > 1 {
        boundaries.pop();
    }
    drop_below_sentinel(boundaries)
}

// expects the sentinel at index 0
fn drop_below_sentinel(mut boundaries: Vec<f64>) -> Vec<f64> {
    let rest = boundaries.split_off(1.min(boundaries.len()));
    boundaries.extend(rest.into_iter().filter(|value| *value > ZERO_SENTINEL));
    boundaries
}

/// One colour per bucket for `boundary_count` boundaries, first entry
/// replaced by [`EMPTY_DAY_COLOR`].
pub fn heatmap_palette(scheme: Scheme, boundary_count: usize) -> Vec<String> {
    let mut colors = scheme.colors(boundary_count + 1);
    // schemes start at three colours
    colors.truncate(boundary_count + 1);
    if let Some(first) = colors.first_mut() {
        *first = EMPTY_DAY_COLOR.to_string();
    }
    colors
}

/// Threshold scale ready for painting a heatmap over `boundaries`.
///
/// ColorBrewer rows stop at nine colours, so boundary lists longer than
/// eight are rejected here.
pub fn heatmap_scale(
    scheme: Scheme,
    boundaries: Vec<f64>,
) -> Result<ThresholdScale<String>, AnalyticsError> {
    let palette = heatmap_palette(scheme, boundaries.len());
    ThresholdScale::new(boundaries, palette)
}
