//! "Nice" axis ticks: round numbers of the form {1, 2, 5} x 10^k spanning a
//! range, with the same step choice and rounding as d3-array's `ticks`, so
//! legends line up with what a browser-side chart would print.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Roughly `count` evenly spaced round values within `[start, stop]`.
///
/// Values come back in the direction of the arguments (descending when
/// `stop < start`). Returns `[start]` for an empty range and nothing for a
/// non-positive count or non-finite bounds.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let Some(spec) = tick_spec(lo, hi, count as f64) else {
        return Vec::new();
    };
    if spec.last < spec.first {
        return Vec::new();
    }

    let n = (spec.last - spec.first) as usize + 1;
    (0..n)
        .map(|i| {
            let k = if reverse {
                (spec.last - i as i64) as f64
            } else {
                (spec.first + i as i64) as f64
            };
            if spec.inc < 0.0 { k / -spec.inc } else { k * spec.inc }
        })
        .collect()
}

struct TickSpec {
    first: i64,
    last: i64,
    // negative means "divide by -inc", which keeps sub-unit steps exact
    inc: f64,
}

fn tick_spec(start: f64, stop: f64, count: f64) -> Option<TickSpec> {
    let step = (stop - start) / count;
    let power = step.log10().floor();
    if !power.is_finite() {
        return None;
    }
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (first, last, inc) = if power < 0.0 {
        let scale = 10f64.powf(-power) / factor;
        let mut first = js_round(start * scale);
        let mut last = js_round(stop * scale);
        if (first as f64) / scale < start {
            first += 1;
        }
        if (last as f64) / scale > stop {
            last -= 1;
        }
        (first, last, -scale)
    } else {
        let scale = 10f64.powf(power) * factor;
        let mut first = js_round(start / scale);
        let mut last = js_round(stop / scale);
        if (first as f64) * scale < start {
            first += 1;
        }
        if (last as f64) * scale > stop {
            last -= 1;
        }
        (first, last, scale)
    };

    if last < first && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    Some(TickSpec { first, last, inc })
}

// Math.round: halves go toward positive infinity.
fn js_round(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
