//! Nice tick generation and tick label formatting for linear axes.
//!
//! Steps are powers of ten multiplied by 1, 2 or 5. Tick values are produced
//! from integer multiples of the step so labels never carry float noise such
//! as `0.30000000000000004`.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Default number of ticks requested by axes and grids.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Rounds half-way cases towards positive infinity.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Returns `(first_index, last_index, increment)`.
///
/// A negative increment encodes a fractional step as its inverse so that
/// tick values can be computed by division instead of multiplication.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
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

    let (mut first, mut last, increment);
    if power < 0.0 {
        let inverse = 10f64.powf(-power) / factor;
        first = round_half_up(start * inverse);
        last = round_half_up(stop * inverse);
        if first / inverse < start {
            first += 1.0;
        }
        if last / inverse > stop {
            last -= 1.0;
        }
        increment = -inverse;
    } else {
        let step = 10f64.powf(power) * factor;
        first = round_half_up(start / step);
        last = round_half_up(stop / step);
        if first * step < start {
            first += 1.0;
        }
        if last * step > stop {
            last -= 1.0;
        }
        increment = step;
    }

    if last < first && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (first, last, increment)
}

/// Nice ticks covering `[start, stop]` (either order), about `count` of them.
#[must_use]
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (low, high) = if reverse { (stop, start) } else { (start, stop) };
    let (first, last, increment) = tick_spec(low, high, count as f64);
    if !(last >= first) || !increment.is_finite() {
        return Vec::new();
    }

    let n = (last - first + 1.0) as usize;
    let value_at = |index: f64| {
        if increment < 0.0 {
            index / -increment
        } else {
            index * increment
        }
    };

    (0..n)
        .map(|i| {
            let index = if reverse {
                last - i as f64
            } else {
                first + i as f64
            };
            value_at(index)
        })
        .collect()
}

/// Signed distance between adjacent ticks produced by [`ticks`].
#[must_use]
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || !start.is_finite() || !stop.is_finite() || start == stop {
        return 0.0;
    }
    let reverse = stop < start;
    let (low, high) = if reverse { (stop, start) } else { (start, stop) };
    let increment = tick_spec(low, high, count as f64).2;
    let step = if increment < 0.0 {
        1.0 / -increment
    } else {
        increment
    };
    if reverse { -step } else { step }
}

/// Integer label (`2005`), used for the year axis.
#[must_use]
pub fn format_integer_tick(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let rounded = round_half_up(value);
    if rounded == 0.0 {
        return "0".to_owned();
    }
    format!("{rounded:.0}")
}

/// Fixed-precision label with thousands grouping, precision derived from `step`.
#[must_use]
pub fn format_value_tick(value: f64, step: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let precision = if step.is_finite() && step != 0.0 {
        (-step.abs().log10().floor()).max(0.0) as usize
    } else {
        0
    };

    let formatted = format!("{value:.precision$}");
    let (negative, digits) = match formatted.strip_prefix('-') {
        Some(rest) if rest.chars().any(|c| c.is_ascii_digit() && c != '0') => (true, rest),
        Some(rest) => (false, rest),
        None => (false, formatted.as_str()),
    };
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(formatted.len() + integer.len() / 3);
    if negative {
        grouped.push('-');
    }
    for (index, ch) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
