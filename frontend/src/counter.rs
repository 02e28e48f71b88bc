use crate::error::ConfigError;

/// What an animated counter settles on: the number, how many decimals it is
/// shown with, and the text glued after it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterTarget {
    pub value: f64,
    pub decimals: usize,
    pub suffix: &'static str,
}

impl CounterTarget {
    pub const fn new(value: f64) -> Self {
        Self {
            value,
            decimals: 0,
            suffix: "",
        }
    }

    pub const fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub const fn with_suffix(mut self, suffix: &'static str) -> Self {
        self.suffix = suffix;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.value.is_finite() {
            Ok(())
        } else {
            Err(ConfigError::NonFiniteTarget(self.value))
        }
    }

    /// Same target with a non-finite value replaced by 0.
    pub fn sanitized(self) -> Self {
        if self.value.is_finite() {
            self
        } else {
            Self { value: 0.0, ..self }
        }
    }

    pub fn display(&self, value: f64) -> String {
        format_counter(value, self.decimals, self.suffix)
    }

    pub fn final_display(&self) -> String {
        self.display(self.sanitized().value)
    }
}

// Every finite f64 is a dyadic rational, so its decimal expansion ends
// within this many fractional digits.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Whether `value` sits exactly halfway between two `decimals`-place numbers,
/// judged on its exact decimal expansion.
fn is_exact_tie(value: f64, decimals: usize) -> bool {
    if decimals >= EXACT_FRACTION_DIGITS {
        return false;
    }
    // Cheap filter before printing the full expansion.
    let scaled = value.abs() * 10f64.powi(decimals as i32);
    if scaled.is_finite() && (scaled.fract() - 0.5).abs() > 1e-6 {
        return false;
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let Some((_, fraction)) = exact.split_once('.') else {
        return false;
    };
    let mut rest = match fraction.get(decimals..) {
        Some(rest) => rest.chars(),
        None => return false,
    };
    rest.next() == Some('5') && rest.all(|c| c == '0')
}

/// Rounds `value` to `decimals` places and appends `suffix`.
///
/// Exact halfway values round away from zero (`2.5 -> "3"`, `0.125 -> "0.13"`).
/// Non-finite values render as zero, and a value that rounds to zero never
/// shows a minus sign.
pub fn format_counter(value: f64, decimals: usize, suffix: &str) -> String {
    let mut value = if value.is_finite() { value } else { 0.0 };
    if is_exact_tie(value, decimals) {
        // The next float out from zero lies just past the midpoint, so the
        // formatter's exact rounding now goes away from zero.
        value = f64::from_bits(value.to_bits() + 1);
    }
    let mut number = format!("{:.*}", decimals, value);
    if number.starts_with('-') && number[1..].chars().all(|c| c == '0' || c == '.') {
        number.remove(0);
    }
    number.push_str(suffix);
    number
}

/// A CSS-style cubic Bézier timing curve anchored at (0, 0) and (1, 1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

const SUBDIVISION_PRECISION: f64 = 1e-7;
const SUBDIVISION_MAX_ITERATIONS: usize = 24;

impl CubicBezier {
    /// `ease-out`: fast start, gentle landing.
    pub const EASE_OUT: CubicBezier = CubicBezier::new(0.0, 0.0, 0.58, 1.0);

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(a1: f64, a2: f64, t: f64) -> f64 {
        (((1.0 - 3.0 * a2 + 3.0 * a1) * t + (3.0 * a2 - 6.0 * a1)) * t + 3.0 * a1) * t
    }

    /// Eased output for a linear progress `x`, clamped to `[0, 1]`.
    pub fn at(&self, x: f64) -> f64 {
        if x.is_nan() || x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        if self.x1 == self.y1 && self.x2 == self.y2 {
            return x;
        }

        // x(t) is monotonic for control points inside the unit square, so
        // bisection on t finds the parameter for this x.
        let (mut lower, mut upper) = (0.0, 1.0);
        let mut t = x;
        for _ in 0..SUBDIVISION_MAX_ITERATIONS {
            t = lower + (upper - lower) / 2.0;
            let delta = Self::sample(self.x1, self.x2, t) - x;
            if delta.abs() <= SUBDIVISION_PRECISION {
                break;
            }
            if delta > 0.0 {
                upper = t;
            } else {
                lower = t;
            }
        }
        Self::sample(self.y1, self.y2, t)
    }
}

pub fn ease_out(progress: f64) -> f64 {
    CubicBezier::EASE_OUT.at(progress)
}

/// Interpolation of a counter from 0 up to its target over a fixed duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    target: CounterTarget,
    duration_secs: f64,
}

impl CounterAnimation {
    pub fn new(target: CounterTarget, duration_secs: f64) -> Result<Self, ConfigError> {
        target.validate()?;
        if !duration_secs.is_finite() || duration_secs < 0.0 {
            return Err(ConfigError::InvalidDuration(duration_secs));
        }
        Ok(Self {
            target,
            duration_secs,
        })
    }

    /// Builds an animation from possibly broken input: a non-finite target
    /// becomes 0 and an unusable duration becomes 0 (jump straight to the end).
    pub fn sanitized(target: CounterTarget, duration_secs: f64) -> Self {
        let duration_secs = if duration_secs.is_finite() {
            duration_secs.max(0.0)
        } else {
            0.0
        };
        Self {
            target: target.sanitized(),
            duration_secs,
        }
    }

    pub fn progress(&self, elapsed_secs: f64) -> f64 {
        if self.duration_secs <= 0.0 {
            return 1.0;
        }
        if elapsed_secs.is_nan() {
            return 0.0;
        }
        (elapsed_secs / self.duration_secs).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, elapsed_secs: f64) -> bool {
        self.progress(elapsed_secs) >= 1.0
    }

    pub fn value_at(&self, elapsed_secs: f64) -> f64 {
        self.target.value * ease_out(self.progress(elapsed_secs))
    }

    pub fn frame(&self, elapsed_secs: f64) -> String {
        self.target.display(self.value_at(elapsed_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_requested_precision_and_suffix() {
        assert_eq!(format_counter(10000.0, 0, "+"), "10000+");
        assert_eq!(format_counter(99.9, 1, "%"), "99.9%");
        assert_eq!(format_counter(500.0, 0, "+"), "500+");
        assert_eq!(format_counter(3.14159, 2, ""), "3.14");
        assert_eq!(format_counter(12.0, 2, " ms"), "12.00 ms");
    }

    #[test]
    fn rounds_instead_of_truncating() {
        assert_eq!(format_counter(9999.6, 0, "+"), "10000+");
        assert_eq!(format_counter(99.86, 1, "%"), "99.9%");
    }

    #[test]
    fn exact_halves_round_away_from_zero() {
        assert_eq!(format_counter(2.5, 0, "+"), "3+");
        assert_eq!(format_counter(0.5, 0, ""), "1");
        assert_eq!(format_counter(0.125, 2, "%"), "0.13%");
        assert_eq!(format_counter(-2.5, 0, ""), "-3");
        assert_eq!(CounterTarget::new(2.5).final_display(), "3");
    }

    #[test]
    fn near_halves_follow_their_exact_value() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(format_counter(1.005, 2, ""), "1.00");
        // 0.15 is stored as 0.1499999999999999944...
        assert_eq!(format_counter(0.15, 1, ""), "0.1");
        assert_eq!(format_counter(1.25, 3, ""), "1.250");
    }

    #[test]
    fn never_renders_negative_zero_or_nan() {
        assert_eq!(format_counter(-0.0, 0, ""), "0");
        assert_eq!(format_counter(-0.004, 2, "%"), "0.00%");
        assert_eq!(format_counter(f64::NAN, 1, "%"), "0.0%");
        assert_eq!(format_counter(f64::INFINITY, 0, "+"), "0+");
        assert_eq!(format_counter(-2.5, 1, ""), "-2.5");
    }

    #[test]
    fn ease_out_hits_endpoints() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert_eq!(ease_out(-3.0), 0.0);
        assert_eq!(ease_out(7.0), 1.0);
        assert_eq!(ease_out(f64::NAN), 0.0);
    }

    #[test]
    fn ease_out_is_monotonic_and_front_loaded() {
        let mut previous = 0.0;
        for step in 1..=100 {
            let x = step as f64 / 100.0;
            let y = ease_out(x);
            assert!(y + 1e-9 >= previous, "ease_out dipped at {x}: {y} < {previous}");
            previous = y;
        }
        // An ease-out curve is ahead of linear progress in the middle.
        assert!(ease_out(0.5) > 0.5);
        assert!(ease_out(0.25) > 0.25);
    }

    #[test]
    fn linear_bezier_is_identity() {
        let linear = CubicBezier::new(0.25, 0.25, 0.75, 0.75);
        assert_eq!(linear.at(0.3), 0.3);
    }

    #[test]
    fn animation_starts_at_zero_and_lands_on_target() {
        let target = CounterTarget::new(10000.0).with_suffix("+");
        let animation = CounterAnimation::new(target, 1.5).unwrap();

        assert_eq!(animation.frame(0.0), "0+");
        assert_eq!(animation.frame(1.5), "10000+");
        assert_eq!(animation.frame(60.0), "10000+");
        assert!(animation.is_finished(1.5));
        assert!(!animation.is_finished(1.0));

        let midway = animation.value_at(0.75);
        assert!(midway > 5000.0 && midway < 10000.0);
    }

    #[test]
    fn final_frame_matches_formatted_target() {
        let target = CounterTarget::new(99.9).with_decimals(1).with_suffix("%");
        let animation = CounterAnimation::new(target, 1.5).unwrap();
        assert_eq!(animation.frame(2.0), target.final_display());
        assert_eq!(animation.frame(2.0), "99.9%");
    }

    #[test]
    fn rejects_non_finite_target() {
        let target = CounterTarget::new(f64::NAN).with_suffix("+");
        let err = CounterAnimation::new(target, 1.5).unwrap_err();
        assert!(matches!(err, ConfigError::NonFiniteTarget(v) if v.is_nan()));

        let animation = CounterAnimation::sanitized(target, 1.5);
        assert_eq!(animation.frame(0.7), "0+");
        assert_eq!(animation.frame(1.5), "0+");
    }

    #[test]
    fn rejects_bad_duration_and_jumps_to_end() {
        let target = CounterTarget::new(500.0);
        assert_eq!(
            CounterAnimation::new(target, -1.0),
            Err(ConfigError::InvalidDuration(-1.0))
        );
        assert!(CounterAnimation::new(target, f64::INFINITY).is_err());

        let animation = CounterAnimation::sanitized(target, -1.0);
        assert!(animation.is_finished(0.0));
        assert_eq!(animation.frame(0.0), "500");
    }

    #[test]
    fn nan_elapsed_time_holds_at_start() {
        let animation = CounterAnimation::new(CounterTarget::new(42.0), 1.5).unwrap();
        assert_eq!(animation.progress(f64::NAN), 0.0);
        assert_eq!(animation.frame(f64::NAN), "0");
    }
}
