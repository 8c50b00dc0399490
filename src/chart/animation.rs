//! Per-segment presentation state and the motion laws that move it.
//!
//! Nothing here advances on its own: every value changes only inside
//! [`SegmentAnimation::advance`], which the host calls once per frame.
//!
//! Two laws are in play:
//! - [`Tween`]: a time-bounded ease-out, used for magnitude and the mount reveal.
//!   It converges monotonically and never overshoots.
//! - [`Spring`]: a damped harmonic oscillator, used for the selection lift,
//!   integrated as `x'' = (-k(x - target) - c·x') / m`.

use super::{MAGNITUDE_DURATION_MS, SPRING_DAMPING, SPRING_MASS, SPRING_STIFFNESS};
use std::time::Duration;

/// Longest frame a single `advance` call integrates. Longer gaps slow the motion down
/// instead of destabilizing the spring.
const MAX_FRAME: Duration = Duration::from_millis(64);

/// Spring integration step, in seconds.
const SPRING_SUBSTEP: f64 = 0.004;
/// Smallest step a stiff spring may shrink to, bounding the work per frame.
const MIN_SPRING_SUBSTEP: f64 = 0.000_05;

/// The spring snaps to rest once it is this close to its target...
const SPRING_REST_DISPLACEMENT: f64 = 0.01;
/// ...and moving slower than this (units per second).
const SPRING_REST_SPEED: f64 = 2.0;

/// Cubic ease-out over `t` in `[0, 1]`: fast start, gentle landing.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t1 = t.clamp(0.0, 1.0) - 1.0;
    (t1 * t1).mul_add(t1, 1.0)
}

/// A timed transition toward a target value.
///
/// Retargeting restarts the clock from wherever the value currently is, so the
/// curve stays continuous and never jumps back to an old origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: f64,
    current: f64,
    target: f64,
    elapsed: Duration,
    duration: Duration,
    running: bool,
}

impl Tween {
    pub fn at_rest(value: f64, duration: Duration) -> Self {
        Self {
            from: value,
            current: value,
            target: value,
            elapsed: Duration::ZERO,
            duration,
            running: false,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        !self.running
    }

    pub fn retarget(&mut self, target: f64) {
        if target == self.target {
            return;
        }
        self.from = self.current;
        self.target = target;
        self.elapsed = Duration::ZERO;
        self.running = true;
    }

    pub fn advance(&mut self, dt: Duration) {
        if !self.running {
            return;
        }
        if self.duration.is_zero() {
            self.finish();
            return;
        }

        self.elapsed = (self.elapsed + dt).min(self.duration);
        if self.elapsed >= self.duration {
            self.finish();
            return;
        }

        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.current = (self.target - self.from).mul_add(ease_out_cubic(t), self.from);
    }

    fn finish(&mut self) {
        self.current = self.target;
        self.from = self.target;
        self.running = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
        }
    }
}

impl SpringParams {
    /// Replaces non-physical values with the defaults so the spring always comes to
    /// rest. Every field must be finite and strictly positive; a spring without
    /// damping oscillates forever and one without stiffness never reaches its target.
    /// Parameters too stiff to integrate within [`MIN_SPRING_SUBSTEP`] fall back whole.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let positive = |v: f64| v.is_finite() && v > 0.0;

        let stiffness = if positive(self.stiffness) {
            self.stiffness
        } else {
            defaults.stiffness
        };
        let damping = if positive(self.damping) {
            self.damping
        } else {
            defaults.damping
        };
        let mass = if positive(self.mass) {
            self.mass
        } else {
            defaults.mass
        };

        let params = Self {
            stiffness,
            damping,
            mass,
        };
        if params.substep() < MIN_SPRING_SUBSTEP {
            log::warn!("Spring {:?} is too stiff to integrate, using defaults", params);
            return defaults;
        }
        params
    }

    /// Largest integration step that keeps semi-implicit Euler stable for these
    /// parameters: `h·(sqrt(k/m) + c/m) <= 1`, capped at [`SPRING_SUBSTEP`].
    pub fn substep(&self) -> f64 {
        let rate = (self.stiffness / self.mass).sqrt() + self.damping / self.mass;
        if rate.is_finite() && rate > 0.0 {
            SPRING_SUBSTEP.min(rate.recip())
        } else {
            SPRING_SUBSTEP
        }
    }
}

/// Damped spring toward a target. Retargeting keeps position and velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    params: SpringParams,
}

impl Spring {
    pub fn at_rest(value: f64, params: SpringParams) -> Self {
        Self {
            position: value,
            velocity: 0.0,
            target: value,
            params: params.sanitized(),
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }

    pub fn retarget(&mut self, target: f64) {
        self.target = target;
    }

    pub fn advance(&mut self, dt: Duration) {
        if self.is_settled() {
            return;
        }

        let SpringParams {
            stiffness,
            damping,
            mass,
        } = self.params;
        let substep = self.params.substep();
        let mut remaining = dt.min(MAX_FRAME).as_secs_f64();
        while remaining > 0.0 {
            let h = remaining.min(substep);
            let force = -stiffness * (self.position - self.target) - damping * self.velocity;
            // semi-implicit Euler: velocity first, then position with the new velocity
            self.velocity += force / mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        if (self.position - self.target).abs() < SPRING_REST_DISPLACEMENT
            && self.velocity.abs() < SPRING_REST_SPEED
        {
            self.position = self.target;
            self.velocity = 0.0;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationParams {
    pub magnitude_duration: Duration,
    pub reveal_duration: Duration,
    pub spring: SpringParams,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            magnitude_duration: Duration::from_millis(MAGNITUDE_DURATION_MS),
            reveal_duration: Duration::ZERO,
            spring: SpringParams::default(),
        }
    }
}

/// Presentation state of one segment: how large it currently looks, how far it is
/// lifted out of the circle, and how much of its span has been revealed.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentAnimation {
    magnitude: Tween,
    offset: Spring,
    reveal: Tween,
}

impl SegmentAnimation {
    pub fn new(magnitude_factor: f64, params: &AnimationParams) -> Self {
        let reveal = if params.reveal_duration.is_zero() {
            Tween::at_rest(1.0, Duration::ZERO)
        } else {
            let mut reveal = Tween::at_rest(0.0, params.reveal_duration);
            reveal.retarget(1.0);
            reveal
        };

        Self {
            magnitude: Tween::at_rest(magnitude_factor, params.magnitude_duration),
            offset: Spring::at_rest(0.0, params.spring),
            reveal,
        }
    }

    pub fn current_magnitude(&self) -> f64 {
        self.magnitude.current()
    }

    pub fn target_magnitude(&self) -> f64 {
        self.magnitude.target()
    }

    pub fn current_offset(&self) -> f64 {
        self.offset.position()
    }

    pub fn target_offset(&self) -> f64 {
        self.offset.target()
    }

    pub fn offset_velocity(&self) -> f64 {
        self.offset.velocity()
    }

    /// Fraction of the angular span currently drawn, in `[0, 1]`.
    pub fn reveal_progress(&self) -> f64 {
        self.reveal.current()
    }

    pub fn retarget_magnitude(&mut self, target: f64) {
        self.magnitude.retarget(target);
    }

    pub fn retarget_offset(&mut self, target: f64) {
        self.offset.retarget(target);
    }

    pub fn advance(&mut self, dt: Duration) {
        self.magnitude.advance(dt);
        self.offset.advance(dt);
        self.reveal.advance(dt);
    }

    pub fn is_settled(&self) -> bool {
        self.magnitude.is_settled() && self.offset.is_settled() && self.reveal.is_settled()
    }
}
