//! Easing curves and animation specs for Inkbar
//!
//! The input bar itself never runs an animation loop; it hands an
//! [`AnimationSpec`] to the host's layout binding, which drives the actual
//! frames. The curves here exist so hosts and tests agree on what a
//! transition should look like.

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * f64::from(fraction)
    }
}

/// Easing functions for constraint transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Ease in and out using a cubic curve.
    EaseInOut,
    /// Fast out, slow in (material design standard).
    FastOutSlowIn,
}

impl Easing {
    /// Apply the easing function to a linear fraction in [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction.clamp(0.0, 1.0),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
        }
    }
}

/// Cubic bezier curve approximation for easing.
///
/// Solves for the parameter t where the curve's x equals `fraction` by
/// bisection, then evaluates y at that t. Endpoint fractions short-circuit so
/// transitions start and end exactly on their targets.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let sample = |p1: f32, p2: f32, t: f32| {
        let one_minus = 1.0 - t;
        3.0 * one_minus * one_minus * t * p1 + 3.0 * one_minus * t * t * p2 + t * t * t
    };

    let mut lo = 0.0_f32;
    let mut hi = 1.0_f32;
    let mut t = fraction;
    for _ in 0..32 {
        let x = sample(x1, x2, t);
        if (x - fraction).abs() < 1e-5 {
            break;
        }
        if x < fraction {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) * 0.5;
    }

    sample(y1, y2, t)
}

/// How a constraint transition should be driven by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSpec {
    pub duration_ms: u64,
    pub easing: Easing,
}

impl AnimationSpec {
    pub const fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }

    /// Zero-duration spec: the change applies on the next frame without
    /// interpolation.
    pub const fn immediate() -> Self {
        Self::new(0, Easing::Linear)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::new(200, Easing::FastOutSlowIn)
    }
}
