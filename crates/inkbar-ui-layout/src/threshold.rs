//! Clamp threshold policy.
//!
//! Decides the effective height of the input surface from its natural height
//! and the current maximum, and whether the bar is in clamped mode (content
//! scrolls internally instead of growing the bar).

/// Threshold configuration and the last decision's clamped flag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdState {
    /// Current height cap. Recomputed from display metrics when auto
    /// tracking is on, otherwise fixed by the host.
    pub max_height: f32,
    /// True when the last decision met or exceeded `max_height`.
    pub is_clamped: bool,
    /// Host override that pins scroll/constraint into clamped mode
    /// independent of measurement. Never alters the effective height.
    pub force_clamped: bool,
}

impl ThresholdState {
    /// Initial state with the given cap, unclamped.
    pub fn new(max_height: f32) -> Self {
        Self {
            max_height,
            is_clamped: false,
            force_clamped: false,
        }
    }
}

/// Outcome of a threshold decision.
///
/// `scroll_enabled` and `cap_active` are always computed so application is
/// idempotent; `is_transition` marks the edge where applying them to the host
/// actually changes anything.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdDecision {
    /// Height the content surface actually gets: natural height, capped.
    pub effective_height: f32,
    /// Whether natural height met or exceeded the cap.
    pub clamped: bool,
    /// Internal scrolling on the content surface.
    pub scroll_enabled: bool,
    /// Whether the height-capping constraint should be active.
    pub cap_active: bool,
    /// True when `clamped` differs from the previous clamped flag.
    pub is_transition: bool,
}

/// Decides the effective height and clamp mode.
///
/// When natural height reaches the cap the surface stops growing and scrolls
/// internally. Below the cap the surface tracks its content, unless
/// `force_clamped` pins scrolling and the cap constraint on.
pub fn decide(
    natural_height: f32,
    max_height: f32,
    currently_clamped: bool,
    force_clamped: bool,
) -> ThresholdDecision {
    if natural_height >= max_height {
        ThresholdDecision {
            effective_height: max_height,
            clamped: true,
            scroll_enabled: true,
            cap_active: true,
            is_transition: !currently_clamped,
        }
    } else {
        ThresholdDecision {
            effective_height: natural_height,
            clamped: false,
            scroll_enabled: force_clamped,
            cap_active: force_clamped,
            is_transition: currently_clamped,
        }
    }
}
