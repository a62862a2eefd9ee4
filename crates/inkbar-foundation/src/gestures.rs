//! Gesture types forwarded through the input bar's event surface.
//!
//! Recognition itself lives in the host toolkit; the bar only relays the
//! recognized direction to its observer.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}
