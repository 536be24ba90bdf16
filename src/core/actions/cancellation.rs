use std::error::Error;
use std::fmt;

/// How many sample points a cancelable render completes between token
/// checks. Cancellation is cooperative and only ever observed between
/// points, never inside one: an orbit in flight always reaches a terminal
/// classification first.
pub const CANCEL_CHECK_INTERVAL_POINTS: usize = 256;

/// Polled between trials by cancel-aware renders. Returning `true` makes
/// the render abandon its remaining points at the next check.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

/// Token for renders that always sweep their whole rect.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Any `Send + Sync` closure returning `bool` acts as a token.
impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// Marker error for a render abandoned at a check point before covering
/// its rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "render cancelled")
    }
}

impl Error for Cancelled {}
