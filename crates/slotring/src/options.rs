/// Which end of the buffer pops read from.
///
/// Pushes always write at the head; the discipline only changes where pops
/// happen.
///
/// # Default
///
/// [`Discipline::Queue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Discipline {
    /// First-in, first-out: pops return the oldest element.
    #[default]
    Queue,
    /// First-in, last-out: pops return the most recently pushed element.
    Stack,
}

/// What a push does when the buffer is already full.
///
/// # Default
///
/// [`OverflowPolicy::Reject`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverflowPolicy {
    /// Refuse new elements; the push reports how many were not accepted and
    /// the resident data is untouched.
    #[default]
    Reject,
    /// Silently discard the oldest resident element to make room; pushes
    /// always succeed.
    EvictOldest,
}

/// Configuration for a [`SlotRing`](crate::SlotRing), fixed at construction.
///
/// # Examples
///
/// ```rust
/// use slotring::{Discipline, RingOptions, SlotRing};
///
/// let options = RingOptions {
///     discipline: Discipline::Stack,
///     ..Default::default()
/// };
/// let ring = SlotRing::with_options(4, 2, options).unwrap();
/// ```
///
/// # Default
///
/// Queue discipline with the reject overflow policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingOptions {
    /// Which end pops read from.
    pub discipline: Discipline,
    /// Behavior of a push against a full buffer.
    pub overflow_policy: OverflowPolicy,
}
