//! A fixed-capacity circular buffer holding elements of a uniform,
//! caller-chosen byte width.
//!
//! [`SlotRing`] is configured at creation along two independent axes: the
//! [`Discipline`] decides which end pops read from (queue: oldest first;
//! stack: most recently pushed first), and the [`OverflowPolicy`] decides
//! what a push does when the buffer is full (reject the new data, or evict
//! the oldest resident data to make room). Both are fixed for the buffer's
//! lifetime, as are its element capacity and element width.
//!
//! The crate is `no_std` (plus `alloc`) and allocates exactly once, at
//! construction. It is aimed at resource-constrained targets where a
//! general-purpose growable collection is unwelcome and overflow behavior
//! must be explicit.
//!
//! ```rust
//! use slotring::SlotRing;
//!
//! let mut ring = SlotRing::new(3, 2).unwrap();
//! assert_eq!(ring.push(&[0x01, 0x02, 0x03, 0x04], 2), 0);
//!
//! let mut out = [0u8; 4];
//! assert_eq!(ring.pop(&mut out, 2), 0);
//! assert_eq!(out, [0x01, 0x02, 0x03, 0x04]);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod cursor;
mod error;
mod options;
mod ring;

#[cfg(test)]
mod tests;

pub use error::RingError;
pub use options::{Discipline, OverflowPolicy, RingOptions};
pub use ring::SlotRing;
