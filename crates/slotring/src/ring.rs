use alloc::{boxed::Box, vec::Vec};

use crate::{
    cursor::Cursor,
    error::RingError,
    options::{Discipline, OverflowPolicy, RingOptions},
};

/// A fixed-capacity circular buffer of fixed-width byte elements.
///
/// The backing store holds `capacity + 1` slots of `width` bytes; the extra
/// slot is a sentinel that never carries caller data and exists so that
/// `head == tail` can unambiguously mean "empty". Data moves through the
/// buffer one byte at a time, which is what lets a push or pop that runs out
/// of room mid-element unwind cleanly: every call either transfers whole
/// elements or leaves the buffer exactly as it found it for the elements
/// that did not fit.
///
/// The buffer never reallocates after construction, and its store is
/// released when the value is dropped.
///
/// ```rust
/// use slotring::{Discipline, OverflowPolicy, RingOptions, SlotRing};
///
/// let options = RingOptions {
///     discipline: Discipline::Stack,
///     overflow_policy: OverflowPolicy::Reject,
/// };
/// let mut ring = SlotRing::with_options(3, 1, options).unwrap();
/// ring.push(&[1, 2, 3], 3);
///
/// let mut out = [0u8; 3];
/// assert_eq!(ring.pop(&mut out, 3), 0);
/// assert_eq!(out, [3, 2, 1]);
/// ```
#[derive(Debug)]
pub struct SlotRing {
    store: Box<[u8]>,
    head: Cursor,
    tail: Cursor,
    slots: usize,
    width: usize,
    discipline: Discipline,
    overflow: OverflowPolicy,
}

impl SlotRing {
    /// Creates a buffer for `capacity` elements of `width` bytes each, with
    /// the default options (queue discipline, reject on overflow).
    ///
    /// # Errors
    ///
    /// Returns [`RingError::ZeroCapacity`] or [`RingError::ZeroWidth`] if
    /// either dimension is zero, and [`RingError::AllocFailed`] if the
    /// backing store cannot be allocated.
    pub fn new(capacity: usize, width: usize) -> Result<Self, RingError> {
        Self::with_options(capacity, width, RingOptions::default())
    }

    /// Creates a buffer for `capacity` elements of `width` bytes each.
    ///
    /// The store is allocated once, zero-initialized, sized for one slot
    /// more than the requested capacity (the sentinel slot).
    ///
    /// # Errors
    ///
    /// Returns [`RingError::ZeroCapacity`] or [`RingError::ZeroWidth`] if
    /// either dimension is zero, and [`RingError::AllocFailed`] if the
    /// backing store cannot be allocated.
    pub fn with_options(
        capacity: usize,
        width: usize,
        options: RingOptions,
    ) -> Result<Self, RingError> {
        if capacity == 0 {
            return Err(RingError::ZeroCapacity);
        }
        if width == 0 {
            return Err(RingError::ZeroWidth);
        }

        // A size that overflows usize can never be satisfied either.
        let bytes = capacity
            .checked_add(1)
            .and_then(|slots| slots.checked_mul(width))
            .ok_or(RingError::AllocFailed { capacity, width })?;

        let mut store = Vec::new();
        store
            .try_reserve_exact(bytes)
            .map_err(|_| RingError::AllocFailed { capacity, width })?;
        store.resize(bytes, 0);

        Ok(Self {
            store: store.into_boxed_slice(),
            head: Cursor::origin(),
            tail: Cursor::origin(),
            slots: capacity + 1,
            width,
            discipline: options.discipline,
            overflow: options.overflow_policy,
        })
    }

    /// `true` if no elements are resident.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// `true` if the buffer holds `capacity` elements.
    ///
    /// Equivalently: advancing `head` by one full slot would land it on
    /// `tail`, i.e. only the sentinel slot separates them.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.tail.slot() == self.head.next_slot(self.slots) && self.tail.byte() == self.head.byte()
    }

    /// Number of elements currently resident.
    #[must_use]
    pub fn len(&self) -> usize {
        let store_len = self.slots * self.width;
        let head = self.head.offset(self.width);
        let tail = self.tail.offset(self.width);
        (head + store_len - tail) % store_len / self.width
    }

    /// Maximum number of resident elements.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots - 1
    }

    /// Byte width of one element.
    #[must_use]
    pub fn element_width(&self) -> usize {
        self.width
    }

    /// The discipline chosen at construction.
    #[must_use]
    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    /// The overflow policy chosen at construction.
    #[must_use]
    pub fn overflow_policy(&self) -> OverflowPolicy {
        self.overflow
    }

    /// Discards all resident elements without touching the store.
    pub fn clear(&mut self) {
        self.head = Cursor::origin();
        self.tail = Cursor::origin();
    }

    /// Pushes up to `count` elements from `src` and returns the number of
    /// elements *not* accepted (0 on full success).
    ///
    /// Elements are transferred in order, atomically: if the buffer fills up
    /// under [`OverflowPolicy::Reject`], any bytes already written for the
    /// element in flight are unwound, earlier elements stay resident, and
    /// the interrupted element counts toward the failure total. Under
    /// [`OverflowPolicy::EvictOldest`] the oldest resident element is
    /// silently dropped to make room and the return value is always 0.
    ///
    /// # Panics
    ///
    /// Panics if `src` is shorter than `count * element_width` bytes.
    pub fn push(&mut self, src: &[u8], count: usize) -> usize {
        assert!(
            count
                .checked_mul(self.width)
                .is_some_and(|needed| src.len() >= needed),
            "source region shorter than count * element_width"
        );

        for element in 0..count {
            for byte in 0..self.width {
                if self.is_full() && self.overflow == OverflowPolicy::Reject {
                    // Unwind the partial element so the buffer reads as if
                    // this element was never attempted. Pops never observe a
                    // byte under a retreated head, so no bytes need erasing.
                    for _ in 0..byte {
                        self.head.retreat(self.slots, self.width);
                    }
                    return count - element;
                }
                self.push_byte(src[element * self.width + byte]);
            }
        }
        0
    }

    /// Pops up to `count` elements into `dst` and returns the number of
    /// elements *not* produced (0 on full success).
    ///
    /// Under [`Discipline::Queue`], elements arrive oldest first with their
    /// bytes in the order they were pushed. Under [`Discipline::Stack`],
    /// elements arrive newest first; the buffer yields each element's bytes
    /// in reverse push order, and `pop` re-reverses them so every element
    /// lands in `dst` with its original internal byte order.
    ///
    /// If the buffer runs empty mid-element, the bytes already popped for
    /// that element are pushed back (restoring the prior contents exactly)
    /// and the interrupted element counts toward the failure total. Fully
    /// produced elements stay in `dst`.
    ///
    /// # Panics
    ///
    /// Panics if `dst` is shorter than `count * element_width` bytes.
    pub fn pop(&mut self, dst: &mut [u8], count: usize) -> usize {
        assert!(
            count
                .checked_mul(self.width)
                .is_some_and(|needed| dst.len() >= needed),
            "destination region shorter than count * element_width"
        );

        for element in 0..count {
            let base = element * self.width;
            for byte in 0..self.width {
                if self.is_empty() {
                    self.restore_partial_element(dst, base, byte);
                    return count - element;
                }
                let value = self.pop_byte();
                let offset = match self.discipline {
                    Discipline::Queue => base + byte,
                    // Stack pops yield bytes newest-first; mirror them so the
                    // element's own byte order survives the round trip.
                    Discipline::Stack => base + self.width - 1 - byte,
                };
                dst[offset] = value;
            }
        }
        0
    }

    /// Pushes back the `popped` bytes of an element interrupted mid-pop,
    /// re-reading them from where `pop` staged them in `dst` at `base`.
    ///
    /// The bytes must re-enter the buffer in their original storage order,
    /// without the stack's byte mirroring, so the restore path is the one
    /// place that unpicks the placement logic of [`Self::pop`].
    fn restore_partial_element(&mut self, dst: &[u8], base: usize, popped: usize) {
        match self.discipline {
            // Queue bytes were staged in storage order already.
            Discipline::Queue => {
                for i in 0..popped {
                    self.push_byte(dst[base + i]);
                }
            }
            // The i-th stack byte was staged at the mirrored offset, and the
            // last byte popped is the first to go back under the head.
            Discipline::Stack => {
                for i in (0..popped).rev() {
                    self.push_byte(dst[base + self.width - 1 - i]);
                }
            }
        }
    }

    /// Writes one byte at `head` and advances it. When the buffer is full
    /// and eviction is enabled, `tail` is advanced first so `head` never
    /// collides with it; a full element's worth of those single-byte
    /// sacrifices adds up to evicting exactly the oldest element.
    fn push_byte(&mut self, value: u8) {
        if self.is_full() && self.overflow == OverflowPolicy::EvictOldest {
            self.tail.advance(self.slots, self.width);
        }
        self.store[self.head.offset(self.width)] = value;
        self.head.advance(self.slots, self.width);
    }

    /// Reads one byte from the pop end. Stacks retreat `head` first (it
    /// points one past the last written byte); queues read under `tail` and
    /// then advance it. The caller guarantees the buffer is not empty.
    fn pop_byte(&mut self) -> u8 {
        match self.discipline {
            Discipline::Stack => {
                self.head.retreat(self.slots, self.width);
                self.store[self.head.offset(self.width)]
            }
            Discipline::Queue => {
                let value = self.store[self.tail.offset(self.width)];
                self.tail.advance(self.slots, self.width);
                value
            }
        }
    }
}
