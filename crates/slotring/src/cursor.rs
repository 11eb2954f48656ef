/// A position within the backing store, kept in slot-indexed form.
///
/// `slot < slot_count` and `byte < width` hold structurally, so cursor
/// arithmetic can never produce a byte offset outside the store. The flat
/// byte offset of a cursor is `slot * width + byte`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Cursor {
    slot: usize,
    byte: usize,
}

impl Cursor {
    /// The first byte of the first slot.
    pub(crate) fn origin() -> Self {
        Self { slot: 0, byte: 0 }
    }

    /// Flat byte offset into the store.
    pub(crate) fn offset(self, width: usize) -> usize {
        self.slot * width + self.byte
    }

    /// Move one byte forward, rolling into the next slot at a slot boundary
    /// and wrapping from the last slot back to the first.
    pub(crate) fn advance(&mut self, slots: usize, width: usize) {
        self.byte += 1;
        if self.byte == width {
            self.byte = 0;
            self.slot = if self.slot + 1 == slots { 0 } else { self.slot + 1 };
        }
    }

    /// Move one byte backward, rolling into the previous slot at a slot
    /// boundary and wrapping from the first slot to the last.
    pub(crate) fn retreat(&mut self, slots: usize, width: usize) {
        if self.byte == 0 {
            self.byte = width - 1;
            self.slot = if self.slot == 0 { slots - 1 } else { self.slot - 1 };
        } else {
            self.byte -= 1;
        }
    }

    /// Index of the slot circularly after this cursor's slot.
    pub(crate) fn next_slot(self, slots: usize) -> usize {
        if self.slot + 1 == slots { 0 } else { self.slot + 1 }
    }

    /// Slot index this cursor currently occupies.
    pub(crate) fn slot(self) -> usize {
        self.slot
    }

    /// Intra-slot byte index.
    pub(crate) fn byte(self) -> usize {
        self.byte
    }
}
