//! The packed 32-bit routing descriptor.
//!
//! ```text
//!  31   28 27      21 20   17 16            5 4      0
//! +-------+----------+-------+---------------+--------+
//! | port  |   pin    |  sel  |  byte offset  |  pos   |
//! +-------+----------+-------+---------------+--------+
//! ```
//!
//! Direct functions carry a zero offset and position.

use silicon_common::Port;

/// One descriptor slot: name, bit position and width.
#[derive(Clone, Copy, Debug)]
pub struct Slot {
    /// Name used in error messages.
    pub name: &'static str,
    /// Least significant bit.
    pub shift: u32,
    /// Width in bits.
    pub width: u32,
}

impl Slot {
    /// Largest value the slot holds.
    pub const fn max(self) -> u32 {
        (1 << self.width) - 1
    }

    fn insert(self, value: u32) -> u32 {
        (value & self.max()) << self.shift
    }

    fn extract(self, word: u32) -> u32 {
        (word >> self.shift) & self.max()
    }
}

/// GPIO port, bits `[31:28]`.
pub const PORT: Slot = Slot { name: "port", shift: 28, width: 4 };
/// Pin index within the port, bits `[27:21]`.
pub const PIN: Slot = Slot { name: "pin", shift: 21, width: 7 };
/// Pinmux select code, bits `[20:17]`.
pub const SELECT: Slot = Slot { name: "select", shift: 17, width: 4 };
/// PINR register byte offset, bits `[16:5]`.
pub const OFFSET: Slot = Slot { name: "offset", shift: 5, width: 12 };
/// Low bit of the signal's PINR field, bits `[4:0]`.
pub const POSITION: Slot = Slot { name: "position", shift: 0, width: 5 };

/// Port/pin identity, select code and PINR location of one pad-function pair.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RoutingDescriptor {
    /// GPIO port of the pad.
    pub port: Port,
    /// Pin index of the pad within its port.
    pub pin: u8,
    /// Pinmux select code.
    pub select: u32,
    /// Byte offset of the PINR register, zero for direct functions.
    pub offset: u32,
    /// Low bit of the PINR field, zero for direct functions.
    pub field_position: u32,
}

impl RoutingDescriptor {
    /// The values in slot order, paired with their slots.
    pub fn slots(&self) -> [(Slot, u32); 5] {
        [
            (PORT, u32::from(self.port.index())),
            (PIN, u32::from(self.pin)),
            (SELECT, self.select),
            (OFFSET, self.offset),
            (POSITION, self.field_position),
        ]
    }

    /// The first slot whose value does not fit, with that value.
    pub fn overflow(&self) -> Option<(Slot, u32)> {
        self.slots().into_iter().find(|(slot, value)| *value > slot.max())
    }

    /// Packs the descriptor into one word. Values must fit their slots
    /// (see [`overflow`](Self::overflow)); excess bits are masked off.
    pub fn pack(&self) -> u32 {
        self.slots()
            .into_iter()
            .fold(0, |word, (slot, value)| word | slot.insert(value))
    }

    /// Unpacks a word produced by [`pack`](Self::pack).
    pub fn unpack(word: u32) -> Option<Self> {
        let port = Port::from_index(PORT.extract(word) as u8)?;
        Some(Self {
            port,
            pin: PIN.extract(word) as u8,
            select: SELECT.extract(word),
            offset: OFFSET.extract(word),
            field_position: POSITION.extract(word),
        })
    }
}
