use core::fmt;

/// Ports `P0`..`PB` on the 176-pin package.
pub const NUM_PORTS: usize = 12;
pub const PINS_PER_PORT: u8 = 16;

/// A pin in the FSP `bsp_io_port_pin_t` encoding: port in the high byte,
/// pin in the low byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PortPin(u16);

impl PortPin {
    pub const fn new(port: u8, pin: u8) -> Self {
        Self(((port as u16) << 8) | pin as u16)
    }

    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    pub const fn port(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn pin(self) -> u8 {
        self.0 as u8
    }

    /// Whether the pin is in the encodable range (`P000`..`PB15`). Some of
    /// those pins are not bonded out on this package.
    pub const fn is_valid(self) -> bool {
        (self.port() as usize) < NUM_PORTS && self.pin() < PINS_PER_PORT
    }

    /// Bit of this pin in its port's 16-bit registers.
    ///
    /// Only meaningful for valid pins.
    pub const fn mask(self) -> u16 {
        1 << (self.pin() & 0xF)
    }
}

impl fmt::Display for PortPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{:X}{:02}", self.port(), self.pin())
    }
}
