//! Pin map of the Portenta C33 as wired on the board.

use crate::pin::PortPin;

pub const PART_NUMBER: &str = "R7FA6M5BH3CFC";
/// Pin configurator project the pin table was taken from.
pub const PINCFG: &str = "R7FA6M5BH3CFC.pincfg";

/// Red LED, `BSP_IO_PORT_01_PIN_07`.
pub const LED1: PortPin = PortPin::new(1, 7);
/// User button, `BSP_IO_PORT_04_PIN_08`.
pub const SW1: PortPin = PortPin::new(4, 8);

/// Pin level that lights the LED.
pub const LED_STATE_ON: bool = false;
/// Pin level read while the button is held.
pub const BUTTON_STATE_ACTIVE: bool = false;

/// Pins claimed by the board's pin table, in table order.
pub const PIN_TABLE: [PortPin; 5] = [
    LED1,
    // SWDIO, SWCLK
    PortPin::new(1, 8),
    PortPin::new(3, 0),
    // USB_VBUS
    PortPin::new(4, 7),
    SW1,
];

pub const LED: Led = Led::new(LED1, LED_STATE_ON);
pub const BUTTON: Button = Button::new(SW1, BUTTON_STATE_ACTIVE);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Led {
    pub pin: PortPin,
    on_level: bool,
}

impl Led {
    pub const fn new(pin: PortPin, on_level: bool) -> Self {
        Self { pin, on_level }
    }

    /// Value for the port's `PCNTR3` register: the low half sets pins,
    /// the high half resets them.
    pub const fn pcntr3(self, on: bool) -> u32 {
        let mask = self.pin.mask() as u32;
        if on == self.on_level { mask } else { mask << 16 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Button {
    pub pin: PortPin,
    active_level: bool,
}

impl Button {
    pub const fn new(pin: PortPin, active_level: bool) -> Self {
        Self { pin, active_level }
    }

    /// `pidr` is the port input data (`PCNTR2` bits 0..15).
    pub const fn is_pressed(self, pidr: u16) -> bool {
        (pidr & self.pin.mask() != 0) == self.active_level
    }
}
