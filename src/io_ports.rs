//! Pin table for the Portenta C33, from `R7FA6M5BH3CFC.pincfg`.

use portenta_c33::{
    board,
    pin::{NUM_PORTS, PortPin},
    pin_table, security,
};
use ra_fsp_rs::ioport::{
    IoPortConfig, e_bsp_io_port_pin_t::*, e_ioport_cfg_options::*, e_ioport_peripheral::*,
    ioport_cfg_t, ioport_pin_cfg_t,
};

pub const LED1: PortPin = PortPin::from_raw(BSP_IO_PORT_01_PIN_07 as u16);
pub const SW1: PortPin = PortPin::from_raw(BSP_IO_PORT_04_PIN_08 as u16);

const _: () = assert!(LED1.raw() == board::LED1.raw(), "LED1 does not match the board");
const _: () = assert!(SW1.raw() == board::SW1.raw(), "SW1 does not match the board");

const PIN_DATA: &[ioport_pin_cfg_t] = &[
    // LED1, starts off
    ioport_pin_cfg_t {
        pin: BSP_IO_PORT_01_PIN_07,
        pin_cfg: IOPORT_CFG_PORT_DIRECTION_OUTPUT | IOPORT_CFG_PORT_OUTPUT_HIGH,
    },
    // SWDIO
    ioport_pin_cfg_t {
        pin: BSP_IO_PORT_01_PIN_08,
        pin_cfg: IOPORT_CFG_PERIPHERAL_PIN | IOPORT_PERIPHERAL_DEBUG,
    },
    // SWCLK
    ioport_pin_cfg_t {
        pin: BSP_IO_PORT_03_PIN_00,
        pin_cfg: IOPORT_CFG_PERIPHERAL_PIN | IOPORT_PERIPHERAL_DEBUG,
    },
    // USB_VBUS
    ioport_pin_cfg_t {
        pin: BSP_IO_PORT_04_PIN_07,
        pin_cfg: IOPORT_CFG_PERIPHERAL_PIN | IOPORT_PERIPHERAL_USB_FS,
    },
    // SW1
    ioport_pin_cfg_t {
        pin: BSP_IO_PORT_04_PIN_08,
        pin_cfg: IOPORT_CFG_PORT_DIRECTION_INPUT | IOPORT_CFG_PULLUP_ENABLE,
    },
];

pub static BSP_PIN_CFG: ioport_cfg_t = IoPortConfig::new(PIN_DATA).c_conf();

const PINS: [PortPin; PIN_DATA.len()] = {
    let mut pins = [PortPin::from_raw(0); PIN_DATA.len()];
    let mut i = 0;
    while i < PIN_DATA.len() {
        pins[i] = PortPin::from_raw(PIN_DATA[i].pin as u16);
        i += 1;
    }
    pins
};

const _: () = pin_table::assert_valid(&PINS);
const _: () = {
    assert!(PINS.len() == board::PIN_TABLE.len(), "Pin table does not match the board");
    let mut i = 0;
    while i < PINS.len() {
        assert!(
            PINS[i].raw() == board::PIN_TABLE[i].raw(),
            "Pin table does not match the board"
        );
        i += 1;
    }
};

/// Port security attribution for the pins above.
pub const PMSAR: [u16; NUM_PORTS] = security::pmsar_masks(&PINS);
