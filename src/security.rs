//! Port security attribution for TrustZone builds.
//!
//! Every port has a `PMSAR` register; a set bit leaves that pin to the
//! non-secure world. Pins named in the board's pin table belong to the
//! secure image, everything else is released.

use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::pin::{NUM_PORTS, PortPin};

/// Reset state of a `PMSAR` register: all pins non-secure.
pub const PMSAR_NON_SECURE: u16 = 0xFFFF;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SecurityError {
    AlreadyInitialized,
}

impl fmt::Display for SecurityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyInitialized => f.write_str("pin security already initialized"),
        }
    }
}

/// `PMSAR` values for a pin table. Pins that do not exist are ignored,
/// [`crate::pin_table::validate`] reports those.
pub const fn pmsar_masks(pins: &[PortPin]) -> [u16; NUM_PORTS] {
    let mut masks = [PMSAR_NON_SECURE; NUM_PORTS];
    let mut i = 0;
    while i < pins.len() {
        let pin = pins[i];
        if pin.is_valid() {
            masks[pin.port() as usize] &= !pin.mask();
        }
        i += 1;
    }
    masks
}

/// Where the masks end up.
pub trait PortSecurity {
    fn write_pmsar(&mut self, port: usize, mask: u16);
}

/// Runs the pin security setup at most once.
pub struct SecurityInit {
    done: AtomicBool,
}

impl SecurityInit {
    pub const fn new() -> Self {
        Self {
            done: AtomicBool::new(false),
        }
    }

    pub fn run<S: PortSecurity>(
        &self,
        regs: &mut S,
        masks: &[u16; NUM_PORTS],
    ) -> Result<(), SecurityError> {
        if self.done.swap(true, Ordering::AcqRel) {
            return Err(SecurityError::AlreadyInitialized);
        }
        for (port, &mask) in masks.iter().enumerate() {
            regs.write_pmsar(port, mask);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{LED1, SW1};

    #[derive(Default)]
    struct Recorder(Vec<(usize, u16)>);

    impl PortSecurity for Recorder {
        fn write_pmsar(&mut self, port: usize, mask: u16) {
            self.0.push((port, mask));
        }
    }

    #[test]
    fn test_empty_table_releases_everything() {
        assert_eq!(pmsar_masks(&[]), [0xFFFF; NUM_PORTS]);
    }

    #[test]
    fn test_configured_pins_become_secure() {
        let masks = pmsar_masks(&[LED1, SW1, PortPin::new(1, 8)]);
        assert_eq!(masks[1], !((1 << 7) | (1 << 8)));
        assert_eq!(masks[4], !(1 << 8));
        for (port, mask) in masks.iter().enumerate() {
            if port != 1 && port != 4 {
                assert_eq!(*mask, 0xFFFF, "port {port}");
            }
        }
    }

    #[test]
    fn test_invalid_pins_are_skipped() {
        let masks = pmsar_masks(&[PortPin::from_raw(0x0C00), PortPin::from_raw(0x0010)]);
        assert_eq!(masks, [0xFFFF; NUM_PORTS]);
    }

    #[test]
    fn test_run_writes_every_port_in_order() {
        let init = SecurityInit::new();
        let masks = pmsar_masks(&[LED1]);
        let mut regs = Recorder::default();

        init.run(&mut regs, &masks).unwrap();

        let expected: Vec<_> = masks.iter().copied().enumerate().collect();
        assert_eq!(regs.0, expected);
    }

    #[test]
    fn test_second_run_is_rejected() {
        let init = SecurityInit::new();
        let masks = pmsar_masks(&[SW1]);
        let mut regs = Recorder::default();

        init.run(&mut regs, &masks).unwrap();
        regs.0.clear();

        assert_eq!(init.run(&mut regs, &masks), Err(SecurityError::AlreadyInitialized));
        assert!(regs.0.is_empty());
    }
}
