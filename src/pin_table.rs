use core::fmt;

use crate::pin::PortPin;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinTableError {
    PinOutOfRange(PortPin),
    DuplicatePin(PortPin),
}

impl fmt::Display for PinTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PinOutOfRange(p) => write!(f, "pin {:#06x} does not exist", p.raw()),
            Self::DuplicatePin(p) => write!(f, "pin {p} is configured twice"),
        }
    }
}

/// Checks that every pin exists and is listed at most once.
pub const fn validate(pins: &[PortPin]) -> Result<(), PinTableError> {
    let mut i = 0;
    while i < pins.len() {
        if !pins[i].is_valid() {
            return Err(PinTableError::PinOutOfRange(pins[i]));
        }
        let mut j = 0;
        while j < i {
            if pins[j].raw() == pins[i].raw() {
                return Err(PinTableError::DuplicatePin(pins[i]));
            }
            j += 1;
        }
        i += 1;
    }
    Ok(())
}

/// [`validate`] for use in `const` items; fails the build on a bad table.
pub const fn assert_valid(pins: &[PortPin]) {
    match validate(pins) {
        Ok(()) => {}
        Err(PinTableError::PinOutOfRange(_)) => panic!("Pin table references a missing pin"),
        Err(PinTableError::DuplicatePin(_)) => panic!("Pin table configures a pin twice"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{LED1, SW1};

    #[test]
    fn test_board_pins_are_valid() {
        assert_eq!(validate(&[LED1, SW1]), Ok(()));
        assert_eq!(validate(&[]), Ok(()));
    }

    #[test]
    fn test_duplicate_is_rejected() {
        let pins = [LED1, SW1, PortPin::new(1, 7)];
        assert_eq!(validate(&pins), Err(PinTableError::DuplicatePin(LED1)));
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let bad = PortPin::from_raw(0x0C00);
        assert_eq!(validate(&[LED1, bad]), Err(PinTableError::PinOutOfRange(bad)));
        let bad = PortPin::from_raw(0x0110);
        assert_eq!(validate(&[bad]), Err(PinTableError::PinOutOfRange(bad)));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            PinTableError::DuplicatePin(SW1).to_string(),
            "pin P408 is configured twice"
        );
        assert_eq!(
            PinTableError::PinOutOfRange(PortPin::from_raw(0x0C00)).to_string(),
            "pin 0x0c00 does not exist"
        );
    }

    #[test]
    #[should_panic(expected = "configures a pin twice")]
    fn test_assert_valid_panics() {
        assert_valid(&[SW1, SW1]);
    }
}
