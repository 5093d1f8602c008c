use konst::{option, result::unwrap_or_else};

/// Monotonic tick rate.
pub const CLOCK_HZ: u32 = 1_000;

pub const BLINK_PERIOD_MS: u32 = parse_u32(
    option::unwrap_or!(option_env!("BLINK_PERIOD_MS"), "500"),
    "Invalid BLINK_PERIOD_MS",
);
pub const BUTTON_POLL_MS: u32 = parse_u32(
    option::unwrap_or!(option_env!("BUTTON_POLL_MS"), "10"),
    "Invalid BUTTON_POLL_MS",
);
pub const BUTTON_DEBOUNCE_SAMPLES: u8 = parse_u8(
    option::unwrap_or!(option_env!("BUTTON_DEBOUNCE_SAMPLES"), "5"),
    "Invalid BUTTON_DEBOUNCE_SAMPLES",
);

const _: () = assert!(BLINK_PERIOD_MS > 0, "BLINK_PERIOD_MS must be positive");
const _: () = assert!(BUTTON_POLL_MS > 0, "BUTTON_POLL_MS must be positive");

const fn parse_u8(s: &str, msg: &str) -> u8 {
    unwrap_or_else!(u8::from_str_radix(s, 10), |_| panic!("{}", msg))
}
const fn parse_u32(s: &str, msg: &str) -> u32 {
    unwrap_or_else!(u32::from_str_radix(s, 10), |_| panic!("{}", msg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse() {
        if option_env!("BLINK_PERIOD_MS").is_none() {
            assert_eq!(BLINK_PERIOD_MS, 500);
        }
        if option_env!("BUTTON_POLL_MS").is_none() {
            assert_eq!(BUTTON_POLL_MS, 10);
        }
        if option_env!("BUTTON_DEBOUNCE_SAMPLES").is_none() {
            assert_eq!(BUTTON_DEBOUNCE_SAMPLES, 5);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse_u32("250", "bad"), 250);
        assert_eq!(parse_u8("255", "bad"), 255);
    }

    #[test]
    #[should_panic(expected = "bad number")]
    fn test_parse_rejects_garbage() {
        parse_u32("12ms", "bad number");
    }
}
