#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Pressed,
    Released,
}

/// Accepts a new level only after `threshold` identical samples in a row.
#[derive(Debug)]
pub struct Debouncer {
    threshold: u8,
    stable: bool,
    candidate: bool,
    count: u8,
}

impl Debouncer {
    /// Starts out released. A `threshold` of 0 behaves like 1.
    pub const fn new(threshold: u8) -> Self {
        Self {
            threshold: if threshold == 0 { 1 } else { threshold },
            stable: false,
            candidate: false,
            count: 0,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.stable
    }

    pub fn update(&mut self, pressed: bool) -> Option<Edge> {
        if pressed == self.stable {
            self.count = 0;
            return None;
        }
        if pressed != self.candidate {
            self.candidate = pressed;
            self.count = 0;
        }
        self.count += 1;
        if self.count < self.threshold {
            return None;
        }

        self.stable = pressed;
        self.count = 0;
        Some(if pressed { Edge::Pressed } else { Edge::Released })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_needs_threshold_samples() {
        let mut d = Debouncer::new(3);
        assert_eq!(d.update(true), None);
        assert_eq!(d.update(true), None);
        assert_eq!(d.update(true), Some(Edge::Pressed));
        assert!(d.is_pressed());
        assert_eq!(d.update(true), None);
    }

    #[test]
    fn test_bounce_restarts_count() {
        let mut d = Debouncer::new(3);
        assert_eq!(d.update(true), None);
        assert_eq!(d.update(true), None);
        assert_eq!(d.update(false), None);
        assert_eq!(d.update(true), None);
        assert_eq!(d.update(true), None);
        assert!(!d.is_pressed());
        assert_eq!(d.update(true), Some(Edge::Pressed));
    }

    #[test]
    fn test_release() {
        let mut d = Debouncer::new(2);
        d.update(true);
        d.update(true);
        assert_eq!(d.update(false), None);
        assert_eq!(d.update(false), Some(Edge::Released));
        assert!(!d.is_pressed());
    }

    #[test]
    fn test_zero_threshold() {
        let mut d = Debouncer::new(0);
        assert_eq!(d.update(true), Some(Edge::Pressed));
        assert_eq!(d.update(false), Some(Edge::Released));
    }
}
