use portenta_c33::{
    pin::NUM_PORTS,
    security::{PortSecurity, SecurityInit},
};
use ra_fsp_rs::pac;

use crate::{io_ports, log::*};

struct Pmsar(pac::PMISC);

impl PortSecurity for Pmsar {
    fn write_pmsar(&mut self, port: usize, mask: u16) {
        assert!(port < NUM_PORTS);
        self.0.pmsar(port).write(|w| unsafe { w.bits(mask) });
    }
}

static SECURITY_INIT: SecurityInit = SecurityInit::new();

/// Claims the pins of [`io_ports::BSP_PIN_CFG`] for the secure image and
/// releases every other pin. Must run before the IOPort driver opens.
pub fn pin_config_security_init() {
    // Safety: PMISC is only written here, once, before the IOPort driver opens.
    let mut regs = Pmsar(unsafe { pac::PMISC::steal() });
    match SECURITY_INIT.run(&mut regs, &io_ports::PMSAR) {
        Ok(()) => debug!("PMSAR: {:04x?}", io_ports::PMSAR),
        Err(e) => warn!("{}", e),
    }
}
