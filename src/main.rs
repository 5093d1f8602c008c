#![no_main]
#![no_std]

/*

Portenta C33 bring-up: pin security, IOPort, then LED1 blinks and SW1
switches the blink rate.

Run with debugger attached (RTT).

*/

use ra_fsp_rs::pac;

mod io_ports;
#[cfg(not(feature = "log"))]
mod log_none;
#[cfg(feature = "log")]
mod log_rtt;
mod pin_security;

mod log {
    #![allow(unused_imports)]

    pub use crate::debug;
    pub use crate::error;
    pub use crate::info;
    pub use crate::trace;
    pub use crate::warn;
}

use portenta_c33::{
    board::{self, BUTTON, LED},
    button::{Debouncer, Edge},
    conf::{BLINK_PERIOD_MS, BUTTON_DEBOUNCE_SAMPLES, BUTTON_POLL_MS, CLOCK_HZ},
};
use ra_fsp_rs::ioport::IoPort;
use ra_fsp_rs::pin_init::InPlaceWrite;
#[allow(unused_imports)]
use rtic::mutex_prelude::*;
use rtic_monotonics::systick::prelude::*;

#[cfg(not(feature = "log"))]
use log_none as logger_setup;
#[cfg(feature = "log")]
use log_rtt as logger_setup;

type Ticks = u32;

systick_monotonic!(Mono, CLOCK_HZ);

const FAST_BLINK_DIVISOR: Ticks = 4;

fn init(ctx: app::init::Context) -> (app::Shared, app::Local) {
    logger_setup::init();

    log::info!("Init start on {} ({})", board::PART_NUMBER, board::PINCFG);
    log::info!("LED1 = {}, SW1 = {}", io_ports::LED1, io_ports::SW1);

    pin_security::pin_config_security_init();

    let io_port = IoPort::new(ctx.device.PORT0, io_ports::BSP_PIN_CFG);
    let Ok(mut io_port) = ctx.local.io_port.write_pin_init(io_port);

    io_port.as_mut().open().expect("Failed to open ioports");

    Mono::start(ctx.core.SYST, ra_fsp_rs::systick::system_core_clock(ctx.cs));

    app::blinky::spawn(ctx.device.PORT1).unwrap();
    app::button::spawn(ctx.device.PORT4).unwrap();

    log::info!("Init done");

    (app::Shared { fast_blink: false }, app::Local {})
}

#[rtic::app(
  device = pac,
  dispatchers = [IEL95, IEL94],
  peripherals = true
)]
mod app {
    use core::mem::MaybeUninit;

    use super::*;

    #[shared]
    pub struct Shared {
        pub fast_blink: bool,
    }

    #[local]
    pub struct Local {}

    #[init(local = [
        io_port: MaybeUninit<IoPort> = MaybeUninit::uninit(),
    ])]
    fn init(ctx: init::Context) -> (Shared, Local) {
        super::init(ctx)
    }

    #[task(priority = 1, shared = [fast_blink])]
    async fn blinky(mut ctx: blinky::Context, port1: pac::PORT1) -> ! {
        let mut next = Mono::now();
        let mut on = false;

        loop {
            on = !on;
            // Safety: PCNTR3 only touches the pins whose bits are set.
            port1.pcntr3().write(|w| unsafe { w.bits(LED.pcntr3(on)) });

            let fast = ctx.shared.fast_blink.lock(|fast| *fast);
            let half_period: Ticks = if fast {
                BLINK_PERIOD_MS / FAST_BLINK_DIVISOR / 2
            } else {
                BLINK_PERIOD_MS / 2
            };
            next += half_period.max(1).millis();
            Mono::delay_until(next).await;
        }
    }

    #[task(priority = 1, shared = [fast_blink])]
    async fn button(mut ctx: button::Context, port4: pac::PORT4) -> ! {
        let mut debouncer = Debouncer::new(BUTTON_DEBOUNCE_SAMPLES);
        let mut next = Mono::now();

        loop {
            let pidr = port4.pcntr2().read().bits() as u16;
            match debouncer.update(BUTTON.is_pressed(pidr)) {
                Some(Edge::Pressed) => {
                    let fast = ctx.shared.fast_blink.lock(|fast| {
                        *fast = !*fast;
                        *fast
                    });
                    log::info!("SW1 pressed, fast blink: {}", fast);
                }
                Some(Edge::Released) => log::debug!("SW1 released"),
                None => {}
            }

            next += BUTTON_POLL_MS.millis();
            Mono::delay_until(next).await;
        }
    }

    #[idle]
    fn idle(_: idle::Context) -> ! {
        loop {
            rtic::export::wfi();
        }
    }
}
