#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => { ::log::trace!($($arg)*) };
}
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => { ::log::debug!($($arg)*) };
}
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { ::log::info!($($arg)*) };
}
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => { ::log::warn!($($arg)*) };
}
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { ::log::error!($($arg)*) };
}

pub fn init() {
    // No `section_cb`: link.x has no `.code_in_ram` output section, the
    // control block stays in `.bss`.
    let channels = rtt_target::rtt_init! {
        up: {
            0:{
                size: 1024,
                mode: rtt_target::ChannelMode::NoBlockSkip,
                name: "Terminal",
            }
        }
    };
    rtt_target::set_print_channel(channels.up.0);
    if cfg!(debug_assertions) {
        rtt_target::init_logger_with_level(::log::LevelFilter::Trace);
    } else {
        rtt_target::init_logger_with_level(::log::LevelFilter::Info);
    }
}

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    ::log::error!("Panic: {}", info);
    loop {
        cortex_m::asm::bkpt();
    }
}
