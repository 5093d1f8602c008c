#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => { { let _ = format_args!($($arg)*); } };
}
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => { { let _ = format_args!($($arg)*); } };
}
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { { let _ = format_args!($($arg)*); } };
}
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => { { let _ = format_args!($($arg)*); } };
}
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { { let _ = format_args!($($arg)*); } };
}

pub fn init() {}

#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    loop {
        cortex_m::asm::bkpt();
    }
}
