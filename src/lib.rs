#![cfg_attr(not(test), no_std)]

//! Board support for the Arduino Portenta C33 (Renesas RA6M5, `R7FA6M5BH3CFC`).
//!
//! Everything here is plain data and `const` computation so it can be
//! checked on the host. The firmware binary feeds it the FSP pin table.

pub mod board;
pub mod button;
pub mod conf;
pub mod pin;
pub mod pin_table;
pub mod security;

pub use pin::PortPin;
