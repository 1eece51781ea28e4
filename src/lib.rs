#![doc = include_str!("RUSTDOC.md")]

pub mod channels;
pub mod logger;
pub mod messaging;
pub mod platform;
pub mod util;
