//! Green Button (NAESB ESPI) feed decoding.

pub mod codec;
mod decoder;

pub use decoder::decode;
