//! # Rendering Module
//!
//! Frame composition plus a macroquad front end that draws it.

pub mod display;
pub mod frame;

pub use display::*;
pub use frame::*;
