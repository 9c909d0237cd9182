//! Page components.

pub mod helix;
pub mod page;
