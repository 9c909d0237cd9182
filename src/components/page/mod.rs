//! Page chrome around the petal overlay: scroll readout, theme switch and
//! the loading indicator.

mod dots;
mod mode;
mod progress;

pub use dots::LoadingDots;
pub use mode::ModeToggle;
pub use progress::ScrollProgress;
