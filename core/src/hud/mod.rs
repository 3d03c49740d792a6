//! Small heads-up display elements that games draw into their overlays.

pub mod crosshair;
pub mod subtitle;

pub use crosshair::Crosshair;
pub use subtitle::Subtitle;
