//! Interactive radial ("wheel") chart core: wedge geometry, per-segment animation,
//! single selection and the controller that keeps them consistent frame to frame.

pub mod chart;
pub mod config;
pub mod events;
pub mod theme;
