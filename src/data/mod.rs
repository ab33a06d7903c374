//! File formats exchanged with the external modelling pipeline.

pub mod hexmap;
pub mod mapping;
pub mod model;
