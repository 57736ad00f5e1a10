//! Core data types for the TBL ROI calculator

pub mod analysis;
pub mod environmental;
pub mod financial;
pub mod parameters;
pub mod project;
pub mod results;
pub mod social;
