//! Ready-made filter handlers.

pub mod closure;
pub mod configured;

pub use closure::FilterFn;
pub use configured::ConfiguredOverrides;
