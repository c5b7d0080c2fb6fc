//! RKN Guard Infrastructure Layer
pub mod registry;
