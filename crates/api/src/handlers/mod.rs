pub mod check;
pub mod health;
pub mod registry;

pub use health::{healthz, readyz};
