pub mod holder;
pub mod http_source;

pub use holder::RegistryHolder;
pub use http_source::HttpRegistrySource;
