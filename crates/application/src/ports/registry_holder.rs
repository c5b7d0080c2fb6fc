use rkn_guard_domain::Registry;
use std::sync::Arc;

/// Single publication point for the current registry snapshot.
///
/// `get` must never block and always returns a complete snapshot; `set`
/// replaces it atomically as a whole.
pub trait RegistryHolderPort: Send + Sync {
    fn get(&self) -> Arc<Registry>;
    fn set(&self, registry: Registry);
}
