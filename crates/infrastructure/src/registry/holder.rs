use arc_swap::ArcSwap;
use rkn_guard_application::ports::RegistryHolderPort;
use rkn_guard_domain::Registry;
use std::sync::Arc;

/// Lock-free snapshot cell.
///
/// Readers take a full `Arc<Registry>` from the `ArcSwap`, so a publication
/// racing with a read hands out either the old or the new snapshot, never a
/// mix. Old snapshots are freed when the last reader drops its `Arc`.
pub struct RegistryHolder {
    current: ArcSwap<Registry>,
}

impl RegistryHolder {
    /// Starts with the empty placeholder registry.
    pub fn new() -> Self {
        Self::with_registry(Registry::empty())
    }

    pub fn with_registry(registry: Registry) -> Self {
        Self {
            current: ArcSwap::from_pointee(registry),
        }
    }
}

impl Default for RegistryHolder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryHolderPort for RegistryHolder {
    #[inline]
    fn get(&self) -> Arc<Registry> {
        self.current.load_full()
    }

    fn set(&self, registry: Registry) {
        self.current.store(Arc::new(registry));
    }
}
