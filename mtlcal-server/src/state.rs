use crate::cache::AssetCache;
use crate::origin::Origin;

/// Shared state for the intercept handler.
#[derive(Clone)]
pub struct AppState {
    pub cache: AssetCache,
    pub origin: Origin,
}
