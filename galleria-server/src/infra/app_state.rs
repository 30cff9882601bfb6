use std::{fmt, sync::Arc};

use galleria_core::ArtworkCatalog;

use crate::infra::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ArtworkCatalog>,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(catalog: Arc<ArtworkCatalog>, config: Arc<Config>) -> Self {
        Self { catalog, config }
    }
}
