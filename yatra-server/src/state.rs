use std::{fmt, sync::Arc};

use yatra_core::SafetyStore;

use crate::config::Config;
use crate::push::ViewerRegistry;

/// Shared application state handed to every handler and background task.
///
/// Cheap to clone; everything inside is reference-counted. The store and the
/// viewer registry are constructed once in `main` (or test setup) and owned
/// here rather than living in any process-wide singleton.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SafetyStore>,
    pub viewers: Arc<ViewerRegistry>,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(store: Arc<SafetyStore>, viewers: Arc<ViewerRegistry>, config: Arc<Config>) -> Self {
        Self {
            store,
            viewers,
            config,
        }
    }
}
