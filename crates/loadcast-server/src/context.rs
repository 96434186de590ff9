//! Per-process application state.

use loadcast_config::LoadcastConfig;
use loadcast_model::ModelSet;
use std::sync::Arc;

/// Everything the request workers share: configuration plus the loaded
/// model artifacts. Built once at startup, immutable afterwards.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: LoadcastConfig,
    /// `None` when artifact loading failed at startup; the service keeps
    /// running degraded and every prediction fails opaquely.
    pub models: Option<Arc<ModelSet>>,
}

impl AppContext {
    #[must_use]
    pub const fn new(config: LoadcastConfig, models: Option<Arc<ModelSet>>) -> Self {
        Self { config, models }
    }

    /// Build the context, attempting to load the model artifacts from the
    /// configured directory.
    ///
    /// A load failure is logged with full detail and leaves the context
    /// without models rather than aborting startup: the root endpoint stays
    /// functional and predictions fail with an opaque error until the
    /// artifacts are fixed and the process restarted.
    #[must_use]
    pub fn init(config: LoadcastConfig) -> Self {
        let models = match ModelSet::load(&config.model.dir) {
            Ok(set) => Some(Arc::new(set)),
            Err(error) => {
                tracing::error!(
                    %error,
                    dir = %config.model.dir.display(),
                    "failed to load model artifacts; serving without models"
                );
                None
            }
        };
        Self::new(config, models)
    }
}
