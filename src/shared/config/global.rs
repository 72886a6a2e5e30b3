use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::shared::config::model::{Settings, load_settings};

/// Settings resolved once per process from defaults, `DOCFRAME_CONFIG` and
/// `DOCFRAME__*` variables.
pub static CONFIG: Lazy<Arc<Settings>> = Lazy::new(|| {
    Arc::new(load_settings().expect("invalid docframe settings (DOCFRAME_CONFIG or DOCFRAME__*)"))
});
