use std::{
    path::PathBuf,
    sync::{Mutex, OnceLock},
};

use taksir::app_dirs::MODELS_DIR_ENV;

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

pub struct TaksirEnvGuard {
    previous: Option<String>,
    _lock: std::sync::MutexGuard<'static, ()>,
}

impl TaksirEnvGuard {
    pub fn set_models_dir(path: PathBuf) -> Self {
        let lock = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|err| err.into_inner());
        let previous = std::env::var(MODELS_DIR_ENV).ok();
        // SAFETY: tests run under a global lock to prevent concurrent env mutations.
        unsafe {
            std::env::set_var(MODELS_DIR_ENV, path);
        }
        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for TaksirEnvGuard {
    fn drop(&mut self) {
        if let Some(value) = self.previous.take() {
            // SAFETY: tests run under a global lock to prevent concurrent env mutations.
            unsafe {
                std::env::set_var(MODELS_DIR_ENV, value);
            }
        } else {
            // SAFETY: tests run under a global lock to prevent concurrent env mutations.
            unsafe {
                std::env::remove_var(MODELS_DIR_ENV);
            }
        }
    }
}
