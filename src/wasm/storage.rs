use web_sys::{Storage, Window};

use crate::error::{VizError, VizResult};
use crate::theme::ThemeStorage;

/// `window.localStorage`, or nothing when the browser refuses access.
pub struct LocalStorage {
    inner: Option<Storage>,
}

impl LocalStorage {
    pub fn from_window(window: &Window) -> Self {
        let inner = window.local_storage().ok().flatten();
        if inner.is_none() {
            log::debug!("localStorage unavailable; theme will not persist");
        }
        Self { inner }
    }

    fn storage(&self) -> VizResult<&Storage> {
        self.inner
            .as_ref()
            .ok_or_else(|| VizError::storage("localStorage unavailable"))
    }
}

impl ThemeStorage for LocalStorage {
    fn load(&self, key: &str) -> VizResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|err| VizError::storage(format!("{err:?}")))
    }

    fn save(&mut self, key: &str, value: &str) -> VizResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| VizError::storage(format!("{err:?}")))
    }
}
