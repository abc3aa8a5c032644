use contracts::usecases::u001_browse_stores::{FavoritesStorage, FAVORITES_STORAGE_KEY};

/// Favorites slot in `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalFavoritesStorage;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl FavoritesStorage for LocalFavoritesStorage {
    fn read(&self) -> Option<String> {
        storage()?.get_item(FAVORITES_STORAGE_KEY).ok().flatten()
    }

    fn write(&self, raw: &str) {
        let Some(storage) = storage() else {
            log::warn!("localStorage unavailable, favorites not saved");
            return;
        };
        if let Err(e) = storage.set_item(FAVORITES_STORAGE_KEY, raw) {
            log::warn!("Failed to save favorites: {:?}", e);
        }
    }
}
