use crate::domain::a001_store::Store;

/// localStorage key holding the JSON array of favorite stores
pub const FAVORITES_STORAGE_KEY: &str = "favoriteStores";

/// Durable key/value slot the favorites set is persisted into.
pub trait FavoritesStorage {
    /// Raw JSON stored under [`FAVORITES_STORAGE_KEY`], if any
    fn read(&self) -> Option<String>;

    fn write(&self, raw: &str);
}

/// Избранные магазины пользователя
///
/// Membership is by `id` only; insertion order is kept so the stored array
/// reads in the order the user added stores.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoritesSet {
    stores: Vec<Store>,
}

impl FavoritesSet {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let stores: Vec<Store> = serde_json::from_str(raw)?;
        let mut set = FavoritesSet::default();
        for store in stores {
            if !set.contains(store.id) {
                set.stores.push(store);
            }
        }
        Ok(set)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.stores)
    }

    /// Reads the set once at startup. Missing or unreadable data gives an
    /// empty set.
    pub fn load(storage: &impl FavoritesStorage) -> Self {
        let Some(raw) = storage.read() else {
            return FavoritesSet::default();
        };
        match FavoritesSet::from_json(&raw) {
            Ok(set) => set,
            Err(e) => {
                log::warn!("Ignoring corrupt favorites in storage: {}", e);
                FavoritesSet::default()
            }
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.stores.iter().any(|s| s.id == id)
    }

    /// Adds the store when absent, removes it when present.
    /// Returns `true` when the store is a favorite afterwards.
    pub fn toggle(&mut self, store: &Store) -> bool {
        if self.contains(store.id) {
            self.stores.retain(|s| s.id != store.id);
            false
        } else {
            self.stores.push(store.clone());
            true
        }
    }

    /// [`toggle`](Self::toggle) followed by a write of the whole set.
    pub fn toggle_and_persist(&mut self, store: &Store, storage: &impl FavoritesStorage) -> bool {
        let is_favorite = self.toggle(store);
        match self.to_json() {
            Ok(raw) => storage.write(&raw),
            Err(e) => log::error!("Failed to serialize favorites: {}", e),
        }
        is_favorite
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Store> {
        self.stores.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_store::AmountType;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStorage {
        slot: RefCell<Option<String>>,
        writes: RefCell<usize>,
    }

    impl FavoritesStorage for MemoryStorage {
        fn read(&self) -> Option<String> {
            self.slot.borrow().clone()
        }

        fn write(&self, raw: &str) {
            *self.slot.borrow_mut() = Some(raw.to_string());
            *self.writes.borrow_mut() += 1;
        }
    }

    fn store(id: i64) -> Store {
        Store {
            id,
            name: format!("Store {}", id),
            url: String::new(),
            logo: String::new(),
            cashback_enabled: true,
            rate_type: "Standard".to_string(),
            amount_type: AmountType::Fixed,
            cashback_amount: None,
            cats: Some(1),
            is_promoted: false,
            clicks: 10,
        }
    }

    fn persisted_ids(storage: &MemoryStorage) -> Vec<i64> {
        let raw = storage.read().unwrap();
        let stores: Vec<Store> = serde_json::from_str(&raw).unwrap();
        stores.into_iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_toggle_adds_then_removes_and_persists() {
        let storage = MemoryStorage::default();
        let mut set = FavoritesSet::load(&storage);
        assert!(set.is_empty());

        assert!(set.toggle_and_persist(&store(1), &storage));
        assert!(set.contains(1));
        assert_eq!(persisted_ids(&storage), vec![1]);

        assert!(!set.toggle_and_persist(&store(1), &storage));
        assert!(!set.contains(1));
        assert_eq!(persisted_ids(&storage), Vec::<i64>::new());
        assert_eq!(*storage.writes.borrow(), 2);
    }

    #[test]
    fn test_double_toggle_restores_original_set() {
        let storage = MemoryStorage::default();
        let mut set = FavoritesSet::default();
        set.toggle(&store(1));
        set.toggle(&store(2));
        let original = set.clone();

        set.toggle_and_persist(&store(3), &storage);
        set.toggle_and_persist(&store(3), &storage);
        assert_eq!(set, original);

        set.toggle(&store(2));
        set.toggle(&store(2));
        assert!(set.contains(2));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_membership_is_by_id_only() {
        let mut set = FavoritesSet::default();
        set.toggle(&store(5));
        let mut renamed = store(5);
        renamed.name = "Renamed".to_string();
        renamed.clicks = 999;
        assert!(!set.toggle(&renamed));
        assert!(set.is_empty());
    }

    #[test]
    fn test_load_survives_reload() {
        let storage = MemoryStorage::default();
        let mut set = FavoritesSet::default();
        set.toggle_and_persist(&store(2), &storage);
        set.toggle_and_persist(&store(9), &storage);

        let reloaded = FavoritesSet::load(&storage);
        assert_eq!(reloaded.iter().map(|s| s.id).collect::<Vec<_>>(), vec![2, 9]);
    }

    #[test]
    fn test_load_drops_duplicate_ids() {
        let storage = MemoryStorage::default();
        let dup = serde_json::to_string(&vec![store(1), store(2), store(1)]).unwrap();
        storage.write(&dup);
        let set = FavoritesSet::load(&storage);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_load_corrupt_storage_is_empty() {
        let storage = MemoryStorage::default();
        storage.write("not json");
        assert!(FavoritesSet::load(&storage).is_empty());
    }
}
