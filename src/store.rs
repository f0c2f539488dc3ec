use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory key-value store, partitioned by database index
pub struct Store {
    data: RwLock<HashMap<u32, HashMap<String, Vec<u8>>>>,
}

impl Store {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Set a key in database `db`, replacing any previous value
    pub fn set(&self, db: u32, key: String, value: Vec<u8>) -> Result<(), String> {
        let mut data = self.data.write().map_err(|_| "Lock poisoned")?;
        data.entry(db).or_default().insert(key, value);
        Ok(())
    }

    /// Get the value for a key in database `db`
    pub fn get(&self, db: u32, key: &str) -> Option<Vec<u8>> {
        let data = self.data.read().ok()?;
        data.get(&db)?.get(key).cloned()
    }

    /// Number of keys in database `db`
    pub fn len(&self, db: u32) -> usize {
        self.data
            .read()
            .map(|data| data.get(&db).map_or(0, HashMap::len))
            .unwrap_or(0)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites() {
        let store = Store::new();
        store.set(0, "k".to_string(), b"one".to_vec()).unwrap();
        store.set(0, "k".to_string(), b"two".to_vec()).unwrap();
        assert_eq!(store.get(0, "k"), Some(b"two".to_vec()));
        assert_eq!(store.len(0), 1);
    }

    #[test]
    fn test_databases_are_isolated() {
        let store = Store::new();
        store.set(1, "k".to_string(), b"v".to_vec()).unwrap();
        assert_eq!(store.get(0, "k"), None);
        assert_eq!(store.get(1, "k"), Some(b"v".to_vec()));
        assert_eq!(store.len(0), 0);
    }
}
