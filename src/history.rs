//! Local message history: an ordered, append-only sequence of records
//! persisted under a single storage key.

use crate::error::HistoryError;
use crate::record::MessageRecord;
use crate::storage::Storage;

/// Storage key holding the JSON-encoded message sequence.
pub const STORAGE_KEY: &str = "chat_mensagens";

/// Reads and appends the persisted message sequence.
///
/// `append` is a read-modify-write of the whole sequence and is not atomic
/// across processes sharing the same backend; last writer wins. There is no
/// eviction and no size cap.
pub struct HistoryStore {
    storage: Box<dyn Storage>,
}

impl HistoryStore {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self { storage }
    }

    /// The full persisted sequence in stored order. An absent key yields an
    /// empty sequence; malformed content is a [`HistoryError::Corrupt`], which
    /// callers treat as fatal at startup.
    pub fn load(&self) -> Result<Vec<MessageRecord>, HistoryError> {
        match self.storage.get(STORAGE_KEY)? {
            None => Ok(Vec::new()),
            Some(raw) => Ok(serde_json::from_str(&raw)?),
        }
    }

    /// Append one record to the persisted sequence.
    pub fn append(&self, record: &MessageRecord) -> Result<(), HistoryError> {
        let mut records = self.load()?;
        records.push(record.clone());
        let raw = serde_json::to_string(&records)?;
        self.storage.set(STORAGE_KEY, &raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::MessageKind;
    use crate::storage::MemoryStorage;

    fn store() -> HistoryStore {
        HistoryStore::new(Box::new(MemoryStorage::new()))
    }

    #[test]
    fn test_load_empty_when_nothing_stored() {
        assert_eq!(store().load().unwrap(), Vec::new());
    }

    #[test]
    fn test_append_then_load_keeps_order() {
        let history = store();
        let first = MessageRecord::new(MessageKind::Other, "hi").with_sender("Alice");
        let second = MessageRecord::new(MessageKind::Own, "hello").with_timestamp("10:01");

        history.append(&first).unwrap();
        history.append(&second).unwrap();

        let records = history.load().unwrap();
        assert_eq!(records, vec![first, second.clone()]);
        assert_eq!(records.last(), Some(&second));
    }

    #[test]
    fn test_append_visible_to_fresh_store_on_shared_backend() {
        let tmp = tempfile::tempdir().unwrap();
        let record = MessageRecord::new(MessageKind::Other, "persisted");

        {
            let storage = crate::storage::FileStorage::at(tmp.path().to_path_buf()).unwrap();
            let history = HistoryStore::new(Box::new(storage));
            history.append(&record).unwrap();
        }

        // A fresh context over the same backend observes the appended record.
        let storage = crate::storage::FileStorage::at(tmp.path().to_path_buf()).unwrap();
        let history = HistoryStore::new(Box::new(storage));
        assert_eq!(history.load().unwrap(), vec![record]);
    }

    #[test]
    fn test_corrupt_content_is_an_error() {
        let backend = MemoryStorage::new();
        backend.set(STORAGE_KEY, "{not json").unwrap();
        let history = HistoryStore::new(Box::new(backend));
        assert!(matches!(history.load(), Err(HistoryError::Corrupt(_))));
    }
}
