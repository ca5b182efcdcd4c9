//! In-memory note store.
//!
//! Persistence proper is an external collaborator behind the
//! [`NoteRepository`] seam; this implementation backs a single-process
//! deployment and the test suite. Fragments are frozen into the legacy
//! taxonomy on insert, by [`SavedNote::from_request`].

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use clearpoint_core::{Error, NoteRepository, Result, SaveNoteRequest, SavedNote};

/// Process-local note repository.
#[derive(Default)]
pub struct InMemoryNoteStore {
    notes: RwLock<HashMap<Uuid, SavedNote>>,
}

impl InMemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteStore {
    async fn insert(&self, req: SaveNoteRequest) -> Result<Uuid> {
        let note = SavedNote::from_request(req);
        let id = note.id;
        self.notes.write().await.insert(id, note);
        Ok(id)
    }

    async fn fetch(&self, id: Uuid) -> Result<SavedNote> {
        self.notes
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(Error::NoteNotFound(id))
    }

    async fn list(&self) -> Result<Vec<SavedNote>> {
        let notes = self.notes.read().await;
        let mut all: Vec<SavedNote> = notes.values().cloned().collect();
        all.sort_by(|a, b| b.created_at_utc.cmp(&a.created_at_utc));
        Ok(all)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.notes
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(Error::NoteNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clearpoint_core::{Category, Fragment, LegacyCategory};

    fn request(title: &str) -> SaveNoteRequest {
        SaveNoteRequest {
            title: title.to_string(),
            content: "We decided to ship".to_string(),
            fragments: vec![Fragment::new(0, "We decided to ship", Category::HighImportance)],
            usage_type: None,
        }
    }

    #[tokio::test]
    async fn test_insert_freezes_to_legacy() {
        let store = InMemoryNoteStore::new();
        let id = store.insert(request("Kickoff")).await.unwrap();

        let note = store.fetch(id).await.unwrap();
        assert_eq!(note.title, "Kickoff");
        assert_eq!(note.cards[0].category, LegacyCategory::Decision);
    }

    #[tokio::test]
    async fn test_fetch_unknown_id() {
        let store = InMemoryNoteStore::new();
        let err = store.fetch(Uuid::nil()).await.unwrap_err();
        assert!(matches!(err, Error::NoteNotFound(_)));
    }

    #[tokio::test]
    async fn test_list_and_delete() {
        let store = InMemoryNoteStore::new();
        let first = store.insert(request("First")).await.unwrap();
        let _second = store.insert(request("Second")).await.unwrap();

        assert_eq!(store.list().await.unwrap().len(), 2);

        store.delete(first).await.unwrap();
        assert_eq!(store.list().await.unwrap().len(), 1);

        let err = store.delete(first).await.unwrap_err();
        assert!(matches!(err, Error::NoteNotFound(_)));
    }
}
