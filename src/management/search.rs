use std::{
    collections::HashSet,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use tokio::{sync::Mutex, task::JoinHandle, time::sleep};

use crate::{
    shelf::ShelfClient,
    spotify::CatalogClient,
    types::{Album, CatalogAlbum},
    utils,
};

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added(String),
    AlreadyAdded,
    Removed(String),
    NotInCollection,
}

/// Drives the search surface: a debounced catalog query plus the add/remove
/// toggle against the collection snapshot loaded at session start.
pub struct SearchController {
    catalog: CatalogClient,
    shelf: ShelfClient,
    token: String,
    results: Arc<Mutex<Vec<CatalogAlbum>>>,
    search_error: Arc<Mutex<Option<String>>>,
    generation: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
    collection: Vec<Album>,
    added: HashSet<String>,
}

impl SearchController {
    pub fn new(catalog: CatalogClient, shelf: ShelfClient, token: String) -> Self {
        SearchController {
            catalog,
            shelf,
            token,
            results: Arc::new(Mutex::new(Vec::new())),
            search_error: Arc::new(Mutex::new(None)),
            generation: Arc::new(AtomicU64::new(0)),
            pending: None,
            collection: Vec::new(),
            added: HashSet::new(),
        }
    }

    pub async fn load_collection(&mut self) -> Result<(), reqwest::Error> {
        let albums = self.shelf.list_albums().await?;
        self.added = albums.iter().map(|a| a.spotify_id.clone()).collect();
        self.collection = albums;
        Ok(())
    }

    pub fn collection(&self) -> &Vec<Album> {
        &self.collection
    }

    pub fn is_added(&self, catalog_id: &str) -> bool {
        self.added.contains(catalog_id)
    }

    /// Restarts the quiet period for `query`. Only the task that survives an
    /// uninterrupted window performs the search; an empty settled query
    /// clears the results without any network call.
    pub fn set_query(&mut self, query: &str) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }

        // invalidates any superseded task that is already past its sleep
        let my_generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let query = query.trim().to_string();
        let results = Arc::clone(&self.results);
        let search_error = Arc::clone(&self.search_error);
        let generation = Arc::clone(&self.generation);
        let catalog = self.catalog.clone();
        let token = self.token.clone();

        self.pending = Some(tokio::spawn(async move {
            sleep(SEARCH_DEBOUNCE).await;

            if query.is_empty() {
                results.lock().await.clear();
                return;
            }

            let outcome = catalog.search_albums(&query, &token).await;

            if generation.load(Ordering::SeqCst) != my_generation {
                return;
            }

            match outcome {
                Ok(albums) => {
                    *results.lock().await = albums;
                    *search_error.lock().await = None;
                }
                Err(e) => {
                    // keep whatever was on screen, just record the failure
                    *search_error.lock().await = Some(e.to_string());
                }
            }
        }));
    }

    /// Waits for the pending debounce task, if any. The deterministic sync
    /// point for one-shot searches.
    pub async fn settled(&mut self) {
        if let Some(handle) = self.pending.take() {
            let _ = handle.await;
        }
    }

    pub async fn results(&self) -> Vec<CatalogAlbum> {
        self.results.lock().await.clone()
    }

    pub async fn take_search_error(&self) -> Option<String> {
        self.search_error.lock().await.take()
    }

    pub async fn toggle(&mut self, album: &CatalogAlbum) -> Result<ToggleOutcome, reqwest::Error> {
        if self.added.contains(&album.id) {
            self.remove(album).await
        } else {
            self.add(album).await
        }
    }

    async fn add(&mut self, album: &CatalogAlbum) -> Result<ToggleOutcome, reqwest::Error> {
        // Fresh duplicate check against the store, not the session snapshot.
        // Two sessions can still both pass it before either writes; the
        // store does not enforce uniqueness of the catalog id.
        let existing = self.shelf.list_albums().await?;
        if existing.iter().any(|a| a.spotify_id == album.id) {
            return Ok(ToggleOutcome::AlreadyAdded);
        }

        let created = self
            .shelf
            .create_album(&utils::new_album_from_catalog(album))
            .await?;

        self.added.insert(created.spotify_id.clone());
        self.collection.push(created);

        Ok(ToggleOutcome::Added(album.name.clone()))
    }

    async fn remove(&mut self, album: &CatalogAlbum) -> Result<ToggleOutcome, reqwest::Error> {
        // removal resolves the store id from the session snapshot
        let Some(stored) = self
            .collection
            .iter()
            .find(|a| a.spotify_id == album.id)
            .cloned()
        else {
            return Ok(ToggleOutcome::NotInCollection);
        };

        self.shelf.delete_album(&stored.id).await?;

        self.collection.retain(|a| a.id != stored.id);
        self.added.remove(&album.id);

        Ok(ToggleOutcome::Removed(album.name.clone()))
    }
}
