use crate::{
    shelf::ShelfClient,
    spotify::CatalogClient,
    types::{Album, Track},
};

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Loaded(Album),
    NotFound,
    Deleted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TracksState {
    Loading,
    Loaded(Vec<Track>),
    Empty,
}

/// Holds one collection record for display and editing: load by store id,
/// enrich with live track data, update the rating, delete.
pub struct DetailEditor {
    shelf: ShelfClient,
    catalog: CatalogClient,
    token: Option<String>,
    state: DetailState,
    tracks: TracksState,
}

impl DetailEditor {
    pub fn new(shelf: ShelfClient, catalog: CatalogClient, token: Option<String>) -> Self {
        DetailEditor {
            shelf,
            catalog,
            token,
            state: DetailState::Loading,
            tracks: TracksState::Loading,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn tracks(&self) -> &TracksState {
        &self.tracks
    }

    pub fn album(&self) -> Option<&Album> {
        match &self.state {
            DetailState::Loaded(album) => Some(album),
            _ => None,
        }
    }

    // Any failure lands in NotFound; the store answers 404 for unknown ids
    // and the page has no other terminal state for a record it cannot show.
    pub async fn load(&mut self, id: &str) -> &DetailState {
        self.state = match self.shelf.get_album(id).await {
            Ok(album) => DetailState::Loaded(album),
            Err(_) => DetailState::NotFound,
        };
        &self.state
    }

    /// Fetches live track data for the loaded album. Skipped entirely when
    /// the record is not loaded, carries no catalog id, or no token is
    /// available; all of those end in `Empty`, never in a network call.
    pub async fn load_tracks(&mut self) -> &TracksState {
        let spotify_id = match &self.state {
            DetailState::Loaded(album) if !album.spotify_id.is_empty() => album.spotify_id.clone(),
            _ => {
                self.tracks = TracksState::Empty;
                return &self.tracks;
            }
        };

        let Some(token) = self.token.clone() else {
            self.tracks = TracksState::Empty;
            return &self.tracks;
        };

        self.tracks = match self.catalog.album_tracks(&spotify_id, &token).await {
            Ok(items) if !items.is_empty() => TracksState::Loaded(items),
            // a fetch failure degrades to the empty display, the album stays up
            Ok(_) | Err(_) => TracksState::Empty,
        };
        &self.tracks
    }

    /// Validates the raw rating input and writes it to the store. Anything
    /// outside an integer 1 to 5 is rejected with a user-facing message
    /// before any request is made.
    pub async fn set_rating(&mut self, input: &str) -> Result<(), String> {
        let rating = match input.trim().parse::<u8>() {
            Ok(n) if (1..=5).contains(&n) => n,
            _ => return Err("Please enter a valid rating between 1 and 5".to_string()),
        };

        let id = match &self.state {
            DetailState::Loaded(album) => album.id.clone(),
            _ => return Err("Album not found.".to_string()),
        };

        let updated = self
            .shelf
            .update_rating(&id, rating)
            .await
            .map_err(|e| format!("Failed to update rating. Err: {}", e))?;

        // the store's representation replaces the local one
        self.state = DetailState::Loaded(updated);
        Ok(())
    }

    /// Deletes the loaded record. Returns the album name for the caller's
    /// confirmation message.
    pub async fn delete(&mut self) -> Result<String, String> {
        let album = match &self.state {
            DetailState::Loaded(album) => album.clone(),
            _ => return Err("Album not found.".to_string()),
        };

        self.shelf
            .delete_album(&album.id)
            .await
            .map_err(|e| format!("Failed to delete album. Err: {}", e))?;

        self.state = DetailState::Deleted;
        Ok(album.name)
    }
}
