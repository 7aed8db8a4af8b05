use serde_json::json;

use crate::{
    shelf::ShelfClient,
    types::{Album, NewAlbum},
};

impl ShelfClient {
    /// Fetches the entire collection.
    ///
    /// The store has no pagination; the full list comes back in one response
    /// and is used both for browsing and for duplicate checks before an add.
    pub async fn list_albums(&self) -> Result<Vec<Album>, reqwest::Error> {
        let api_url = format!("{base}/albums", base = self.base_url);

        let response = self
            .client
            .get(&api_url)
            .send()
            .await?
            .error_for_status()?;

        let json = response.json::<Vec<Album>>().await?;

        Ok(json)
    }

    /// Fetches a single record by its store id.
    ///
    /// An unknown id surfaces as an HTTP error (404) from `error_for_status`;
    /// the detail editor maps any failure here to its not-found state.
    pub async fn get_album(&self, id: &str) -> Result<Album, reqwest::Error> {
        let api_url = format!("{base}/albums/{id}", base = self.base_url, id = id);

        let response = self
            .client
            .get(&api_url)
            .send()
            .await?
            .error_for_status()?;

        let json = response.json::<Album>().await?;

        Ok(json)
    }

    /// Creates a record and returns the stored representation.
    ///
    /// The store assigns the record id; the returned album is what every
    /// later read will see, so callers keep it instead of the request body.
    pub async fn create_album(&self, album: &NewAlbum) -> Result<Album, reqwest::Error> {
        let api_url = format!("{base}/albums", base = self.base_url);

        let response = self
            .client
            .post(&api_url)
            .json(album)
            .send()
            .await?
            .error_for_status()?;

        let json = response.json::<Album>().await?;

        Ok(json)
    }

    /// Writes a new rating and returns the updated record.
    ///
    /// This is the only mutation the shelf performs on existing records; the
    /// body carries just the rating so no other field can be clobbered.
    pub async fn update_rating(&self, id: &str, rating: u8) -> Result<Album, reqwest::Error> {
        let api_url = format!("{base}/albums/{id}", base = self.base_url, id = id);

        let response = self
            .client
            .put(&api_url)
            .json(&json!({ "rating": rating }))
            .send()
            .await?
            .error_for_status()?;

        let json = response.json::<Album>().await?;

        Ok(json)
    }

    /// Deletes a record by its store id.
    pub async fn delete_album(&self, id: &str) -> Result<(), reqwest::Error> {
        let api_url = format!("{base}/albums/{id}", base = self.base_url, id = id);

        self.client
            .delete(&api_url)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
