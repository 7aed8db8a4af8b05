use crate::{
    spotify::CatalogClient,
    types::{AlbumTracksResponse, Track},
};

impl CatalogClient {
    /// Retrieves the track listing for a single album from the catalog.
    ///
    /// Fetches the tracks of the album identified by its Spotify ID. The shelf
    /// never persists track data; this call enriches the detail view with live
    /// catalog information each time it is shown.
    ///
    /// # Arguments
    ///
    /// * `spotify_id` - Spotify ID of the album to list tracks for
    /// * `token` - Valid access token for Spotify API authentication
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Vec<Track>)` - Track ids and names in album order
    /// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
    ///
    /// # Response Shape
    ///
    /// The endpoint responds with `{"items": [...]}`; a missing or empty
    /// `items` payload decodes to an empty track list. Distinguishing "album
    /// has no tracks" from "catalog returned nothing" is left to the caller's
    /// presentation layer.
    ///
    /// # Example
    ///
    /// ```
    /// let catalog = CatalogClient::new();
    /// let tracks = catalog.album_tracks("4aawyAB9vmqN3uQ7FjRGTy", &token).await?;
    /// for track in tracks {
    ///     println!("{}", track.name);
    /// }
    /// ```
    pub async fn album_tracks(
        &self,
        spotify_id: &str,
        token: &str,
    ) -> Result<Vec<Track>, reqwest::Error> {
        let api_url = format!(
            "{base}/albums/{id}/tracks",
            base = self.base_url,
            id = spotify_id
        );

        let response = self
            .client
            .get(&api_url)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        let json = response.json::<AlbumTracksResponse>().await?;

        Ok(json.items)
    }
}
