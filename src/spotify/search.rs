use crate::{
    spotify::CatalogClient,
    types::{CatalogAlbum, SearchResponse},
};

impl CatalogClient {
    /// Searches the Spotify catalog for albums matching a free-text query.
    ///
    /// Sends the query to the `/search` endpoint restricted to album results.
    /// The query string is percent-encoded by the HTTP client's query API, so
    /// arbitrary user input is safe to pass through.
    ///
    /// # Arguments
    ///
    /// * `query` - Free-text search terms as typed by the user
    /// * `token` - Valid access token for Spotify API authentication
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Vec<CatalogAlbum>)` - Albums matching the query, in catalog order
    /// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
    ///
    /// # Response Shape
    ///
    /// The endpoint wraps results as `{"albums": {"items": [...]}}`. A payload
    /// without the `albums` key decodes to an empty list rather than an error,
    /// so callers can always treat the result as a plain album sequence.
    ///
    /// # Error Handling
    ///
    /// Non-success HTTP statuses are converted into errors before the body is
    /// read. There is no retry logic; the caller reports the failure and keeps
    /// whatever results it was already showing.
    ///
    /// # Example
    ///
    /// ```
    /// let catalog = CatalogClient::new();
    /// let albums = catalog.search_albums("thriller", &token).await?;
    /// println!("Found {} albums", albums.len());
    /// ```
    pub async fn search_albums(
        &self,
        query: &str,
        token: &str,
    ) -> Result<Vec<CatalogAlbum>, reqwest::Error> {
        let api_url = format!("{base}/search", base = self.base_url);

        let response = self
            .client
            .get(&api_url)
            .query(&[("q", query), ("type", "album")])
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        let json = response.json::<SearchResponse>().await?;

        Ok(json.albums.map(|a| a.items).unwrap_or_default())
    }
}
