use crate::{
    shelf::ShelfClient,
    types::Album,
    utils::{self, MinRating},
};

pub fn album_matches(album: &Album, query: &str) -> bool {
    utils::contains_ci(&album.name, query)
        || album.artists.iter().any(|a| utils::contains_ci(&a.name, query))
        || album.genres.iter().any(|g| utils::contains_ci(g, query))
        || album.tracks.iter().any(|t| utils::contains_ci(&t.name, query))
}

// Text clauses are OR'ed, the rating threshold is AND'ed on top. An empty
// query matches every album, so the rating filter still applies alone.
pub fn filter_albums(albums: &[Album], query: &str, min_rating: MinRating) -> Vec<Album> {
    albums
        .iter()
        .filter(|a| album_matches(a, query) && utils::matches_min_rating(a, min_rating))
        .cloned()
        .collect()
}

// The browsable grid shows covers, so records without cover art are dropped
// here and only here; they stay in the collection and remain reachable by id.
pub fn visible_albums(albums: &[Album], query: &str, min_rating: MinRating) -> Vec<Album> {
    filter_albums(albums, query, min_rating)
        .into_iter()
        .filter(|a| utils::cover_url(a).is_some())
        .collect()
}

pub struct CollectionBrowser {
    shelf: ShelfClient,
    albums: Vec<Album>,
}

impl CollectionBrowser {
    pub fn new(shelf: ShelfClient) -> Self {
        CollectionBrowser {
            shelf,
            albums: Vec::new(),
        }
    }

    pub async fn load(&mut self) -> Result<(), reqwest::Error> {
        self.albums = self.shelf.list_albums().await?;
        Ok(())
    }

    pub fn albums(&self) -> &Vec<Album> {
        &self.albums
    }

    pub fn filtered(&self, query: &str, min_rating: MinRating) -> Vec<Album> {
        filter_albums(&self.albums, query, min_rating)
    }

    pub fn visible(&self, query: &str, min_rating: MinRating) -> Vec<Album> {
        visible_albums(&self.albums, query, min_rating)
    }
}
