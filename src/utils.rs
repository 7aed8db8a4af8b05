use std::fmt;

use crate::types::{Album, ArtistRef, CatalogAlbum, NewAlbum};

pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub fn artist_names(artists: &[ArtistRef]) -> String {
    if artists.is_empty() {
        return "Unknown Artist".to_string();
    }

    artists
        .iter()
        .map(|a| a.name.clone())
        .collect::<Vec<String>>()
        .join(", ")
}

pub fn cover_url(album: &Album) -> Option<&str> {
    album
        .images
        .first()
        .map(|i| i.url.as_str())
        .filter(|url| !url.is_empty())
}

pub fn stars(rating: Option<u8>) -> String {
    let filled = rating.unwrap_or(0) as usize;
    (0..5).map(|i| if i < filled { '★' } else { '☆' }).collect()
}

// Seed a store record from a catalog result: same metadata, a neutral
// rating of 3 and no genres until the user curates them.
pub fn new_album_from_catalog(album: &CatalogAlbum) -> NewAlbum {
    NewAlbum {
        spotify_id: album.id.clone(),
        name: album.name.clone(),
        album_type: album.album_type.clone(),
        artists: album.artists.clone(),
        images: album.images.clone(),
        genres: Vec::new(),
        rating: 3,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MinRating {
    #[default]
    All,
    AtLeast(u8),
}

impl fmt::Display for MinRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinRating::All => write!(f, "all"),
            MinRating::AtLeast(n) => write!(f, "{}", n),
        }
    }
}

pub fn parse_min_rating(input: &str) -> Result<MinRating, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("minimum rating cannot be empty".to_string());
    }

    if trimmed.eq_ignore_ascii_case("all") {
        return Ok(MinRating::All);
    }

    match trimmed.parse::<u8>() {
        Ok(n) if (1..=5).contains(&n) => Ok(MinRating::AtLeast(n)),
        _ => Err(format!(
            "invalid value '{}' (expected 'all' or a number from 1 to 5)",
            trimmed
        )),
    }
}

pub fn matches_min_rating(album: &Album, min_rating: MinRating) -> bool {
    match min_rating {
        MinRating::All => true,
        // an unrated album never satisfies a numeric threshold
        MinRating::AtLeast(n) => album.rating.is_some_and(|r| r >= n),
    }
}
