use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistRef {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    #[serde(rename = "spotifyId")]
    pub spotify_id: String,
    pub name: String,
    #[serde(default)]
    pub album_type: String,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    #[serde(default)]
    pub images: Vec<ImageRef>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAlbum {
    #[serde(rename = "spotifyId")]
    pub spotify_id: String,
    pub name: String,
    pub album_type: String,
    pub artists: Vec<ArtistRef>,
    pub images: Vec<ImageRef>,
    pub genres: Vec<String>,
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogAlbum {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub album_type: String,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    #[serde(default)]
    pub images: Vec<ImageRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub albums: Option<SearchItems>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchItems {
    pub items: Vec<CatalogAlbum>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumTracksResponse {
    #[serde(default)]
    pub items: Vec<Track>,
}

#[derive(Tabled)]
pub struct SearchTableRow {
    pub index: usize,
    pub added: String,
    pub name: String,
    pub artists: String,
    pub album_type: String,
}

#[derive(Tabled)]
pub struct CollectionTableRow {
    pub id: String,
    pub name: String,
    pub artists: String,
    pub genres: String,
    pub rating: String,
}
