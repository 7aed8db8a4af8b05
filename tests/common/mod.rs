use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{
    Extension, Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::get,
};
use serde_json::{Value, json};
use tokio::sync::Mutex;

use shelfcli::types::{Album, ArtistRef, ImageRef, NewAlbum};

/// In-memory stand-in for both remote services: the collection store under
/// `/albums` and the catalog under `/search` and `/albums/{id}/tracks`.
/// Counters record how often each endpoint was hit so tests can assert that
/// a code path made exactly the requests it should have.
pub struct MockStore {
    pub albums: Mutex<Vec<Album>>,
    pub next_id: AtomicUsize,
    pub searches: AtomicUsize,
    pub creates: AtomicUsize,
    pub updates: AtomicUsize,
    pub deletes: AtomicUsize,
    pub track_fetches: AtomicUsize,
    pub last_query: Mutex<Option<String>>,
}

impl MockStore {
    pub fn new() -> Self {
        MockStore {
            albums: Mutex::new(Vec::new()),
            next_id: AtomicUsize::new(1),
            searches: AtomicUsize::new(0),
            creates: AtomicUsize::new(0),
            updates: AtomicUsize::new(0),
            deletes: AtomicUsize::new(0),
            track_fetches: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        }
    }
}

/// Starts the mock server on an ephemeral port and returns its base URL
/// together with the shared store handle.
pub async fn spawn_mock() -> (String, Arc<MockStore>) {
    let store = Arc::new(MockStore::new());

    let app = Router::new()
        .route("/albums", get(list_albums).post(create_album))
        .route(
            "/albums/{id}",
            get(get_album).put(update_album).delete(delete_album),
        )
        .route("/albums/{id}/tracks", get(album_tracks))
        .route("/search", get(search))
        .layer(Extension(Arc::clone(&store)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), store)
}

pub async fn seed_album(store: &MockStore, album: Album) {
    store.albums.lock().await.push(album);
}

// Helper to build a fully populated collection record
pub fn test_album(id: &str, spotify_id: &str, name: &str) -> Album {
    Album {
        id: id.to_string(),
        spotify_id: spotify_id.to_string(),
        name: name.to_string(),
        album_type: "album".to_string(),
        artists: vec![ArtistRef {
            name: format!("{} Artist", name),
        }],
        images: vec![ImageRef {
            url: "https://img.example/cover.jpg".to_string(),
        }],
        genres: vec!["pop".to_string()],
        rating: Some(3),
        tracks: Vec::new(),
    }
}

async fn list_albums(Extension(store): Extension<Arc<MockStore>>) -> Json<Vec<Album>> {
    Json(store.albums.lock().await.clone())
}

async fn get_album(
    Extension(store): Extension<Arc<MockStore>>,
    Path(id): Path<String>,
) -> Result<Json<Album>, StatusCode> {
    store
        .albums
        .lock()
        .await
        .iter()
        .find(|a| a.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_album(
    Extension(store): Extension<Arc<MockStore>>,
    Json(new_album): Json<NewAlbum>,
) -> Json<Album> {
    store.creates.fetch_add(1, Ordering::SeqCst);

    let id = store.next_id.fetch_add(1, Ordering::SeqCst);
    let album = Album {
        id: id.to_string(),
        spotify_id: new_album.spotify_id,
        name: new_album.name,
        album_type: new_album.album_type,
        artists: new_album.artists,
        images: new_album.images,
        genres: new_album.genres,
        rating: Some(new_album.rating),
        tracks: Vec::new(),
    };

    store.albums.lock().await.push(album.clone());
    Json(album)
}

async fn update_album(
    Extension(store): Extension<Arc<MockStore>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Album>, StatusCode> {
    store.updates.fetch_add(1, Ordering::SeqCst);

    let mut albums = store.albums.lock().await;
    let album = albums
        .iter_mut()
        .find(|a| a.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;

    if let Some(rating) = body.get("rating").and_then(Value::as_u64) {
        album.rating = Some(rating as u8);
    }

    Ok(Json(album.clone()))
}

async fn delete_album(
    Extension(store): Extension<Arc<MockStore>>,
    Path(id): Path<String>,
) -> StatusCode {
    store.deletes.fetch_add(1, Ordering::SeqCst);

    let mut albums = store.albums.lock().await;
    let before = albums.len();
    albums.retain(|a| a.id != id);

    if albums.len() < before {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn album_tracks(
    Extension(store): Extension<Arc<MockStore>>,
    Path(id): Path<String>,
) -> Json<Value> {
    store.track_fetches.fetch_add(1, Ordering::SeqCst);

    if id == "no-tracks" {
        return Json(json!({ "items": [] }));
    }

    Json(json!({
        "items": [
            { "id": format!("{}-t1", id), "name": "Opening Track" },
            { "id": format!("{}-t2", id), "name": "Closing Track" },
        ]
    }))
}

// Echoes the query back as a single album so tests can tell which request
// produced the visible results. Two queries are special: "empty" responds
// without the albums key and "boom" fails with a server error.
async fn search(
    Extension(store): Extension<Arc<MockStore>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, StatusCode> {
    store.searches.fetch_add(1, Ordering::SeqCst);

    let q = params.get("q").cloned().unwrap_or_default();
    *store.last_query.lock().await = Some(q.clone());

    if q == "boom" {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    if q == "empty" {
        return Ok(Json(json!({})));
    }

    Ok(Json(json!({
        "albums": {
            "items": [{
                "id": format!("cat-{}", q),
                "name": q,
                "album_type": "album",
                "artists": [{ "name": "Echo Artist" }],
                "images": [{ "url": "https://img.example/cover.jpg" }],
            }]
        }
    })))
}
