use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    info,
    management::{DetailEditor, TokenManager, TracksState},
    shelf::ShelfClient,
    spotify::CatalogClient,
    success, utils, warning,
};

/// Displays the full detail view of a single collection record.
///
/// Fetches the album from the collection store by its record id and prints
/// its stored fields, then enriches the view with the live track listing
/// from the Spotify catalog. The track listing is best effort: when no
/// cached token exists, the token has gone stale, or the record carries no
/// catalog id, the view simply reports that no tracks were found instead of
/// failing the whole command.
///
/// # Arguments
///
/// * `id` - Collection record id (not the Spotify catalog id)
/// * `open` - Open the album page on open.spotify.com in the default browser
///
/// # Output Example
///
/// ```text
/// [o] Thriller
/// [o] Artists: Michael Jackson
/// [o] Album Type: album
/// [o] Genres: pop, funk
/// [o] Rating: ★★★★☆
/// [o] Tracks:
///  1. Wanna Be Startin' Somethin'
///  2. Baby Be Mine
/// ```
pub async fn show(id: String, open: bool) {
    let token = match TokenManager::load().await {
        Ok(manager) => {
            if manager.is_expired() {
                warning!("Cached token looks expired. Track listings may be unavailable.");
            }
            Some(manager.access_token())
        }
        Err(_) => {
            warning!("No cached token found. Run shelfcli auth to fetch track listings.");
            None
        }
    };

    let mut editor = DetailEditor::new(ShelfClient::new(), CatalogClient::new(), token);

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching album...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    editor.load(&id).await;
    pb.finish_and_clear();

    let album = match editor.album() {
        Some(album) => album.clone(),
        None => {
            warning!("Album not found.");
            return;
        }
    };

    info!("{}", album.name);
    info!("Artists: {}", utils::artist_names(&album.artists));
    info!("Album Type: {}", album.album_type);

    if album.genres.is_empty() {
        info!("No genres stored for this album.");
    } else {
        info!("Genres: {}", album.genres.join(", "));
    }

    match album.rating {
        Some(rating) => info!("Rating: {}", utils::stars(Some(rating))),
        None => info!("No rating yet. Be the first to rate this album."),
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching tracks...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    editor.load_tracks().await;
    pb.finish_and_clear();

    match editor.tracks() {
        TracksState::Loaded(tracks) => {
            info!("Tracks:");
            for (i, track) in tracks.iter().enumerate() {
                println!("{:>3}. {}", i + 1, track.name);
            }
        }
        _ => info!("No tracks found."),
    }

    if open {
        if album.spotify_id.is_empty() {
            warning!("No catalog id stored for this album.");
            return;
        }

        let album_url = format!("https://open.spotify.com/album/{}", album.spotify_id);
        if webbrowser::open(&album_url).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                album_url
            )
        }
    }
}

pub async fn rate(id: String, rating: String) {
    let mut editor = DetailEditor::new(ShelfClient::new(), CatalogClient::new(), None);

    editor.load(&id).await;

    if editor.album().is_none() {
        warning!("Album not found.");
        return;
    }

    match editor.set_rating(&rating).await {
        Ok(()) => {
            success!("Rating updated successfully!");
            if let Some(album) = editor.album() {
                info!("Rating: {}", utils::stars(album.rating));
            }
        }
        Err(message) => {
            warning!("{}", message);
        }
    }
}

pub async fn remove(id: String, yes: bool) {
    let mut editor = DetailEditor::new(ShelfClient::new(), CatalogClient::new(), None);

    editor.load(&id).await;

    let album = match editor.album() {
        Some(album) => album.clone(),
        None => {
            warning!("Album not found.");
            return;
        }
    };

    if !yes {
        info!(
            "Removing: {} - {}",
            album.name,
            utils::artist_names(&album.artists)
        );
        warning!("Are you sure you want to delete this album? [y/N]");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let answer = match lines.next_line().await {
            Ok(Some(line)) => line,
            _ => String::new(),
        };

        if !answer.trim().eq_ignore_ascii_case("y") {
            info!("Aborted.");
            return;
        }
    }

    match editor.delete().await {
        Ok(name) => {
            success!("Album removed successfully!");
            info!("{} is off the shelf. Run shelfcli list to browse the rest.", name);
        }
        Err(message) => {
            warning!("{}", message);
        }
    }
}
