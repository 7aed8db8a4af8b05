use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error, info,
    management::CollectionBrowser,
    shelf::ShelfClient,
    types::CollectionTableRow,
    utils::{self, MinRating},
};

pub async fn list(query: Option<String>, min_rating: MinRating) {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching collection...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut browser = CollectionBrowser::new(ShelfClient::new());

    if let Err(e) = browser.load().await {
        pb.finish_and_clear();
        error!("Error fetching albums. Err: {}", e);
    }

    pb.finish_and_clear();

    let query = query.unwrap_or_default();

    // the empty-collection message keys off the filter alone; records that
    // are merely missing cover art still count as matches here
    if browser.filtered(&query, min_rating).is_empty() {
        info!("No albums match your search.");
        return;
    }

    let rows: Vec<CollectionTableRow> = browser
        .visible(&query, min_rating)
        .iter()
        .map(|album| CollectionTableRow {
            id: album.id.clone(),
            name: album.name.clone(),
            artists: utils::artist_names(&album.artists),
            genres: album
                .genres
                .iter()
                .take(3)
                .cloned()
                .collect::<Vec<String>>()
                .join(", "),
            rating: utils::stars(album.rating),
        })
        .collect();

    let table = Table::new(rows);
    println!("Collection\n{}", table);
}
