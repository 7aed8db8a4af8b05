use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    error, info,
    management::{SearchController, TokenManager, ToggleOutcome},
    shelf::ShelfClient,
    spotify::CatalogClient,
    success,
    types::SearchTableRow,
    utils, warning,
};

pub async fn search(query: Option<String>) {
    let token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run shelfcli auth\n Error: {}",
                e
            );
        }
    };

    if token_mgr.is_expired() {
        warning!("Cached token looks expired. Run shelfcli auth if searches start failing.");
    }

    let mut controller = SearchController::new(
        CatalogClient::new(),
        ShelfClient::new(),
        token_mgr.access_token(),
    );

    // the session needs the collection snapshot for the added markers and
    // the remove path; a failed fetch leaves it empty but usable
    if let Err(e) = controller.load_collection().await {
        warning!("Error fetching added albums. Err: {}", e);
    }

    match query {
        Some(q) => one_shot(&mut controller, &q).await,
        None => session(&mut controller).await,
    }
}

async fn one_shot(controller: &mut SearchController, query: &str) {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Searching the catalog...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    controller.set_query(query);
    controller.settled().await;

    pb.finish_and_clear();

    if let Some(e) = controller.take_search_error().await {
        warning!("Error fetching albums from Spotify. Err: {}", e);
        return;
    }

    render_results(controller).await;
}

async fn session(controller: &mut SearchController) {
    info!("Type to search the catalog; an empty line clears the results.");
    info!("Use +N to add or remove result N, q to quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warning!("Failed to read input. Err: {}", e);
                break;
            }
        };

        let input = line.trim();

        if input == "q" {
            break;
        }

        if let Some(pick) = input.strip_prefix('+') {
            toggle_pick(controller, pick).await;
            continue;
        }

        controller.set_query(input);
        controller.settled().await;

        if let Some(e) = controller.take_search_error().await {
            warning!("Error fetching albums from Spotify. Err: {}", e);
            continue;
        }

        if input.is_empty() {
            continue;
        }

        render_results(controller).await;
    }
}

async fn toggle_pick(controller: &mut SearchController, pick: &str) {
    let results = controller.results().await;

    let index = match pick.trim().parse::<usize>() {
        Ok(n) if n >= 1 && n <= results.len() => n - 1,
        _ => {
            warning!("No search result with number '{}'.", pick.trim());
            return;
        }
    };

    let album = results[index].clone();
    let removing = controller.is_added(&album.id);

    match controller.toggle(&album).await {
        Ok(ToggleOutcome::Added(_)) => success!("Album added successfully!"),
        Ok(ToggleOutcome::AlreadyAdded) => warning!("Album is already added."),
        Ok(ToggleOutcome::Removed(_)) => success!("Album removed successfully!"),
        Ok(ToggleOutcome::NotInCollection) => warning!("Album not found."),
        Err(e) => {
            if removing {
                warning!("Error removing album. Err: {}", e);
            } else {
                warning!("Error adding album. Err: {}", e);
            }
        }
    }

    render_results(controller).await;
}

async fn render_results(controller: &SearchController) {
    let results = controller.results().await;

    if results.is_empty() {
        info!("No matching albums found.");
        return;
    }

    let rows: Vec<SearchTableRow> = results
        .iter()
        .enumerate()
        .map(|(i, album)| SearchTableRow {
            index: i + 1,
            added: if controller.is_added(&album.id) {
                "♥".to_string()
            } else {
                "♡".to_string()
            },
            name: album.name.clone(),
            artists: utils::artist_names(&album.artists),
            album_type: album.album_type.clone(),
        })
        .collect();

    let table = Table::new(rows);
    println!("Results\n{}", table);
}
