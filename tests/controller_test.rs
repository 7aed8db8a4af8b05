mod common;

use std::{sync::atomic::Ordering, time::Duration};

use shelfcli::{
    management::{
        CollectionBrowser, DetailEditor, DetailState, SearchController, ToggleOutcome, TracksState,
    },
    shelf::ShelfClient,
    spotify::CatalogClient,
    utils::MinRating,
};
use tokio::time::sleep;

// Helper to wire a controller against the mock endpoints
fn controller_for(base: &str) -> SearchController {
    SearchController::new(
        CatalogClient::with_base_url(base.to_string()),
        ShelfClient::with_base_url(base.to_string()),
        "test-token".to_string(),
    )
}

#[tokio::test]
async fn test_rapid_queries_collapse_into_one_search() {
    let (base, store) = common::spawn_mock().await;
    let mut controller = controller_for(&base);

    // Three keystrokes in quick succession; only the last survives the
    // quiet period
    controller.set_query("a");
    controller.set_query("ab");
    controller.set_query("abc");
    controller.settled().await;

    assert_eq!(store.searches.load(Ordering::SeqCst), 1);
    assert_eq!(*store.last_query.lock().await, Some("abc".to_string()));

    let results = controller.results().await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "abc");
}

#[tokio::test]
async fn test_new_input_restarts_the_quiet_period() {
    let (base, store) = common::spawn_mock().await;
    let mut controller = controller_for(&base);

    controller.set_query("alpha");
    sleep(Duration::from_millis(100)).await;

    // Well inside the window, nothing has been sent yet
    assert_eq!(store.searches.load(Ordering::SeqCst), 0);

    controller.set_query("beta");
    controller.settled().await;

    assert_eq!(store.searches.load(Ordering::SeqCst), 1);
    assert_eq!(*store.last_query.lock().await, Some("beta".to_string()));
}

#[tokio::test]
async fn test_empty_query_clears_results_without_a_request() {
    let (base, store) = common::spawn_mock().await;
    let mut controller = controller_for(&base);

    controller.set_query("alpha");
    controller.settled().await;
    assert_eq!(controller.results().await.len(), 1);

    controller.set_query("");
    controller.settled().await;

    assert!(controller.results().await.is_empty());
    assert_eq!(store.searches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_response_without_albums_key_means_no_results() {
    let (base, store) = common::spawn_mock().await;
    let mut controller = controller_for(&base);

    controller.set_query("empty");
    controller.settled().await;

    assert_eq!(store.searches.load(Ordering::SeqCst), 1);
    assert!(controller.results().await.is_empty());
    assert!(controller.take_search_error().await.is_none());
}

#[tokio::test]
async fn test_failed_search_keeps_previous_results() {
    let (base, store) = common::spawn_mock().await;
    let mut controller = controller_for(&base);

    controller.set_query("alpha");
    controller.settled().await;
    assert_eq!(controller.results().await.len(), 1);

    controller.set_query("boom");
    controller.settled().await;

    assert_eq!(store.searches.load(Ordering::SeqCst), 2);

    // the failure is reported once, the old results stay up
    assert!(controller.take_search_error().await.is_some());
    assert!(controller.take_search_error().await.is_none());

    let results = controller.results().await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "alpha");
}

#[tokio::test]
async fn test_toggle_adds_then_removes_an_album() {
    let (base, store) = common::spawn_mock().await;
    let mut controller = controller_for(&base);

    controller.load_collection().await.unwrap();

    controller.set_query("Thriller");
    controller.settled().await;
    let album = controller.results().await[0].clone();

    // First toggle creates a store record seeded with the neutral rating
    let outcome = controller.toggle(&album).await.unwrap();
    assert_eq!(outcome, ToggleOutcome::Added("Thriller".to_string()));
    assert_eq!(store.creates.load(Ordering::SeqCst), 1);
    assert!(controller.is_added("cat-Thriller"));

    {
        let stored = store.albums.lock().await;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].spotify_id, "cat-Thriller");
        assert_eq!(stored[0].rating, Some(3));
        assert!(stored[0].genres.is_empty());
    }

    // Second toggle removes the same record again
    let outcome = controller.toggle(&album).await.unwrap();
    assert_eq!(outcome, ToggleOutcome::Removed("Thriller".to_string()));
    assert_eq!(store.deletes.load(Ordering::SeqCst), 1);
    assert!(!controller.is_added("cat-Thriller"));
    assert!(store.albums.lock().await.is_empty());
}

#[tokio::test]
async fn test_duplicate_add_is_caught_against_fresh_store_state() {
    let (base, store) = common::spawn_mock().await;
    let mut controller = controller_for(&base);

    // Session starts with an empty collection snapshot
    controller.load_collection().await.unwrap();

    // Another session shelves the album behind our back
    common::seed_album(&store, common::test_album("77", "cat-Thriller", "Thriller")).await;

    controller.set_query("Thriller");
    controller.settled().await;
    let album = controller.results().await[0].clone();

    let outcome = controller.toggle(&album).await.unwrap();
    assert_eq!(outcome, ToggleOutcome::AlreadyAdded);

    // No record written and the stale session snapshot stays as it was
    assert_eq!(store.creates.load(Ordering::SeqCst), 0);
    assert_eq!(store.albums.lock().await.len(), 1);
    assert!(controller.collection().is_empty());
}

#[tokio::test]
async fn test_invalid_ratings_are_rejected_before_any_request() {
    let (base, store) = common::spawn_mock().await;
    common::seed_album(&store, common::test_album("9", "sp9", "Abbey Road")).await;

    let mut editor = DetailEditor::new(
        ShelfClient::with_base_url(base.clone()),
        CatalogClient::with_base_url(base.clone()),
        None,
    );
    editor.load("9").await;

    for input in ["0", "6", "abc", "", "3.5", "-1"] {
        let result = editor.set_rating(input).await;
        assert_eq!(
            result,
            Err("Please enter a valid rating between 1 and 5".to_string())
        );
    }

    assert_eq!(store.updates.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_valid_rating_is_written_and_replaces_state() {
    let (base, store) = common::spawn_mock().await;
    common::seed_album(&store, common::test_album("9", "sp9", "Abbey Road")).await;

    let mut editor = DetailEditor::new(
        ShelfClient::with_base_url(base.clone()),
        CatalogClient::with_base_url(base.clone()),
        None,
    );
    editor.load("9").await;

    editor.set_rating(" 5 ").await.unwrap();

    assert_eq!(store.updates.load(Ordering::SeqCst), 1);
    assert_eq!(editor.album().unwrap().rating, Some(5));
    assert_eq!(store.albums.lock().await[0].rating, Some(5));
}

#[tokio::test]
async fn test_rating_an_unknown_album_fails_without_a_request() {
    let (base, store) = common::spawn_mock().await;

    let mut editor = DetailEditor::new(
        ShelfClient::with_base_url(base.clone()),
        CatalogClient::with_base_url(base.clone()),
        None,
    );
    editor.load("999").await;

    assert_eq!(editor.state(), &DetailState::NotFound);
    assert_eq!(
        editor.set_rating("3").await,
        Err("Album not found.".to_string())
    );
    assert_eq!(store.updates.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_missing_album_never_fetches_tracks() {
    let (base, store) = common::spawn_mock().await;

    let mut editor = DetailEditor::new(
        ShelfClient::with_base_url(base.clone()),
        CatalogClient::with_base_url(base.clone()),
        Some("test-token".to_string()),
    );
    editor.load("404").await;
    editor.load_tracks().await;

    assert_eq!(editor.tracks(), &TracksState::Empty);
    assert_eq!(store.track_fetches.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_tracks_need_a_token() {
    let (base, store) = common::spawn_mock().await;
    common::seed_album(&store, common::test_album("7", "sp7", "Abbey Road")).await;

    let mut editor = DetailEditor::new(
        ShelfClient::with_base_url(base.clone()),
        CatalogClient::with_base_url(base.clone()),
        None,
    );
    editor.load("7").await;
    editor.load_tracks().await;

    assert_eq!(editor.tracks(), &TracksState::Empty);
    assert_eq!(store.track_fetches.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_tracks_are_fetched_live_for_the_loaded_album() {
    let (base, store) = common::spawn_mock().await;
    common::seed_album(&store, common::test_album("7", "sp7", "Abbey Road")).await;

    let mut editor = DetailEditor::new(
        ShelfClient::with_base_url(base.clone()),
        CatalogClient::with_base_url(base.clone()),
        Some("test-token".to_string()),
    );
    editor.load("7").await;
    editor.load_tracks().await;

    assert_eq!(store.track_fetches.load(Ordering::SeqCst), 1);
    match editor.tracks() {
        TracksState::Loaded(tracks) => {
            assert_eq!(tracks.len(), 2);
            assert_eq!(tracks[0].name, "Opening Track");
            assert_eq!(tracks[1].name, "Closing Track");
        }
        other => panic!("expected loaded tracks, got {:?}", other),
    }
}

#[tokio::test]
async fn test_album_without_tracks_shows_as_empty() {
    let (base, store) = common::spawn_mock().await;
    common::seed_album(&store, common::test_album("7", "no-tracks", "Silent Album")).await;

    let mut editor = DetailEditor::new(
        ShelfClient::with_base_url(base.clone()),
        CatalogClient::with_base_url(base.clone()),
        Some("test-token".to_string()),
    );
    editor.load("7").await;
    editor.load_tracks().await;

    assert_eq!(store.track_fetches.load(Ordering::SeqCst), 1);
    assert_eq!(editor.tracks(), &TracksState::Empty);
}

#[tokio::test]
async fn test_delete_removes_the_record_once() {
    let (base, store) = common::spawn_mock().await;
    common::seed_album(&store, common::test_album("5", "sp5", "Abbey Road")).await;

    let mut editor = DetailEditor::new(
        ShelfClient::with_base_url(base.clone()),
        CatalogClient::with_base_url(base.clone()),
        None,
    );
    editor.load("5").await;

    let name = editor.delete().await.unwrap();
    assert_eq!(name, "Abbey Road");
    assert_eq!(editor.state(), &DetailState::Deleted);
    assert_eq!(store.deletes.load(Ordering::SeqCst), 1);
    assert!(store.albums.lock().await.is_empty());

    // A second delete finds no loaded record and sends nothing
    assert_eq!(editor.delete().await, Err("Album not found.".to_string()));
    assert_eq!(store.deletes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_browser_filters_the_loaded_collection() {
    let (base, store) = common::spawn_mock().await;

    common::seed_album(&store, {
        let mut album = common::test_album("1", "sp1", "Abbey Road");
        album.genres = vec!["rock".to_string()];
        album.rating = Some(5);
        album
    })
    .await;
    common::seed_album(&store, {
        let mut album = common::test_album("2", "sp2", "Unrated Gem");
        album.genres = vec!["rock".to_string()];
        album.rating = None;
        album
    })
    .await;
    common::seed_album(&store, {
        let mut album = common::test_album("3", "sp3", "Coverless Rock");
        album.genres = vec!["rock".to_string()];
        album.rating = Some(4);
        album.images = Vec::new();
        album
    })
    .await;

    let mut browser = CollectionBrowser::new(ShelfClient::with_base_url(base.clone()));
    browser.load().await.unwrap();
    assert_eq!(browser.albums().len(), 3);

    // Genre text matches all three, the cover gate trims the rendered set
    assert_eq!(browser.filtered("rock", MinRating::All).len(), 3);
    assert_eq!(browser.visible("rock", MinRating::All).len(), 2);

    // The threshold drops the unrated album, then the cover gate drops one more
    let filtered = browser.filtered("rock", MinRating::AtLeast(4));
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|a| a.rating >= Some(4)));

    let visible = browser.visible("rock", MinRating::AtLeast(4));
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Abbey Road");
}
