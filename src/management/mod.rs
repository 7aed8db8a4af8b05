mod browser;
mod detail;
mod search;
mod token;

pub use browser::CollectionBrowser;
pub use browser::album_matches;
pub use browser::filter_albums;
pub use browser::visible_albums;
pub use detail::DetailEditor;
pub use detail::DetailState;
pub use detail::TracksState;
pub use search::SEARCH_DEBOUNCE;
pub use search::SearchController;
pub use search::ToggleOutcome;
pub use token::TokenManager;
