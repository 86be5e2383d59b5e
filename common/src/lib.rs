//! NYC Finder Common Library
//!
//! CLIとWeb(WASM)で共有される型と検索コア

pub mod types;
pub mod error;
pub mod soda;
pub mod normalize;
pub mod image;
pub mod url_state;
pub mod cancel;
pub mod debounce;
pub mod notification;
pub mod storage;
pub mod saved;
pub mod platform;
pub mod finder;

pub use types::{
    Borough, BoroughFilter, FilterState, ParkRecord, SortOption, ADDRESS_UNAVAILABLE,
    UNKNOWN_BOROUGH, UNNAMED_PARK,
};
pub use error::{Error, Result};
pub use soda::{ParkQuery, DATASET_URL, RESULT_LIMIT};
pub use normalize::{decode_response, map_search_url, present};
pub use cancel::CancellationToken;
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE_MS};
pub use notification::{Notification, Notifier, NOTIFICATION_DURATION_MS};
pub use storage::{KeyValueStore, MemoryStore, Persisted};
pub use saved::{SavedSet, SAVED_STORAGE_KEY};
pub use platform::{ClipboardWriter, MemoryUrl, ParkSource, UrlStateStore};
pub use finder::{
    Finder, ResultState, SearchOutcome, SearchTicket, DOCUMENT_TITLE, EMPTY_RESULTS_MESSAGE,
    EMPTY_SAVED_MESSAGE,
};
