pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod validation;

pub use config::Config;
pub use error::{ApiError, StoreError};
pub use models::{Card, CardId, NewCard, Rank, Suit};
pub use routes::create_router;
pub use state::AppState;
pub use store::{CardStore, InMemoryCardStore};
pub use validation::Validator;
