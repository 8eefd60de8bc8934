pub mod app;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod error;
pub mod event;
pub mod meme;
pub mod quiz;
pub mod store;
pub mod streak;
pub mod ui;
pub mod util;

pub use app::App;
pub use catalog::Catalog;
pub use config::AppConfig;
pub use error::{QuizMemeError, Result};
pub use store::QuizStore;
