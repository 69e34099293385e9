// Library exports for integration tests and reusable components

// Internal modules needed for compilation (hidden from docs)
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod ui;

// Re-export the app-wide context at crate root for easier access
pub use ui::AppContext;

pub mod cache;
pub mod player;
pub mod proxy;
pub mod storage;
pub mod youtube;
