//! Shopping list manager built on the Shopkeep reducer runtime.
//!
//! The list keeps named, checkable items in insertion order, renders them as
//! markup, and turns input events into store commands:
//!
//! - Add, check, delete, edit and rename items
//! - Hide checked items from the rendered list
//! - Explicit `ItemNotFound` errors instead of silent no-ops
//! - Testing with `ReducerTest`
//!
//! # Quick Start
//!
//! ```no_run
//! use shopping_list::{RecordingSurface, ShoppingListApp, ShoppingListEnvironment, ShoppingListState, UiEvent};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut app = ShoppingListApp::new(
//!     ShoppingListState::new(),
//!     ShoppingListEnvironment::production(),
//!     RecordingSurface::default(),
//! );
//! app.start().await?;
//!
//! app.dispatch(UiEvent::SubmitNewItem { name: "bread".to_string() }).await?;
//!
//! let state = app.snapshot().await;
//! println!("Items: {}", state.count());
//! println!("Markup: {:?}", app.surface().current());
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod command;
pub mod config;
pub mod error;
pub mod reducer;
pub mod render;
pub mod types;

// Re-export commonly used types
pub use app::{DisplaySurface, RecordingSurface, ShoppingListApp, StdoutSurface, UiEvent};
pub use config::AppConfig;
pub use error::{AppError, ShoppingListError};
pub use reducer::{ShoppingListEnvironment, ShoppingListReducer};
pub use render::render;
pub use types::{ItemId, ShoppingAction, ShoppingItem, ShoppingListState};
