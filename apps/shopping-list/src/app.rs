//! Application shell: owns the store and keeps the display in sync.
//!
//! Every [`UiEvent`] becomes exactly one store command, followed by exactly
//! one full render pushed to the [`DisplaySurface`].

use crate::config::AppConfig;
use crate::error::AppError;
use crate::reducer::{ShoppingListEnvironment, ShoppingListReducer};
use crate::render::render;
use crate::types::{ItemId, ShoppingAction, ShoppingItem, ShoppingListState};
use serde::{Deserialize, Serialize};
use shopkeep_runtime::Store;
use std::io::Write;

/// Store type used by the shopping list
pub type ShoppingListStore =
    Store<ShoppingListState, ShoppingAction, ShoppingListEnvironment, ShoppingListReducer>;

/// Input events, each carrying a typed payload
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiEvent {
    /// The new-item form was submitted
    SubmitNewItem {
        /// Text typed into the entry field
        name: String,
    },
    /// An item's check button was pressed
    ToggleItem {
        /// Item the button belongs to
        id: ItemId,
    },
    /// An item's delete button was pressed
    DeleteItem {
        /// Item the button belongs to
        id: ItemId,
    },
    /// An item's edit button was pressed
    ToggleEdit {
        /// Item the button belongs to
        id: ItemId,
    },
    /// An item's edit form was submitted
    SubmitRename {
        /// Item being edited
        id: ItemId,
        /// Text typed into the edit field
        name: String,
    },
    /// The hide-checked checkbox was clicked
    ToggleFilter,
}

impl From<UiEvent> for ShoppingAction {
    fn from(event: UiEvent) -> Self {
        match event {
            UiEvent::SubmitNewItem { name } => Self::AddItem { name },
            UiEvent::ToggleItem { id } => Self::ToggleChecked { id },
            UiEvent::DeleteItem { id } => Self::DeleteItem { id },
            UiEvent::ToggleEdit { id } => Self::ToggleEditing { id },
            UiEvent::SubmitRename { id, name } => Self::RenameItem { id, name },
            UiEvent::ToggleFilter => Self::ToggleFilter,
        }
    }
}

/// Where rendered markup ends up
pub trait DisplaySurface {
    /// Replace the displayed list with `markup`
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the markup could not be delivered.
    fn replace_list(&mut self, markup: &str) -> std::io::Result<()>;
}

/// Writes each frame as one line to a writer (stdout in the CLI)
#[derive(Debug)]
pub struct StdoutSurface<W: Write> {
    out: W,
}

impl<W: Write> StdoutSurface<W> {
    /// Wrap a writer
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Unwrap the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySurface for StdoutSurface<W> {
    fn replace_list(&mut self, markup: &str) -> std::io::Result<()> {
        writeln!(self.out, "{markup}")?;
        self.out.flush()
    }
}

/// Keeps every frame it is given
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    /// Frames in the order they were displayed
    pub frames: Vec<String>,
}

impl RecordingSurface {
    /// The most recent frame
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl DisplaySurface for RecordingSurface {
    fn replace_list(&mut self, markup: &str) -> std::io::Result<()> {
        self.frames.push(markup.to_string());
        Ok(())
    }
}

/// The demo list shown on first load
#[must_use]
pub fn seed_state(env: &ShoppingListEnvironment) -> ShoppingListState {
    ShoppingListState::with_items(vec![
        ShoppingItem::new(env.next_item_id(), "apples"),
        ShoppingItem::new(env.next_item_id(), "oranges"),
        ShoppingItem::new(env.next_item_id(), "milk").with_checked(true),
        ShoppingItem::new(env.next_item_id(), "bread"),
    ])
}

/// Single owner of the store and the display for one session
pub struct ShoppingListApp<D: DisplaySurface> {
    store: ShoppingListStore,
    surface: D,
}

impl<D: DisplaySurface> ShoppingListApp<D> {
    /// Creates an app around an explicit initial state and environment
    pub fn new(state: ShoppingListState, env: ShoppingListEnvironment, surface: D) -> Self {
        Self {
            store: Store::new(state, ShoppingListReducer::new(), env),
            surface,
        }
    }

    /// Creates an app from configuration, with random UUID ids
    pub fn from_config(config: &AppConfig, surface: D) -> Self {
        let env = ShoppingListEnvironment::production()
            .with_reject_empty_names(config.reject_empty_names);
        let mut state = if config.seed_items {
            seed_state(&env)
        } else {
            ShoppingListState::new()
        };
        state.hide_checked_items = config.hide_checked_items;
        Self::new(state, env, surface)
    }

    /// Initial render on startup
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Display`] if the surface rejects the markup.
    pub async fn start(&mut self) -> Result<(), AppError> {
        let items = self.store.state(ShoppingListState::count).await;
        tracing::info!(items, "Starting shopping list");
        self.refresh().await
    }

    /// Routes one input event to the store, then re-renders
    ///
    /// A rejected command is not re-rendered: the list did not change.
    ///
    /// # Errors
    ///
    /// - [`AppError::Rejected`] if the store rejected the command
    /// - [`AppError::Display`] if the surface rejects the markup
    #[tracing::instrument(skip(self), name = "dispatch")]
    pub async fn dispatch(&mut self, event: UiEvent) -> Result<(), AppError> {
        self.store.send(event.into()).await;

        if let Some(error) = self.store.state(|s| s.last_error.clone()).await {
            tracing::warn!(%error, "Event rejected");
            return Err(error.into());
        }

        self.refresh().await
    }

    /// Renders the current state and pushes it to the surface
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Display`] if the surface rejects the markup.
    pub async fn refresh(&mut self) -> Result<(), AppError> {
        let markup = self.render().await;
        self.surface.replace_list(&markup)?;
        Ok(())
    }

    /// Markup for the current state
    pub async fn render(&self) -> String {
        self.store.state(render).await
    }

    /// Copy of the current state
    pub async fn snapshot(&self) -> ShoppingListState {
        self.store.state(Clone::clone).await
    }

    /// The display surface
    pub const fn surface(&self) -> &D {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopkeep_testing::SequentialIdGenerator;
    use std::sync::Arc;
    use uuid::Uuid;

    fn test_env() -> ShoppingListEnvironment {
        ShoppingListEnvironment::new(Arc::new(SequentialIdGenerator::new()))
    }

    struct FailingSurface;

    impl DisplaySurface for FailingSurface {
        fn replace_list(&mut self, _markup: &str) -> std::io::Result<()> {
            Err(std::io::Error::other("display closed"))
        }
    }

    #[test]
    fn test_ui_events_map_to_commands() {
        let id = ItemId::from_uuid(Uuid::from_u128(1));
        let cases = [
            (
                UiEvent::SubmitNewItem { name: "tea".into() },
                ShoppingAction::AddItem { name: "tea".into() },
            ),
            (UiEvent::ToggleItem { id }, ShoppingAction::ToggleChecked { id }),
            (UiEvent::DeleteItem { id }, ShoppingAction::DeleteItem { id }),
            (UiEvent::ToggleEdit { id }, ShoppingAction::ToggleEditing { id }),
            (
                UiEvent::SubmitRename { id, name: "rice".into() },
                ShoppingAction::RenameItem { id, name: "rice".into() },
            ),
            (UiEvent::ToggleFilter, ShoppingAction::ToggleFilter),
        ];

        for (event, expected) in cases {
            let action = ShoppingAction::from(event);
            assert!(action.is_command());
            assert_eq!(action, expected);
        }
    }

    #[test]
    fn test_seed_state_matches_demo_page() {
        let state = seed_state(&test_env());
        let summary: Vec<_> = state
            .items
            .iter()
            .map(|i| (i.name.as_str(), i.checked))
            .collect();
        assert_eq!(
            summary,
            [("apples", false), ("oranges", false), ("milk", true), ("bread", false)]
        );
    }

    #[test]
    fn test_stdout_surface_writes_one_line_per_frame() {
        let mut surface = StdoutSurface::new(Vec::new());
        assert!(surface.replace_list("<li>a</li>").is_ok());
        assert!(surface.replace_list("").is_ok());
        assert_eq!(surface.into_inner(), b"<li>a</li>\n\n");
    }

    #[tokio::test]
    async fn test_surface_failure_keeps_applied_change() {
        let mut app = ShoppingListApp::new(seed_state(&test_env()), test_env(), FailingSurface);

        let result = app.dispatch(UiEvent::ToggleFilter).await;
        assert!(matches!(result, Err(AppError::Display(_))));

        let state = app.snapshot().await;
        assert!(state.hide_checked_items);
        assert!(state.last_error.is_none());
    }

    #[tokio::test]
    async fn test_surface_failure_on_start() {
        let mut app = ShoppingListApp::new(ShoppingListState::new(), test_env(), FailingSurface);
        assert!(matches!(app.start().await, Err(AppError::Display(_))));
    }
}
