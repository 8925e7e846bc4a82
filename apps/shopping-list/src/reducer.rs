//! Reducer logic for the shopping list.
//!
//! Commands are turned into events, and events are applied to state. A command
//! that cannot be applied is recorded as `CommandRejected` and leaves the
//! items untouched.

use crate::error::ShoppingListError;
use crate::types::{ItemId, ShoppingAction, ShoppingListState};
use shopkeep_core::{
    effect::Effect,
    environment::{IdGenerator, UuidGenerator},
    reducer::Reducer,
    SmallVec,
};
use std::sync::Arc;

/// Environment dependencies for the shopping list reducer
#[derive(Clone)]
pub struct ShoppingListEnvironment {
    /// Source of fresh item ids
    pub ids: Arc<dyn IdGenerator>,
    /// Reject `AddItem` commands whose name is blank
    pub reject_empty_names: bool,
}

impl ShoppingListEnvironment {
    /// Creates a new `ShoppingListEnvironment` that accepts any name
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            ids,
            reject_empty_names: false,
        }
    }

    /// Environment backed by random UUIDs
    #[must_use]
    pub fn production() -> Self {
        Self::new(Arc::new(UuidGenerator))
    }

    /// Builder-style setter for `reject_empty_names`
    #[must_use]
    pub const fn with_reject_empty_names(mut self, reject: bool) -> Self {
        self.reject_empty_names = reject;
        self
    }

    /// Draws the next item id
    #[must_use]
    pub fn next_item_id(&self) -> ItemId {
        ItemId::from_uuid(self.ids.next_id())
    }
}

impl std::fmt::Debug for ShoppingListEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShoppingListEnvironment")
            .field("reject_empty_names", &self.reject_empty_names)
            .finish_non_exhaustive()
    }
}

/// Reducer for the shopping list
#[derive(Clone, Debug, Default)]
pub struct ShoppingListReducer;

impl ShoppingListReducer {
    /// Creates a new `ShoppingListReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Applies an event to state
    fn apply_event(
        state: &mut ShoppingListState,
        event: &ShoppingAction,
    ) -> Result<(), ShoppingListError> {
        match event {
            ShoppingAction::ItemAdded { id, name } => state.add_item(*id, name.clone()),
            ShoppingAction::CheckedToggled { id } => state.toggle_checked(id).map(drop),
            ShoppingAction::ItemDeleted { id } => state.delete_item(id).map(drop),
            ShoppingAction::EditingToggled { id } => state.toggle_editing(id).map(drop),
            ShoppingAction::ItemRenamed { id, name } => state.rename_item(id, name.clone()),
            ShoppingAction::FilterToggled => {
                state.toggle_filter();
                Ok(())
            },
            ShoppingAction::CommandRejected { error } => Err(error.clone()),
            // Commands are not applied to state
            ShoppingAction::AddItem { .. }
            | ShoppingAction::ToggleChecked { .. }
            | ShoppingAction::DeleteItem { .. }
            | ShoppingAction::ToggleEditing { .. }
            | ShoppingAction::RenameItem { .. }
            | ShoppingAction::ToggleFilter => Ok(()),
        }
    }

    /// Applies an event and records the outcome in `last_error`
    fn commit(state: &mut ShoppingListState, event: &ShoppingAction) {
        match Self::apply_event(state, event) {
            Ok(()) => {
                tracing::trace!(event = event.event_type(), "Event applied");
                state.last_error = None;
            },
            Err(error) => {
                tracing::debug!(event = event.event_type(), %error, "Command rejected");
                state.last_error = Some(error);
            },
        }
    }

    /// Converts a command into the event it produces
    fn decide(
        command: ShoppingAction,
        env: &ShoppingListEnvironment,
    ) -> Result<ShoppingAction, ShoppingListError> {
        Ok(match command {
            ShoppingAction::AddItem { name } => {
                if env.reject_empty_names && name.trim().is_empty() {
                    return Err(ShoppingListError::EmptyName);
                }
                ShoppingAction::ItemAdded {
                    id: env.next_item_id(),
                    name,
                }
            },
            ShoppingAction::ToggleChecked { id } => ShoppingAction::CheckedToggled { id },
            ShoppingAction::DeleteItem { id } => ShoppingAction::ItemDeleted { id },
            ShoppingAction::ToggleEditing { id } => ShoppingAction::EditingToggled { id },
            ShoppingAction::RenameItem { id, name } => ShoppingAction::ItemRenamed { id, name },
            ShoppingAction::ToggleFilter => ShoppingAction::FilterToggled,
            event => event,
        })
    }
}

impl Reducer for ShoppingListReducer {
    type State = ShoppingListState;
    type Action = ShoppingAction;
    type Environment = ShoppingListEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let event = Self::decide(action, env)
            .unwrap_or_else(|error| ShoppingAction::CommandRejected { error });
        Self::commit(state, &event);
        SmallVec::new()
    }
}
