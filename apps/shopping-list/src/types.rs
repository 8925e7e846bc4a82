//! Domain types for the shopping list.
//!
//! A shopping list is an ordered sequence of named items that can be checked
//! off, edited in place and removed, plus a flag that hides checked items
//! from the rendered view.

use crate::error::ShoppingListError;
use serde::{Deserialize, Serialize};
use shopkeep_macros::Action;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a shopping list item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Creates an `ItemId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A single shopping list item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    /// Unique identifier, fixed at creation
    pub id: ItemId,
    /// Display label
    pub name: String,
    /// Whether the item has been checked off
    pub checked: bool,
    /// Whether the item is shown as an inline edit form
    pub editing: bool,
}

impl ShoppingItem {
    /// Creates a new unchecked, non-editing item
    #[must_use]
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            checked: false,
            editing: false,
        }
    }

    /// Builder-style setter for `checked`
    #[must_use]
    pub const fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

/// State of the shopping list
///
/// Items are kept in insertion order, which is also display order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListState {
    /// All items, in display order
    pub items: Vec<ShoppingItem>,
    /// Whether checked items are left out of the rendered list
    pub hide_checked_items: bool,
    /// Why the most recent command was rejected, if it was
    pub last_error: Option<ShoppingListError>,
}

impl ShoppingListState {
    /// Creates a new empty list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list holding `items`, in the given order
    #[must_use]
    pub fn with_items(items: Vec<ShoppingItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Returns the number of items
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of checked items
    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }

    /// Returns an item by ID
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == *id)
    }

    /// Checks if an item exists
    #[must_use]
    pub fn exists(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    fn get_mut(&mut self, id: &ItemId) -> Result<&mut ShoppingItem, ShoppingListError> {
        self.items
            .iter_mut()
            .find(|item| item.id == *id)
            .ok_or(ShoppingListError::ItemNotFound(*id))
    }

    /// Appends a new item
    ///
    /// # Errors
    ///
    /// [`ShoppingListError::DuplicateId`] if `id` is already in the list.
    pub fn add_item(
        &mut self,
        id: ItemId,
        name: impl Into<String>,
    ) -> Result<(), ShoppingListError> {
        if self.exists(&id) {
            return Err(ShoppingListError::DuplicateId(id));
        }
        self.items.push(ShoppingItem::new(id, name));
        Ok(())
    }

    /// Flips `checked` and returns the new value
    ///
    /// # Errors
    ///
    /// [`ShoppingListError::ItemNotFound`] if no item has this id.
    pub fn toggle_checked(&mut self, id: &ItemId) -> Result<bool, ShoppingListError> {
        let item = self.get_mut(id)?;
        item.checked = !item.checked;
        Ok(item.checked)
    }

    /// Removes an item, keeping the relative order of the rest
    ///
    /// # Errors
    ///
    /// [`ShoppingListError::ItemNotFound`] if no item has this id.
    pub fn delete_item(&mut self, id: &ItemId) -> Result<ShoppingItem, ShoppingListError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == *id)
            .ok_or(ShoppingListError::ItemNotFound(*id))?;
        Ok(self.items.remove(index))
    }

    /// Flips `editing` and returns the new value
    ///
    /// # Errors
    ///
    /// [`ShoppingListError::ItemNotFound`] if no item has this id.
    pub fn toggle_editing(&mut self, id: &ItemId) -> Result<bool, ShoppingListError> {
        let item = self.get_mut(id)?;
        item.editing = !item.editing;
        Ok(item.editing)
    }

    /// Replaces the item's name and closes its edit form
    ///
    /// # Errors
    ///
    /// [`ShoppingListError::ItemNotFound`] if no item has this id.
    pub fn rename_item(
        &mut self,
        id: &ItemId,
        name: impl Into<String>,
    ) -> Result<(), ShoppingListError> {
        let item = self.get_mut(id)?;
        item.name = name.into();
        item.editing = false;
        Ok(())
    }

    /// Flips `hide_checked_items` and returns the new value
    pub const fn toggle_filter(&mut self) -> bool {
        self.hide_checked_items = !self.hide_checked_items;
        self.hide_checked_items
    }
}

/// Actions representing commands and events for the shopping list
///
/// Commands carry user intent and may be rejected. Each accepted command
/// produces exactly one event, which is what actually changes the list.
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShoppingAction {
    // ========== Commands ==========
    /// Command: Append a new item; its id comes from the environment
    #[command]
    AddItem {
        /// Label for the new item
        name: String,
    },

    /// Command: Flip an item's checked flag
    #[command]
    ToggleChecked {
        /// Item to toggle
        id: ItemId,
    },

    /// Command: Remove an item
    #[command]
    DeleteItem {
        /// Item to remove
        id: ItemId,
    },

    /// Command: Open or close an item's edit form
    #[command]
    ToggleEditing {
        /// Item to toggle
        id: ItemId,
    },

    /// Command: Rename an item and close its edit form
    #[command]
    RenameItem {
        /// Item to rename
        id: ItemId,
        /// New label
        name: String,
    },

    /// Command: Show or hide checked items
    #[command]
    ToggleFilter,

    // ========== Events ==========
    /// Event: Item was appended
    #[event]
    ItemAdded {
        /// Item identifier
        id: ItemId,
        /// Item label
        name: String,
    },

    /// Event: Item's checked flag was flipped
    #[event]
    CheckedToggled {
        /// Item identifier
        id: ItemId,
    },

    /// Event: Item was removed
    #[event]
    ItemDeleted {
        /// Item identifier
        id: ItemId,
    },

    /// Event: Item's edit form was opened or closed
    #[event]
    EditingToggled {
        /// Item identifier
        id: ItemId,
    },

    /// Event: Item was renamed
    #[event]
    ItemRenamed {
        /// Item identifier
        id: ItemId,
        /// New label
        name: String,
    },

    /// Event: Checked-item filter was flipped
    #[event]
    FilterToggled,

    /// Event: A command was rejected
    #[event]
    CommandRejected {
        /// Why it was rejected
        error: ShoppingListError,
    },
}
