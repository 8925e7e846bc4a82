//! Error types for the shopping list.

use crate::types::ItemId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a shopping list command can be rejected
///
/// A rejected command leaves the list untouched.
#[derive(Error, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShoppingListError {
    /// The command referenced an id that is not in the list
    #[error("item {0} not found")]
    ItemNotFound(ItemId),

    /// A blank name was submitted while empty names are rejected
    #[error("item name cannot be empty")]
    EmptyName,

    /// The id generator returned an id that is already in use
    #[error("item {0} already exists")]
    DuplicateId(ItemId),
}

/// Errors surfaced by [`crate::app::ShoppingListApp::dispatch`]
#[derive(Error, Debug)]
pub enum AppError {
    /// The store rejected the command; nothing was re-rendered
    #[error(transparent)]
    Rejected(#[from] ShoppingListError),

    /// The display surface could not accept the rendered markup
    #[error("display surface failed: {0}")]
    Display(#[from] std::io::Error),
}
