//! Tests for #[derive(Action)] macro

use shopkeep_macros::Action;
use uuid::Uuid;

#[derive(Action, Clone, Debug, PartialEq)]
enum ListAction {
    #[command]
    AddItem {
        name: String,
    },

    #[command]
    ToggleFilter,

    #[command]
    Remove(Uuid),

    #[event]
    ItemAdded {
        id: Uuid,
        name: String,
    },

    #[event]
    FilterToggled,

    #[event]
    Removed(Uuid),

    Unclassified,
}

#[test]
fn test_is_command() {
    let action = ListAction::AddItem {
        name: "apples".to_string(),
    };
    assert!(action.is_command());
    assert!(!action.is_event());
}

#[test]
fn test_is_event() {
    let action = ListAction::ItemAdded {
        id: Uuid::nil(),
        name: "apples".to_string(),
    };
    assert!(!action.is_command());
    assert!(action.is_event());
}

#[test]
fn test_event_type() {
    let action = ListAction::ItemAdded {
        id: Uuid::nil(),
        name: "apples".to_string(),
    };
    assert_eq!(action.event_type(), "ItemAdded.v1");
    assert_eq!(ListAction::FilterToggled.event_type(), "FilterToggled.v1");
    assert_eq!(ListAction::Removed(Uuid::nil()).event_type(), "Removed.v1");
}

#[test]
fn test_command_event_type() {
    // Commands don't have event types
    assert_eq!(ListAction::ToggleFilter.event_type(), "unknown");
    assert_eq!(ListAction::Remove(Uuid::nil()).event_type(), "unknown");
}

#[test]
fn test_all_shapes_of_command_identified() {
    let commands = vec![
        ListAction::AddItem {
            name: "milk".to_string(),
        },
        ListAction::ToggleFilter,
        ListAction::Remove(Uuid::nil()),
    ];

    for cmd in commands {
        assert!(cmd.is_command(), "Expected command: {cmd:?}");
        assert!(!cmd.is_event(), "Should not be event: {cmd:?}");
    }
}

#[test]
fn test_unmarked_variant_is_neither() {
    let action = ListAction::Unclassified;
    assert!(!action.is_command());
    assert!(!action.is_event());
    assert_eq!(action.event_type(), "unknown");
}
