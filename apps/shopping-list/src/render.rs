//! Markup projection of the shopping list.
//!
//! Everything here is a pure function of [`ShoppingListState`]: the same
//! state always renders to the same string.

use crate::types::{ShoppingItem, ShoppingListState};

/// Renders the visible items as one markup string
///
/// Fragments are concatenated in display order with no separator.
#[must_use]
pub fn render(state: &ShoppingListState) -> String {
    visible_items(state).map(render_item).collect()
}

/// Items that make it into the rendered list, in display order
///
/// Checked items are dropped while `hide_checked_items` is set.
pub fn visible_items(state: &ShoppingListState) -> impl Iterator<Item = &ShoppingItem> {
    let hide_checked = state.hide_checked_items;
    state
        .items
        .iter()
        .filter(move |item| !(hide_checked && item.checked))
}

/// Renders a single `<li>` fragment
///
/// An open edit form takes precedence over the checked marker.
#[must_use]
pub fn render_item(item: &ShoppingItem) -> String {
    let id = escape_html(&item.id.to_string());
    let name = escape_html(&item.name);

    let title = if item.editing {
        format!(
            "<div class='edit-item-container' data-item-id='{id}'>\
             <input type='text' name='shopping-list-edit' class='shopping-list-edit' \
             placeholder='edit..' value='{name}'>\
             <button type='submit' class='edit-submit-button' data-item-id='{id}'>submit</button>\
             </div>"
        )
    } else if item.checked {
        format!("<span class='shopping-item shopping-item__checked'>{name}</span>")
    } else {
        format!("<span class='shopping-item'>{name}</span>")
    };

    format!(
        "<li class='js-item-element' data-item-id='{id}'>{title}\
         <div class='shopping-item-controls'>\
         <button class='shopping-item-toggle js-item-toggle' data-item-id='{id}'>\
         <span class='button-label'>check</span></button>\
         <button class='shopping-item-delete js-item-delete' data-item-id='{id}'>\
         <span class='button-label'>delete</span></button>\
         <button class='shopping-item-edit js-item-edit' data-item-id='{id}'>\
         <span class='button-label'>edit item</span></button>\
         </div></li>"
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemId;
    use uuid::Uuid;

    const fn id(n: u128) -> ItemId {
        ItemId::from_uuid(Uuid::from_u128(n))
    }

    fn apples_and_milk() -> ShoppingListState {
        ShoppingListState::with_items(vec![
            ShoppingItem::new(id(1), "apples"),
            ShoppingItem::new(id(2), "milk").with_checked(true),
        ])
    }

    #[test]
    fn test_filter_off_shows_everything_in_order() {
        let markup = render(&apples_and_milk());

        let apples = markup.find(">apples<");
        let milk = markup.find(">milk<");
        assert!(apples.is_some() && milk.is_some());
        assert!(apples < milk);
        assert_eq!(markup.matches("<li ").count(), 2);
    }

    #[test]
    fn test_filter_on_hides_checked() {
        let mut state = apples_and_milk();
        state.hide_checked_items = true;

        let markup = render(&state);
        assert!(markup.contains(">apples<"));
        assert!(!markup.contains("milk"));
        assert_eq!(markup.matches("<li ").count(), 1);
    }

    #[test]
    fn test_empty_list_renders_empty_string() {
        assert_eq!(render(&ShoppingListState::new()), "");
    }

    #[test]
    fn test_plain_and_checked_markers() {
        let plain = render_item(&ShoppingItem::new(id(1), "apples"));
        assert!(plain.contains("<span class='shopping-item'>apples</span>"));
        assert!(!plain.contains("shopping-item__checked"));

        let checked = render_item(&ShoppingItem::new(id(2), "milk").with_checked(true));
        assert!(checked.contains("<span class='shopping-item shopping-item__checked'>milk</span>"));
    }

    #[test]
    fn test_editing_replaces_name_with_form() {
        let mut item = ShoppingItem::new(id(3), "bread").with_checked(true);
        item.editing = true;

        let markup = render_item(&item);
        assert!(markup.contains("class='edit-item-container'"));
        assert!(markup.contains("value='bread'"));
        assert!(markup.contains("edit-submit-button"));
        assert!(!markup.contains("shopping-item__checked"));
        assert!(!markup.contains("<span class='shopping-item"));
    }

    #[test]
    fn test_controls_carry_item_id() {
        let item_id = id(4);
        let markup = render_item(&ShoppingItem::new(item_id, "eggs"));
        let tag = format!("data-item-id='{item_id}'");

        // <li>, toggle, delete, edit
        assert_eq!(markup.matches(&tag).count(), 4);
        for control in ["js-item-toggle", "js-item-delete", "js-item-edit"] {
            assert!(markup.contains(control), "missing {control}");
        }
    }

    #[test]
    fn test_names_are_escaped() {
        let markup = render_item(&ShoppingItem::new(id(5), "<b>fish & 'chips'</b>"));
        assert!(markup.contains("&lt;b&gt;fish &amp; &#39;chips&#39;&lt;/b&gt;"));
        assert!(!markup.contains("<b>"));
    }

    #[test]
    fn test_render_is_pure() {
        let state = apples_and_milk();
        let before = state.clone();

        assert_eq!(render(&state), render(&state));
        assert_eq!(state, before);
    }

    #[test]
    fn test_render_concatenates_fragments() {
        let state = apples_and_milk();
        let expected: String = state.items.iter().map(render_item).collect();
        assert_eq!(render(&state), expected);
    }
}
