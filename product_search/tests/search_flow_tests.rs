// tests/search_flow_tests.rs - End-to-end widget scenarios on plain state
//
// These replay what SearchPage and SearchInput do in the browser, step by
// step, using the same state types the components wrap in signals.

mod common;

use common::{ids, products};
use product_search::web_app::format::chip_label;
use product_search::web_app::model::QueryKey;
use product_search::web_app::state::{
    filter_by_title, sentinel_index, AccumulatedResults, Debouncer, Dropdown, DropdownView,
    KeyOutcome, NavKey, QueryState, SelectMode, Selection,
};

#[test]
fn test_pages_accumulate_then_filter_locally() {
    let mut query = QueryState::default();
    let mut results = AccumulatedResults::default();

    let page_one = products(&[(1, "Red Shoe"), (2, "Blue Hat")]);
    results.absorb(&query.key_for(""), &page_one);

    assert!(results.can_load_more(false));
    query.next_page();
    assert_eq!(query.key_for(""), QueryKey::new("", 2));
    results.absorb(&query.key_for(""), &products(&[(3, "Red Hat")]));

    assert_eq!(ids(results.items()), vec![1, 2, 3]);
    assert_eq!(ids(&filter_by_title(results.items(), "red")), vec![1, 3]);
    assert_eq!(ids(&filter_by_title(results.items(), "RED")), vec![1, 3]);
    assert_eq!(ids(&filter_by_title(results.items(), "")), vec![1, 2, 3]);
}

#[test]
fn test_typing_settles_once_and_restarts_paging() {
    let mut query = QueryState::default();
    query.next_page();
    let mut debouncer = Debouncer::new(String::new());

    let mut tickets = Vec::new();
    for text in ["r", "re", "red"] {
        query.set_text(text);
        tickets.push(debouncer.push(query.text().to_string()));
    }

    // Only the last keystroke's timer settles
    assert!(debouncer.settle(tickets[0]).is_none());
    assert!(debouncer.settle(tickets[1]).is_none());
    assert_eq!(debouncer.settle(tickets[2]).cloned(), Some("red".to_string()));
    assert_eq!(query.key_for(debouncer.value()), QueryKey::new("red", 1));
}

#[test]
fn test_new_text_replaces_accumulated_list() {
    let mut results = AccumulatedResults::default();
    results.absorb(&QueryKey::new("", 1), &products(&[(1, "Red Shoe"), (2, "Blue Hat")]));
    results.absorb(&QueryKey::new("", 2), &products(&[(3, "Red Hat")]));

    results.absorb(&QueryKey::new("hat", 1), &products(&[(2, "Blue Hat"), (3, "Red Hat")]));
    assert_eq!(results.search(), "hat");
    assert_eq!(ids(results.items()), vec![2, 3]);
}

#[test]
fn test_keyboard_selection_keeps_dropdown_open() {
    let rows = products(&[(1, "Red Shoe"), (2, "Blue Hat"), (3, "Red Hat")]);
    let mut dropdown = Dropdown::default();
    let mut selection = Selection::new(SelectMode::Multiple);

    // Keys do nothing until the input is focused
    assert_eq!(dropdown.handle_key(NavKey::ArrowDown, rows.len()), KeyOutcome::Ignored);
    dropdown.open();

    dropdown.handle_key(NavKey::ArrowDown, rows.len());
    dropdown.handle_key(NavKey::ArrowDown, rows.len());
    let KeyOutcome::Select(index) = dropdown.handle_key(NavKey::Enter, rows.len()) else {
        panic!("expected a selection");
    };
    let reported = selection.select(rows[index].clone()).map(ids);

    assert_eq!(reported, Some(vec![2]));
    assert!(dropdown.is_open());
    assert_eq!(dropdown.highlighted(), Some(1));

    // Selecting the same row again reports nothing
    assert!(selection.select(rows[1].clone()).is_none());
}

#[test]
fn test_enter_without_highlight_selects_nothing() {
    let rows = products(&[(1, "Red Shoe")]);
    let mut dropdown = Dropdown::default();
    dropdown.open();

    assert_eq!(dropdown.handle_key(NavKey::Enter, rows.len()), KeyOutcome::NoHighlight);
    assert!(dropdown.is_open());
}

#[test]
fn test_highlight_past_narrowed_list_selects_nothing() {
    let all = products(&[(1, "Red Shoe"), (2, "Blue Hat"), (3, "Red Hat")]);
    let mut dropdown = Dropdown::default();
    dropdown.open();
    dropdown.hover(2);

    let narrowed = filter_by_title(&all, "shoe");
    assert_eq!(dropdown.handle_key(NavKey::Enter, narrowed.len()), KeyOutcome::NoHighlight);
}

#[test]
fn test_escape_then_focus_reopens() {
    let mut dropdown = Dropdown::default();
    dropdown.open();
    assert_eq!(dropdown.handle_key(NavKey::Escape, 3), KeyOutcome::Closed);
    assert_eq!(DropdownView::resolve(dropdown.is_open(), false, 3, false), DropdownView::Closed);

    dropdown.open();
    assert_eq!(
        DropdownView::resolve(dropdown.is_open(), false, 3, false),
        DropdownView::Results { loading_row: false }
    );
}

#[test]
fn test_dropdown_view_follows_fetch_state() {
    // First open with nothing fetched yet
    assert_eq!(DropdownView::resolve(true, false, 0, true), DropdownView::Loading);
    // Rows arrived, next page loading
    assert_eq!(
        DropdownView::resolve(true, false, 15, true),
        DropdownView::Results { loading_row: true }
    );
    // Filter matched nothing
    assert_eq!(DropdownView::resolve(true, false, 0, false), DropdownView::Empty);
    // Error wins over rows
    assert_eq!(DropdownView::resolve(true, true, 15, false), DropdownView::Error);
}

#[test]
fn test_infinite_scroll_until_exhausted() {
    let mut query = QueryState::default();
    let mut results = AccumulatedResults::default();
    let page: Vec<_> = (1..=15).map(|id| (id, "Item")).collect();
    results.absorb(&query.key_for(""), &products(&page));

    assert_eq!(sentinel_index(results.items().len()), Some(11));
    assert!(results.can_load_more(false));
    query.next_page();

    // Still loading page 2: a second trigger is ignored
    assert!(!results.can_load_more(true));

    let page: Vec<_> = (16..=20).map(|id| (id, "Item")).collect();
    results.absorb(&query.key_for(""), &products(&page));
    assert_eq!(sentinel_index(results.items().len()), Some(16));

    query.next_page();
    results.absorb(&query.key_for(""), &[]);
    assert!(results.is_exhausted());
    assert!(!results.can_load_more(false));
    assert_eq!(results.items().len(), 20);
}

#[test]
fn test_chips_reflect_selection_order() {
    let mut selection = Selection::new(SelectMode::Multiple);
    selection.select(products(&[(5, "Wireless Headphones")]).remove(0));
    selection.select(products(&[(2, "Hat")]).remove(0));

    let chips: Vec<String> = selection.items().iter().map(|p| chip_label(&p.title)).collect();
    assert_eq!(chips, vec!["Wirel..", "Hat"]);

    let remaining: Vec<String> = selection
        .remove(&5)
        .iter()
        .map(|p| chip_label(&p.title))
        .collect();
    assert_eq!(remaining, vec!["Hat"]);
}

#[test]
fn test_single_select_mode_replaces() {
    let rows = products(&[(1, "A"), (2, "B")]);
    let mut selection = Selection::new(SelectMode::from_allow_multiple(false));
    selection.select(rows[0].clone());
    assert_eq!(selection.select(rows[1].clone()).map(ids), Some(vec![2]));
}
