// web_app/components/search_input.rs - Autocomplete search input
//
// A text input with a dropdown of matching products, keyboard navigation,
// selection chips and infinite scroll. The component does not fetch: the
// caller owns the query text and hands in the accumulated product list
// with its loading/error flags. Matching is done locally against the
// debounced text, so rows narrow immediately while the caller's fetch for
// the same text is still in flight.

use leptos::ev::{self, KeyboardEvent};
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::web_app::components::common::{LoadingRow, Placeholder, ERROR_TEXT, NO_RESULTS_TEXT};
use crate::web_app::components::sentinel::RowObserver;
use crate::web_app::config::DEFAULT_DEBOUNCE_MS;
use crate::web_app::format::chip_label;
use crate::web_app::hooks::use_debounced;
use crate::web_app::model::Product;
use crate::web_app::state::{
    filter_by_title, sentinel_index, Dropdown, DropdownView, KeyOutcome, NavKey, SelectMode,
    Selection,
};

const LISTBOX_ID: &str = "search-input-listbox";

/// Search input with dropdown, chips and infinite scroll
///
/// `on_select` receives the full selection after every change. Already
/// selected rows stay visible but cannot be picked again.
#[component]
pub fn SearchInput(
    /// Input placeholder
    #[prop(into, default = "Search...".to_string())]
    placeholder: String,
    /// Current input text, owned by the caller
    #[prop(into)]
    query: Signal<String>,
    /// Called with the new text on every keystroke
    set_query: Callback<String>,
    /// Products fetched so far
    #[prop(into)]
    data: Signal<Vec<Product>>,
    #[prop(into)]
    is_loading: Signal<bool>,
    #[prop(into)]
    is_error: Signal<bool>,
    /// Called with the selected items in selection order
    on_select: Callback<Vec<Product>>,
    /// Accumulate selections instead of replacing
    #[prop(default = false)]
    allow_multiple: bool,
    /// Custom row content; defaults to the product title
    #[prop(optional)]
    render_item: Option<Callback<Product, AnyView>>,
    /// Asks the caller for the next page
    #[prop(optional)]
    load_more: Option<Callback<()>>,
    /// Quiet period before the text is used for matching
    #[prop(default = DEFAULT_DEBOUNCE_MS)]
    debounce_ms: u32,
) -> impl IntoView {
    let debounced = use_debounced(query, debounce_ms);
    let dropdown = RwSignal::new(Dropdown::default());
    let selection = RwSignal::new(Selection::<Product>::new(SelectMode::from_allow_multiple(
        allow_multiple,
    )));

    let filtered = Memo::new(move |_| data.with(|items| debounced.with(|text| filter_by_title(items, text))));

    let view_state = Memo::new(move |_| {
        DropdownView::resolve(
            dropdown.with(Dropdown::is_open),
            is_error.get(),
            filtered.with(Vec::len),
            is_loading.get(),
        )
    });

    let select = move |item: Product| {
        let reported = selection
            .try_update(|selection| selection.select(item).map(|items| items.to_vec()))
            .flatten();
        if let Some(items) = reported {
            tracing::debug!("Selection now has {} item(s)", items.len());
            on_select.run(items);
        }
    };

    let remove = move |id: u64| {
        if let Some(items) = selection.try_update(|selection| selection.remove(&id).to_vec()) {
            on_select.run(items);
        }
    };

    let on_keydown = move |ev: KeyboardEvent| {
        let Some(key) = NavKey::from_key(&ev.key()) else {
            return;
        };
        let len = filtered.with_untracked(Vec::len);
        let outcome = dropdown
            .try_update(|dropdown| dropdown.handle_key(key, len))
            .unwrap_or(KeyOutcome::Ignored);

        match outcome {
            KeyOutcome::Select(index) => {
                ev.prevent_default();
                let item = filtered.with_untracked(|items| items.get(index).cloned());
                if let Some(item) = item {
                    if !selection.with_untracked(|selection| selection.contains(&item.id)) {
                        select(item);
                    }
                }
            }
            KeyOutcome::NoHighlight => ev.prevent_default(),
            KeyOutcome::Ignored | KeyOutcome::Moved | KeyOutcome::Closed => {}
        }
    };

    // Pointer down anywhere outside the component closes the dropdown
    let container = NodeRef::<html::Div>::new();
    let outside_click = window_event_listener(ev::pointerdown, move |ev| {
        let Some(root) = container.get_untracked() else {
            return;
        };
        let target = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
        if !root.contains(target.as_ref()) && dropdown.with_untracked(Dropdown::is_open) {
            dropdown.update(Dropdown::close);
        }
    });
    on_cleanup(move || outside_click.remove());

    // Infinite scroll: the row SENTINEL_OFFSET from the end asks for more
    let list = NodeRef::<html::Div>::new();
    let rows = RowObserver::new(move |index| {
        let len = filtered.with_untracked(Vec::len);
        if sentinel_index(len) != Some(index) {
            return;
        }
        if let Some(load_more) = load_more {
            tracing::debug!("Row {} of {} visible, requesting next page", index, len);
            load_more.run(());
        }
    });
    Effect::new(move || {
        filtered.track();
        if let Some(list) = list.get() {
            rows.observe_rows(&list);
        }
    });

    view! {
        <div node_ref=container class="relative w-full max-w-[400px] min-w-[300px] mx-auto">
            <div class="flex items-center p-1 min-h-[40px] border border-gray-300 rounded-md bg-white \
                        focus-within:ring-4 focus-within:ring-blue-100 focus-within:border-blue-500">
                <input
                    type="text"
                    class="flex-1 min-w-[120px] p-2 text-base outline-none bg-transparent"
                    placeholder=placeholder
                    role="combobox"
                    aria-autocomplete="list"
                    aria-controls=LISTBOX_ID
                    aria-expanded=move || if dropdown.with(Dropdown::is_open) { "true" } else { "false" }
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.run(event_target_value(&ev))
                    on:focus=move |_| dropdown.update(Dropdown::open)
                    on:keydown=on_keydown
                />
            </div>

            // Selected chips
            <div class="flex gap-1 overflow-x-auto max-w-full mt-1">
                <For
                    each=move || selection.with(|selection| selection.items().to_vec())
                    key=|item| item.id
                    children=move |item: Product| {
                        let id = item.id;
                        view! {
                            <div class="flex items-center gap-1 px-2 py-1 bg-gray-200 rounded-md \
                                        text-sm whitespace-nowrap"
                                 title=item.title.clone()>
                                <span>{chip_label(&item.title)}</span>
                                <button
                                    type="button"
                                    class="text-gray-500 hover:text-red-600 font-bold"
                                    aria-label="Remove"
                                    on:click=move |_| remove(id)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || view_state.get() != DropdownView::Closed>
                <div
                    node_ref=list
                    id=LISTBOX_ID
                    role="listbox"
                    class="absolute top-[50px] h-[250px] w-full bg-white border border-gray-400 \
                           rounded-md overflow-y-auto z-[1000] shadow-lg"
                >
                    <Show
                        when=move || view_state.get() == DropdownView::Error
                        fallback=move || view! {
                            <For
                                each=move || filtered.get().into_iter().enumerate().collect::<Vec<_>>()
                                key=|(index, item)| (item.id, *index)
                                children=move |(index, item): (usize, Product)| {
                                    let id = item.id;
                                    let is_selected = move || selection.with(|selection| selection.contains(&id));
                                    let is_active = move || dropdown.with(|dropdown| dropdown.highlighted() == Some(index));
                                    let content = match render_item {
                                        Some(render) => render.run(item.clone()),
                                        None => view! { <span>{item.title.clone()}</span> }.into_any(),
                                    };
                                    view! {
                                        <div
                                            role="option"
                                            data-index=index.to_string()
                                            aria-selected=move || if is_selected() { "true" } else { "false" }
                                            aria-disabled=move || if is_selected() { "true" } else { "false" }
                                            class=move || row_class(is_selected(), is_active())
                                            on:mouseenter=move |_| dropdown.update(|dropdown| dropdown.hover(index))
                                            on:click=move |_| {
                                                if !is_selected() {
                                                    select(item.clone());
                                                }
                                            }
                                        >
                                            {content}
                                        </div>
                                    }
                                }
                            />
                            <Show when=move || view_state.get() == DropdownView::Empty>
                                <Placeholder message=NO_RESULTS_TEXT />
                            </Show>
                            <Show when=move || {
                                matches!(
                                    view_state.get(),
                                    DropdownView::Loading | DropdownView::Results { loading_row: true }
                                )
                            }>
                                <LoadingRow />
                            </Show>
                        }
                    >
                        <Placeholder message=ERROR_TEXT />
                    </Show>
                </div>
            </Show>
        </div>
    }
}

fn row_class(selected: bool, active: bool) -> &'static str {
    match (selected, active) {
        (true, _) => "px-3 py-2 border-b border-gray-100 text-gray-400 bg-gray-50 cursor-not-allowed",
        (false, true) => "px-3 py-2 border-b border-gray-100 bg-blue-50 cursor-pointer",
        (false, false) => "px-3 py-2 border-b border-gray-100 cursor-pointer hover:bg-gray-50",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_rows_look_disabled() {
        assert!(row_class(true, false).contains("cursor-not-allowed"));
        assert!(row_class(true, true).contains("cursor-not-allowed"));
        assert!(row_class(false, false).contains("cursor-pointer"));
    }

    #[test]
    fn test_active_row_highlighted() {
        assert!(row_class(false, true).contains("bg-blue-50"));
        assert!(!row_class(false, false).contains("bg-blue-50"));
    }
}
