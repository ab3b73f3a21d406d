// web_app/components/common.rs - Reusable UI components
//
// Small, stateless pieces shared by the search input and the product card.
// They receive everything via props.

use leptos::prelude::*;

/// Dropdown text shown when the last fetch failed
pub const ERROR_TEXT: &str = "Error fetching data";

/// Dropdown text shown when nothing matched
pub const NO_RESULTS_TEXT: &str = "No results found";

/// Spinner row at the bottom of the dropdown
#[component]
pub fn LoadingRow() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-3" role="status" aria-label="Loading">
            <div class="animate-spin rounded-full h-6 w-6 border-4 border-gray-200 border-t-blue-600"></div>
        </div>
    }
}

/// Single line of muted text in place of dropdown rows
#[component]
pub fn Placeholder(
    /// Text to display
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="p-3 text-gray-500 text-sm text-center">{message}</div>
    }
}

/// "Label: value" pair with the value in a pill
///
/// Renders nothing but the label when the value is blank.
#[component]
pub fn LabeledValue(
    label: &'static str,
    value: String,
) -> impl IntoView {
    let has_value = !value.is_empty();

    view! {
        <div class="flex items-center gap-1 text-sm min-w-0">
            <span class="font-bold text-gray-700">{label}</span>
            <Show when=move || has_value>
                <span class="px-2 py-0.5 bg-gray-100 text-gray-600 rounded-full truncate">
                    {value.clone()}
                </span>
            </Show>
        </div>
    }
}

/// Price display in the card footer
#[component]
pub fn PriceDisplay(
    /// Already formatted price, e.g. "$12.50"
    price: String,
) -> impl IntoView {
    view! {
        <span class="text-lg font-bold text-gray-900">{price}</span>
    }
}
