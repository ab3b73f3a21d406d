// web_app/components/sentinel.rs - Visibility watcher for dropdown rows
//
// Wraps one IntersectionObserver (threshold 1.0). Rows carry their list
// index in a data attribute; the callback gets that index whenever a
// watched row becomes fully visible. Re-observing after the list changes
// reports rows that are already in view, the same as a freshly mounted
// observer would.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Attribute holding a row's index in the filtered list
pub const DATA_INDEX_ATTR: &str = "data-index";

struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

#[derive(Clone, Copy)]
pub struct RowObserver {
    inner: StoredValue<Option<Observer>, LocalStorage>,
}

impl RowObserver {
    /// Create the observer; it is disconnected when the current owner is
    /// cleaned up.
    pub fn new(on_visible: impl Fn(usize) + 'static) -> Self {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    if let Some(index) = row_index(&entry.target()) {
                        on_visible(index);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(1.0));

        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                Ok(observer) => Some(Observer {
                    observer,
                    _callback: callback,
                }),
                Err(e) => {
                    tracing::warn!("IntersectionObserver unavailable, no infinite scroll: {:?}", e);
                    None
                }
            };

        let inner = StoredValue::new_local(observer);
        on_cleanup(move || {
            inner.try_with_value(|observer| {
                if let Some(observer) = observer {
                    observer.observer.disconnect();
                }
            });
        });

        Self { inner }
    }

    /// Stop watching everything, then watch every indexed row under `list`
    pub fn observe_rows(&self, list: &Element) {
        self.inner.with_value(|observer| {
            let Some(observer) = observer else {
                return;
            };
            observer.observer.disconnect();

            let selector = format!("[{}]", DATA_INDEX_ATTR);
            let rows = match list.query_selector_all(&selector) {
                Ok(rows) => rows,
                Err(e) => {
                    tracing::warn!("Could not query dropdown rows: {:?}", e);
                    return;
                }
            };
            for i in 0..rows.length() {
                if let Some(row) = rows.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                    observer.observer.observe(&row);
                }
            }
        });
    }
}

fn row_index(element: &Element) -> Option<usize> {
    element
        .get_attribute(DATA_INDEX_ATTR)
        .and_then(|value| value.parse().ok())
}
