// web_app/hooks.rs - Reusable reactive helpers

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::web_app::state::Debouncer;

/// Follow `source`, but only after it has stopped changing for `delay_ms`.
///
/// Each change drops the pending timer, which cancels it. When the owner is
/// disposed the pending value is discarded.
pub fn use_debounced(source: Signal<String>, delay_ms: u32) -> Signal<String> {
    let initial = source.get_untracked();
    let debouncer = StoredValue::new(Debouncer::new(initial.clone()));
    let output = RwSignal::new(initial);
    let timer = StoredValue::new_local(None::<Timeout>);

    Effect::new(move || {
        let value = source.get();
        let Some(ticket) = debouncer.try_update_value(|d| d.push(value)) else {
            return;
        };

        let timeout = Timeout::new(delay_ms, move || {
            let settled = debouncer
                .try_update_value(|d| d.settle(ticket).cloned())
                .flatten();
            if let Some(value) = settled {
                if output.get_untracked() != value {
                    output.set(value);
                }
            }
        });
        timer.set_value(Some(timeout));
    });

    on_cleanup(move || {
        debouncer.try_update_value(Debouncer::cancel);
        timer.try_update_value(|pending| {
            pending.take();
        });
    });

    output.into()
}
