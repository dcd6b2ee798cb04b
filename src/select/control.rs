use dioxus::prelude::*;

use super::option_list::OptionList;
use super::outside_click::OutsideClick;
use super::state::SelectState;
use crate::icons::ChevronDown;

static COUNTER: std::sync::atomic::AtomicU32 = std::sync::atomic::AtomicU32::new(0);

/// Labeled dropdown control over an ordered list of display strings.
///
/// The host supplies `values` and may re-supply them on any render; a blank
/// active value then falls back to the new list's first element. `on_select`
/// is optional; without it the selection is only reflected in the control
/// itself.
#[component]
pub fn Select(
    values: ReadOnlySignal<Vec<String>>,
    on_select: Option<EventHandler<String>>,
    #[props(default)] class: String,
) -> Element {
    let mut state = use_signal(|| SelectState::new(&values.peek()));
    let mut watcher: Signal<Option<OutsideClick>> = use_signal(|| None);

    let root_id = use_hook(|| {
        let n = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        format!("select-{n}")
    });

    // Fallback-to-first whenever the host swaps the list while the active
    // value is blank. A non-blank value survives the swap unchanged even if
    // the new list no longer contains it.
    use_effect(move || {
        let values = values.read();
        if state.peek().active().trim().is_empty() {
            state.write().reconcile(&values);
        }
    });

    // The document-level watcher lives exactly as long as the open state:
    // attached on the closed-to-open transition, dropped on dismiss,
    // selection, or unmount. Checking the slot keeps re-renders while open
    // from stacking a second listener.
    use_effect({
        let root_id = root_id.clone();
        move || {
            let open = state.read().is_open();
            if open && watcher.peek().is_none() {
                watcher.set(OutsideClick::attach(root_id.clone(), move || {
                    state.write().dismiss();
                }));
            } else if !open && watcher.peek().is_some() {
                watcher.set(None);
            }
        }
    });

    let open = state.read().is_open();
    let active = state.read().active().to_string();

    let header_style = if open {
        "padding: 8px 12px; display: flex; align-items: center; justify-content: space-between; \
         border: 2px solid #7287fd; border-bottom: none; border-radius: 6px 6px 0 0; \
         background: #e6e9f5; color: #1e1e2e; box-shadow: 0 4px 12px rgba(0,0,0,0.15);"
    } else {
        "padding: 8px 12px; display: flex; align-items: center; justify-content: space-between; \
         border: 2px solid #e6e9f5; border-radius: 6px; \
         background: #e6e9f5; color: #1e1e2e;"
    };

    rsx! {
        div {
            id: "{root_id}",
            class: "{class}",
            style: "position: relative; cursor: default; font-family: system-ui, sans-serif;",

            // Header: active value plus dropdown indicator. Opening is
            // idempotent; a click while already open changes nothing.
            div {
                style: "{header_style}",
                onclick: move |e| {
                    e.prevent_default();
                    if !state.peek().is_open() {
                        state.write().open();
                    }
                },

                span {
                    style: "overflow: hidden; text-overflow: ellipsis; white-space: nowrap; \
                            font-size: 14px;",
                    "{active}"
                }
                span {
                    style: "width: 20px; height: 20px; flex: none; opacity: 0.5;",
                    ChevronDown {}
                }
            }

            if open {
                OptionList {
                    values: values(),
                    active: active.clone(),
                    on_pick: move |value: String| {
                        state.write().select(value.clone());
                        if let Some(handler) = on_select {
                            handler.call(value);
                        }
                    },
                }
            }
        }
    }
}
