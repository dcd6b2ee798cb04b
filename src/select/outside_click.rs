//! Document-level mousedown watcher that dismisses an open select.

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, Node};

/// Handle on a document-wide `mousedown` subscription.
///
/// The DOM listener is removed when the handle drops, so storing it in
/// component state scopes the subscription exactly to the open interval:
/// dismiss, selection, and unmount all release it by dropping.
pub struct OutsideClick {
    _listener: EventListener,
}

impl OutsideClick {
    /// Watch for mousedown outside the element with id `root_id`.
    /// `on_outside` fires only when the event target is neither that
    /// element nor one of its descendants. Returns `None` outside a
    /// browser document.
    ///
    /// The control opens on `click` while this watches `mousedown`, and the
    /// caller attaches from a post-render effect, so the watcher never sees
    /// the activation that opened the control.
    pub fn attach(root_id: String, mut on_outside: impl FnMut() + 'static) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let doc = document.clone();
        let listener = EventListener::new(&document, "mousedown", move |event| {
            // Root not mounted yet (or already gone): nothing to dismiss.
            let Some(root) = doc.get_element_by_id(&root_id) else {
                return;
            };
            if hits_outside(&root, event) {
                on_outside();
            }
        });
        Some(Self {
            _listener: listener,
        })
    }
}

/// True when the event target is neither `root` itself nor contained in its
/// subtree. A target that is not a DOM node counts as outside.
fn hits_outside(root: &Element, event: &Event) -> bool {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
        return true;
    };
    let root: &Node = root.as_ref();
    if root.is_same_node(Some(&target)) {
        return false;
    }
    !root.contains(Some(&target))
}
