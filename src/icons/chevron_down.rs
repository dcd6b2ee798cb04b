use dioxus::prelude::*;

/// Downward chevron, the dropdown indicator. Strokes with `currentColor`
/// so it picks up the surrounding text color.
#[component]
pub fn ChevronDown(#[props(default)] class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "20",
            height: "20",
            view_box: "0 0 20 20",
            fill: "none",
            path {
                stroke: "currentColor",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "1.5",
                d: "m6 8 4 4 4-4",
            }
        }
    }
}
