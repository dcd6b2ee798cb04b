use dioxus::prelude::*;

use crate::select::Select;

#[component]
pub fn DemoBasic() -> Element {
    let mut selected = use_signal(String::new);

    let values = vec![
        "Alpha".to_string(),
        "Beta".to_string(),
        "Gamma".to_string(),
        "Delta".to_string(),
    ];

    let result = if selected.read().is_empty() {
        "none".to_string()
    } else {
        format!("selected: {}", selected.read())
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; padding: 40px; \
                    gap: 24px; font-family: system-ui, sans-serif;",

            h2 {
                style: "color: #e5e7eb; font-size: 20px; margin: 0;",
                "Basic select"
            }

            div {
                style: "width: 220px;",
                Select {
                    values: values,
                    on_select: move |value: String| {
                        selected.set(value);
                    },
                }
            }

            div {
                id: "result",
                style: "color: #9ca3af; font-size: 14px;",
                "{result}"
            }
        }
    }
}
