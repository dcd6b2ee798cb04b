use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn Landing() -> Element {
    rsx! {
        div {
            style: "min-height: 100vh; display: flex; flex-direction: column; align-items: center; \
                    justify-content: center; padding: 40px 20px; gap: 16px; \
                    font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "font-size: 32px; font-weight: 700; color: #e5e7eb; margin: 0;",
                "Select Widget"
            }
            p {
                style: "font-size: 16px; color: #9ca3af; margin: 0 0 24px 0; max-width: 480px; \
                        text-align: center; line-height: 1.6;",
                "A dropdown control with outside-click dismissal and a fallback-to-first rule \
                 when the host swaps the value list."
            }

            div {
                style: "display: flex; gap: 16px;",
                Link {
                    to: Route::DemoBasic {},
                    style: "display: inline-block; padding: 12px 28px; background: #3b82f6; \
                            color: white; text-decoration: none; border-radius: 8px; \
                            font-size: 16px; font-weight: 600;",
                    "Basic \u{2192}"
                }
                Link {
                    to: Route::DemoRefresh {},
                    style: "display: inline-block; padding: 12px 28px; background: #6366f1; \
                            color: white; text-decoration: none; border-radius: 8px; \
                            font-size: 16px; font-weight: 600;",
                    "Deferred list \u{2192}"
                }
            }
        }
    }
}
