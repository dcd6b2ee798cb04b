use dioxus::prelude::*;

use crate::icons::VolumeMuted;
use crate::select::Select;

/// Output-device picker whose list shows up late, as if enumerated by the
/// host after mount. The select starts with a blank active value and falls
/// back to the first device once the list arrives.
#[component]
pub fn DemoRefresh() -> Element {
    let mut devices = use_signal(Vec::<String>::new);
    let mut chosen = use_signal(String::new);

    use_effect(move || {
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(1_500).await;
            devices.set(vec![
                "Speakers".to_string(),
                "Headphones".to_string(),
                "HDMI Audio".to_string(),
            ]);
        });
    });

    let waiting = devices.read().is_empty();
    let status = if waiting {
        "enumerating devices...".to_string()
    } else if chosen.read().is_empty() {
        "devices ready".to_string()
    } else {
        format!("output: {}", chosen.read())
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; padding: 40px; \
                    gap: 24px; font-family: system-ui, sans-serif;",

            h2 {
                style: "color: #e5e7eb; font-size: 20px; margin: 0;",
                "Deferred device list"
            }

            div {
                style: "display: flex; align-items: center; gap: 12px;",

                span {
                    style: "width: 20px; height: 20px; color: #9ca3af;",
                    VolumeMuted {}
                }
                div {
                    style: "width: 220px;",
                    Select {
                        values: devices(),
                        on_select: move |value: String| {
                            chosen.set(value);
                        },
                    }
                }
            }

            div {
                id: "result",
                style: "color: #9ca3af; font-size: 14px;",
                "{status}"
            }
        }
    }
}
