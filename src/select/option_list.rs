//! Option row and option list renderers. Stateless: everything they show is
//! derived from the props the select controller passes down.

use dioxus::prelude::*;

/// Per-row render flags: (is_active, is_last). Active compares by value
/// equality with the current active value, last by index.
fn row_flags(values: &[String], active: &str, index: usize) -> (bool, bool) {
    (values[index] == active, index + 1 == values.len())
}

fn row_style(is_active: bool, is_last: bool) -> String {
    let background = if is_active { "#cdd6f4" } else { "#e6e9f5" };
    let corners = if is_last {
        "border-radius: 0 0 6px 6px;"
    } else {
        ""
    };
    format!(
        "width: 100%; padding: 8px 12px; box-sizing: border-box; \
         font-size: 14px; color: #1e1e2e; background: {background}; \
         cursor: pointer; user-select: none; {corners}"
    )
}

/// One selectable row. Reports its display value through `on_pick`.
#[component]
pub fn OptionRow(
    value: String,
    is_active: bool,
    is_last: bool,
    on_pick: EventHandler<String>,
) -> Element {
    let style = row_style(is_active, is_last);
    let picked = value.clone();
    rsx! {
        span {
            style: "{style}",
            onclick: move |e| {
                e.stop_propagation();
                on_pick.call(picked.clone());
            },
            "{value}"
        }
    }
}

/// The ordered option list: one `OptionRow` per value, in list order, with
/// active/last flags computed here.
#[component]
pub fn OptionList(values: Vec<String>, active: String, on_pick: EventHandler<String>) -> Element {
    rsx! {
        div {
            style: "position: absolute; top: 100%; left: 0; width: 100%; z-index: 10; \
                    display: flex; flex-direction: column; overflow: hidden; \
                    border: 2px solid #7287fd; border-top: none; \
                    border-radius: 0 0 6px 6px; \
                    box-shadow: 0 4px 12px rgba(0,0,0,0.15);",

            for (index, value) in values.iter().enumerate() {
                {
                    let (is_active, is_last) = row_flags(&values, &active, index);
                    rsx! {
                        OptionRow {
                            key: "{value}",
                            value: value.clone(),
                            is_active,
                            is_last,
                            on_pick,
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::row_flags;

    fn values(vs: &[&str]) -> Vec<String> {
        vs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn only_matching_value_is_active() {
        let vs = values(&["A", "B", "C"]);
        let flags: Vec<bool> = (0..vs.len()).map(|i| row_flags(&vs, "B", i).0).collect();
        assert_eq!(flags, [false, true, false]);
    }

    #[test]
    fn only_last_index_is_last() {
        let vs = values(&["A", "B", "C"]);
        let flags: Vec<bool> = (0..vs.len()).map(|i| row_flags(&vs, "B", i).1).collect();
        assert_eq!(flags, [false, false, true]);
    }

    #[test]
    fn active_absent_from_list_marks_nothing() {
        let vs = values(&["A", "B"]);
        assert!((0..vs.len()).all(|i| !row_flags(&vs, "Z", i).0));
    }

    #[test]
    fn single_value_is_both_active_and_last() {
        let vs = values(&["Only"]);
        assert_eq!(row_flags(&vs, "Only", 0), (true, true));
    }
}
