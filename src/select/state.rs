//! Interaction state for the select control: the open/close and
//! active-value rules, free of any DOM dependency.

/// Which value a select shows and whether its option list is visible.
///
/// All transitions are synchronous. The rendered component owns exactly one
/// `SelectState` in a signal and maps it to markup on every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectState {
    active: String,
    open: bool,
}

impl SelectState {
    /// Closed, showing the first supplied value. An empty list leaves the
    /// active value blank until `reconcile` sees a non-empty one.
    pub fn new(values: &[String]) -> Self {
        Self {
            active: values.first().cloned().unwrap_or_default(),
            open: false,
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the option list. Returns `true` only on the closed-to-open
    /// transition; activating an already-open control is a no-op, so the
    /// caller registers at most one outside-click watcher per open.
    pub fn open(&mut self) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        true
    }

    /// Close without touching the active value (the outside-click path).
    /// Returns whether the control was open.
    pub fn dismiss(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        true
    }

    /// Pick a value: it becomes the active value and the list closes.
    pub fn select(&mut self, value: impl Into<String>) {
        self.active = value.into();
        self.open = false;
    }

    /// Re-apply the fallback rule after the host swaps the value list: a
    /// blank active value resets to the first element of the new list. A
    /// non-blank active value is kept as-is, even when it no longer appears
    /// in the list.
    pub fn reconcile(&mut self, values: &[String]) -> bool {
        if !self.active.trim().is_empty() {
            return false;
        }
        match values.first() {
            Some(first) => {
                self.active = first.clone();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(vs: &[&str]) -> Vec<String> {
        vs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn starts_closed_on_first_value() {
        let state = SelectState::new(&values(&["Alpha", "Beta", "Gamma"]));
        assert_eq!(state.active(), "Alpha");
        assert!(!state.is_open());
    }

    #[test]
    fn open_reports_transition_once() {
        let mut state = SelectState::new(&values(&["Alpha", "Beta"]));
        assert!(state.open());
        // Clicking the header again while open must not trigger a second
        // watcher registration.
        assert!(!state.open());
        assert!(state.is_open());
    }

    #[test]
    fn dismiss_closes_and_keeps_active() {
        let mut state = SelectState::new(&values(&["Alpha", "Beta"]));
        state.open();
        assert!(state.dismiss());
        assert!(!state.is_open());
        assert_eq!(state.active(), "Alpha");
    }

    #[test]
    fn dismiss_while_closed_is_noop() {
        let mut state = SelectState::new(&values(&["Alpha"]));
        assert!(!state.dismiss());
        assert!(!state.is_open());
    }

    #[test]
    fn select_sets_active_and_closes() {
        let mut state = SelectState::new(&values(&["Alpha", "Beta", "Gamma"]));
        state.open();
        state.select("Beta");
        assert_eq!(state.active(), "Beta");
        assert!(!state.is_open());
    }

    #[test]
    fn reconcile_resets_blank_active_to_first() {
        let mut state = SelectState::new(&[]);
        assert_eq!(state.active(), "");
        assert!(state.reconcile(&values(&["X", "Y"])));
        assert_eq!(state.active(), "X");
    }

    #[test]
    fn reconcile_resets_whitespace_active() {
        let mut state = SelectState::new(&values(&["   "]));
        assert!(state.reconcile(&values(&["X", "Y"])));
        assert_eq!(state.active(), "X");
    }

    #[test]
    fn reconcile_keeps_active_absent_from_new_list() {
        let mut state = SelectState::new(&values(&["Y"]));
        // "Y" does not appear in the replacement list but is non-blank, so
        // it stays put.
        assert!(!state.reconcile(&values(&["X", "Z"])));
        assert_eq!(state.active(), "Y");
    }

    #[test]
    fn reconcile_with_empty_list_is_noop() {
        let mut state = SelectState::new(&[]);
        assert!(!state.reconcile(&[]));
        assert_eq!(state.active(), "");
    }

    #[test]
    fn select_then_blank_reconcile_path() {
        let mut state = SelectState::new(&values(&["Alpha"]));
        state.select("");
        assert!(state.reconcile(&values(&["X"])));
        assert_eq!(state.active(), "X");
    }
}
