use std::rc::Rc;

use log::warn;
use yew::prelude::*;

use crate::content::{is_known_feature, Feature};

/// Which feature, if any, the detail popup is showing.
///
/// Only changes through [`PopupAction`]: `Select` opens (or retargets an
/// already open popup in one step) and `Clear` closes and forgets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PopupState {
    selected: Option<&'static Feature>,
    open: bool,
}

pub enum PopupAction {
    Select(&'static Feature),
    Clear,
}

impl PopupState {
    pub fn selected(&self) -> Option<&'static Feature> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The feature to render, present only while the popup is open.
    pub fn showing(&self) -> Option<&'static Feature> {
        self.selected.filter(|_| self.open)
    }

    pub fn apply(&self, action: PopupAction) -> Self {
        match action {
            PopupAction::Select(feature) if is_known_feature(feature) => Self {
                selected: Some(feature),
                open: true,
            },
            PopupAction::Select(feature) => {
                warn!("ignoring popup for unknown feature '{}'", feature.title);
                self.clone()
            }
            PopupAction::Clear => Self::default(),
        }
    }
}

impl Reducible for PopupState {
    type Action = PopupAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FEATURES;

    #[test]
    fn starts_closed() {
        let state = PopupState::default();
        assert!(!state.is_open());
        assert_eq!(state.selected(), None);
        assert_eq!(state.showing(), None);
    }

    #[test]
    fn select_opens_with_exactly_that_feature() {
        for feature in FEATURES.iter() {
            let state = PopupState::default().apply(PopupAction::Select(feature));
            assert!(state.is_open());
            let shown = state.showing().unwrap();
            assert!(std::ptr::eq(shown, feature));
            assert_eq!(shown.title, feature.title);
            assert_eq!(shown.long_description, feature.long_description);
        }
    }

    #[test]
    fn clear_closes_and_forgets() {
        let state = PopupState::default()
            .apply(PopupAction::Select(&FEATURES[2]))
            .apply(PopupAction::Clear);
        assert_eq!(state, PopupState::default());
    }

    #[test]
    fn reopening_shows_new_feature_only() {
        let state = PopupState::default()
            .apply(PopupAction::Select(&FEATURES[0]))
            .apply(PopupAction::Clear)
            .apply(PopupAction::Select(&FEATURES[4]));
        assert_eq!(state.showing().map(|f| f.title), Some(FEATURES[4].title));
    }

    #[test]
    fn selecting_while_open_replaces_in_one_step() {
        let open = PopupState::default().apply(PopupAction::Select(&FEATURES[1]));
        let replaced = open.apply(PopupAction::Select(&FEATURES[3]));
        assert!(replaced.is_open());
        assert_eq!(replaced.showing().map(|f| f.title), Some(FEATURES[3].title));
    }

    #[test]
    fn unknown_feature_is_ignored() {
        let stray: &'static Feature = Box::leak(Box::new(Feature { ..FEATURES[0] }));
        let open = PopupState::default().apply(PopupAction::Select(&FEATURES[5]));
        assert_eq!(open.apply(PopupAction::Select(stray)), open);
        assert_eq!(
            PopupState::default().apply(PopupAction::Select(stray)),
            PopupState::default()
        );
    }

    #[test]
    fn reducer_keeps_state_when_nothing_changes() {
        let closed = Rc::new(PopupState::default());
        let after = closed.clone().reduce(PopupAction::Clear);
        assert!(Rc::ptr_eq(&closed, &after));

        let opened = closed.reduce(PopupAction::Select(&FEATURES[0]));
        assert!(opened.is_open());
    }
}
