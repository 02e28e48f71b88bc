/// Single-item, collapsible accordion: at most one entry is open and
/// clicking the open entry closes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<&'static str>,
}

impl AccordionState {
    pub fn open_item(&self) -> Option<&'static str> {
        self.open
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open == Some(id)
    }

    pub fn toggle(self, id: &'static str) -> Self {
        if self.is_open(id) {
            Self { open: None }
        } else {
            Self { open: Some(id) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_one_item_at_a_time() {
        let state = AccordionState::default().toggle("item-1");
        assert!(state.is_open("item-1"));

        let state = state.toggle("item-3");
        assert!(state.is_open("item-3"));
        assert!(!state.is_open("item-1"));
        assert_eq!(state.open_item(), Some("item-3"));
    }

    #[test]
    fn toggling_open_item_collapses_it() {
        let state = AccordionState::default().toggle("item-2").toggle("item-2");
        assert_eq!(state, AccordionState::default());
    }
}
