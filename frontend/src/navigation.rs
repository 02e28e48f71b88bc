use log::debug;
use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

/// The sections of the landing page that can be scrolled to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Features,
    Stats,
    Faq,
    Contact,
    About,
}

impl Section {
    /// Header links, in display order.
    pub const NAV: [Section; 5] = [
        Section::Features,
        Section::Stats,
        Section::Faq,
        Section::Contact,
        Section::About,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Features => "features",
            Section::Stats => "stats",
            Section::Faq => "faq",
            Section::Contact => "contact",
            Section::About => "about",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Features => "Features",
            Section::Stats => "Stats",
            Section::Faq => "FAQ",
            Section::Contact => "Contact",
            Section::About => "About",
        }
    }
}

/// One `NodeRef` per section, attached to the section elements by the page.
#[derive(Clone, Default, PartialEq)]
pub struct SectionRefs {
    hero: NodeRef,
    features: NodeRef,
    stats: NodeRef,
    faq: NodeRef,
    contact: NodeRef,
    about: NodeRef,
}

impl SectionRefs {
    pub fn get(&self, section: Section) -> &NodeRef {
        match section {
            Section::Hero => &self.hero,
            Section::Features => &self.features,
            Section::Stats => &self.stats,
            Section::Faq => &self.faq,
            Section::Contact => &self.contact,
            Section::About => &self.about,
        }
    }

    pub fn scroll_to(&self, section: Section) -> bool {
        let scrolled = scroll_to_section(self.get(section));
        if !scrolled {
            debug!("section '{}' is not mounted yet, ignoring navigation", section.id());
        }
        scrolled
    }

    pub fn navigate(&self, section: Section) -> Callback<MouseEvent> {
        let refs = self.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            refs.scroll_to(section);
        })
    }
}

/// Smoothly scrolls the viewport so the referenced element's top lines up
/// with the top of the viewport. Does nothing for an unattached ref.
///
/// A new call while a scroll is in flight simply retargets it.
pub fn scroll_to_section(node: &NodeRef) -> bool {
    match node.cast::<Element>() {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => false,
    }
}

/// Section refs that stay the same across re-renders of the page.
#[hook]
pub fn use_section_refs() -> SectionRefs {
    let refs = use_state(SectionRefs::default);
    (*refs).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nav_lists_five_distinct_sections() {
        let sections: HashSet<_> = Section::NAV.iter().collect();
        assert_eq!(sections.len(), 5);
        assert!(!Section::NAV.contains(&Section::Hero));

        let labels: Vec<_> = Section::NAV.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Features", "Stats", "FAQ", "Contact", "About"]);
    }

    #[test]
    fn section_ids_are_unique() {
        let all = [
            Section::Hero,
            Section::Features,
            Section::Stats,
            Section::Faq,
            Section::Contact,
            Section::About,
        ];
        let ids: HashSet<_> = all.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn each_section_has_its_own_ref() {
        let refs = SectionRefs::default();
        for (i, a) in Section::NAV.iter().enumerate() {
            for b in Section::NAV.iter().skip(i + 1) {
                assert!(refs.get(*a) != refs.get(*b), "{:?} and {:?} share a ref", a, b);
            }
            assert!(refs.get(*a) == refs.clone().get(*a));
        }
    }

    #[test]
    fn unmounted_section_is_a_no_op() {
        let refs = SectionRefs::default();
        for section in Section::NAV {
            assert!(!refs.scroll_to(section));
        }
        assert!(!scroll_to_section(&NodeRef::default()));
    }
}
