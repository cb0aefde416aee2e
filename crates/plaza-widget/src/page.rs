//! Typed model of the host page the widget binds to. The embedder
//! builds one of these out of the parts its surface actually has;
//! every part is optional and the widget degrades to a no-op when a
//! part is missing.

use crate::dispatch::{nav_control_id, Action, ControlMap, SUBMIT_CONTROL};
use crate::nav::target_fragment;
use crate::view::Node;

/// The composer: a text field plus its submit control.
#[derive(Debug, Default)]
pub struct Composer {
    pub input: String,
}

/// The feed's mount point. Rendering replaces its cards wholesale.
#[derive(Debug, Default)]
pub struct FeedMount {
    pub cards: Vec<Node>,
}

/// A navigation link whose href names a section by fragment,
/// e.g. `#profile`.
#[derive(Debug, Clone)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// A content section addressable by the fragment part of a nav link.
#[derive(Debug)]
pub struct Section {
    pub id: String,
    pub hidden: bool,
}

#[derive(Debug, Default)]
pub struct Page {
    pub(crate) composer: Option<Composer>,
    pub(crate) feed: Option<FeedMount>,
    pub(crate) nav: Vec<NavLink>,
    pub(crate) sections: Vec<Section>,
    pub(crate) controls: ControlMap,
}

impl Page {
    /// A page with none of the widget's collaborators. Everything the
    /// widget does against it is a no-op.
    pub fn new() -> Self {
        Self::default()
    }

    /// The page the demo host uses: composer, feed mount, and the
    /// three stock sections with their nav links.
    pub fn with_defaults() -> Self {
        let mut page = Page::new();
        page.install_composer();
        page.install_feed_mount();
        for (label, target) in [
            ("Home", "home"),
            ("Profile", "profile"),
            ("Notifications", "notifications"),
        ] {
            page.add_nav_link(label, &format!("#{target}"));
            page.add_section(target);
        }
        page
    }

    /// Add the composer and bind its submit control.
    pub fn install_composer(&mut self) {
        self.composer = Some(Composer::default());
        self.controls.bind(SUBMIT_CONTROL, Action::SubmitPost);
    }

    /// Add the feed's mount point.
    pub fn install_feed_mount(&mut self) {
        self.feed = Some(FeedMount::default());
    }

    /// Add a navigation link and bind its control to the section its
    /// fragment names.
    pub fn add_nav_link(&mut self, label: &str, href: &str) {
        let target = target_fragment(href).to_owned();
        self.controls.bind(
            nav_control_id(&target),
            Action::ShowSection {
                target: target.clone(),
            },
        );
        self.nav.push(NavLink {
            label: label.to_owned(),
            href: href.to_owned(),
        });
    }

    /// Add a section, initially hidden.
    pub fn add_section(&mut self, id: &str) {
        self.sections.push(Section {
            id: id.to_owned(),
            hidden: true,
        });
    }

    // ***
    // Composer access
    // ***

    /// The composer's current text, if the page has a composer.
    pub fn input(&self) -> Option<&str> {
        self.composer.as_ref().map(|composer| composer.input.as_str())
    }

    /// Replace the composer's text, as the host does when the user
    /// types. Without a composer this does nothing.
    pub fn set_input(&mut self, text: &str) {
        if let Some(composer) = self.composer.as_mut() {
            composer.input = text.to_owned();
        }
    }

    pub fn clear_input(&mut self) {
        self.set_input("");
    }

    // ***
    // Feed and section access
    // ***

    /// The rendered cards, newest first. Empty when the page has no
    /// feed mount.
    pub fn cards(&self) -> &[Node] {
        self.feed
            .as_ref()
            .map(|mount| mount.cards.as_slice())
            .unwrap_or(&[])
    }

    pub fn nav_links(&self) -> &[NavLink] {
        &self.nav
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// The id of the single visible section, if any section is
    /// visible at all.
    pub fn visible_section(&self) -> Option<&str> {
        self.sections
            .iter()
            .find(|section| !section.hidden)
            .map(|section| section.id.as_str())
    }

    pub(crate) fn section_mut(&mut self, id: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|section| section.id == id)
    }

    pub(crate) fn sections_mut(&mut self) -> impl Iterator<Item = &mut Section> {
        self.sections.iter_mut()
    }

    /// The dispatch table wired into this page.
    pub fn controls(&self) -> &ControlMap {
        &self.controls
    }
}
