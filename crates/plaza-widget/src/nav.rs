//! Section navigation: exactly one visible section at a time, or
//! zero when a link targets a section the page does not have.

use crate::page::Page;
use tracing::debug;

/// The section shown at startup.
pub const INITIAL_SECTION: &str = "home";

/// Strip the fragment marker from a link target: `#profile` names
/// the `profile` section. Targets without a marker pass through.
pub fn target_fragment(href: &str) -> &str {
    href.strip_prefix('#').unwrap_or(href)
}

/// Hide every section, then show only the one the target names. A
/// target with no matching section leaves all sections hidden.
pub fn show_section(page: &mut Page, target: &str) {
    let target = target_fragment(target).to_owned();
    for section in page.sections_mut() {
        section.hidden = true;
    }
    match page.section_mut(&target) {
        Some(section) => section.hidden = false,
        None => debug!(%target, "navigation target has no matching section"),
    }
}

/// Startup visibility: only the designated initial section shows.
pub fn show_initial_section(page: &mut Page) {
    show_section(page, INITIAL_SECTION);
}
