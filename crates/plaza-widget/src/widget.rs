//! The widget proper: one owner for the feed, the page, and the open
//! store, routing host events as mutate, then persist, then render.

use crate::dispatch::Action;
use crate::page::Page;
use crate::{nav, view};
use plaza_core::config::PlazaConfig;
use plaza_core::feed::Feed;
use plaza_core::store::{self, Store};
use plaza_core::{PlazaError, PlazaResult};
use tracing::debug;

pub struct FeedWidget {
    store: Store,
    feed: Feed,
    page: Page,
}

impl FeedWidget {
    /// Bind a widget to a page, persisting into the profile the
    /// config names. Creates the profile directory on first use.
    pub fn open(config: &PlazaConfig, page: Page) -> PlazaResult<Self> {
        std::fs::create_dir_all(&config.dirpath)?;
        let store = Store::open(&config.store)?;
        Ok(Self::with_store(store, page))
    }

    /// Bind a widget to a page over an already open store.
    pub fn with_store(store: Store, page: Page) -> Self {
        Self {
            store,
            feed: Feed::default(),
            page,
        }
    }

    /// Startup: initial section visibility, rehydrate the feed from
    /// the store, first render.
    pub fn boot(&mut self) -> PlazaResult<()> {
        nav::show_initial_section(&mut self.page);
        self.feed = Feed::from_posts(store::load_posts(&self.store)?);
        view::render(&mut self.page, self.feed.posts());
        Ok(())
    }

    /// Host-side event: a click on the control with the given
    /// identifier. Controls nothing is bound to are ignored.
    pub fn click(&mut self, control: &str) -> PlazaResult<()> {
        match self.page.controls().resolve(control) {
            Some(action) => {
                let action = action.clone();
                self.dispatch(action)
            }
            None => {
                debug!(control, "click on unbound control ignored");
                Ok(())
            }
        }
    }

    /// Route an action to its handler.
    pub fn dispatch(&mut self, action: Action) -> PlazaResult<()> {
        match action {
            Action::SubmitPost => self.submit(),
            Action::ToggleLike { id } => self.toggle_like(id),
            Action::ShowSection { target } => {
                self.navigate(&target);
                Ok(())
            }
        }
    }

    /// Host-side event: typing into the composer.
    pub fn set_input(&mut self, text: &str) {
        self.page.set_input(text);
    }

    /// Nav link click: show the targeted section. Purely visual,
    /// nothing to persist.
    pub fn navigate(&mut self, href: &str) {
        nav::show_section(&mut self.page, href);
    }

    /// Submit the composer's current text as a new post, then persist
    /// and re-render. Empty input changes nothing, persists nothing,
    /// renders nothing, and keeps the composer text.
    fn submit(&mut self) -> PlazaResult<()> {
        let Some(text) = self.page.input().map(str::to_owned) else {
            return Ok(());
        };
        match self.feed.create(&text) {
            Ok(_) => {
                self.page.clear_input();
                self.persist_and_render()
            }
            Err(err) if is_silent(&err) => {
                debug!("empty submission ignored");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Flip the like on a post, then persist and re-render. An id
    /// that resolves to no post is ignored.
    fn toggle_like(&mut self, id: u64) -> PlazaResult<()> {
        match self.feed.toggle_like(id) {
            Ok(()) => self.persist_and_render(),
            Err(err) if is_silent(&err) => {
                debug!(id, "like on unknown post ignored");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// The write completes before the render that shows it.
    fn persist_and_render(&mut self) -> PlazaResult<()> {
        store::save_posts(&self.store, self.feed.posts())?;
        view::render(&mut self.page, self.feed.posts());
        Ok(())
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    pub fn page(&self) -> &Page {
        &self.page
    }
}

/// The two error cases the surface swallows: empty submissions and
/// likes on unknown ids. Everything else is a real failure.
fn is_silent(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<PlazaError>(),
        Some(PlazaError::EmptyPost) | Some(PlazaError::UnknownPost { .. })
    )
}
