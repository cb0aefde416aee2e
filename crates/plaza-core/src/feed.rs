//! The in-memory feed: an ordered, newest-first list of posts and the
//! two mutations the widget performs on it.

use crate::post::{now_millis, Post};
use crate::{constant, PlazaError, PlazaResult};

/// The post store backing the widget. Rehydrated from storage at boot
/// and mirrored back after every successful mutation; the feed itself
/// never persists or renders.
///
/// The feed also owns the id source: ids come from the millisecond
/// clock, bumped past the last issued id, so two posts created within
/// one clock tick still get distinct, increasing ids.
#[derive(Debug, Default)]
pub struct Feed {
    posts: Vec<Post>,
    last_id: u64,
}

impl Feed {
    /// Adopt a loaded post list. The id source is primed from the
    /// largest id present so fresh ids never collide with loaded ones.
    pub fn from_posts(posts: Vec<Post>) -> Self {
        let last_id = posts.iter().map(Post::id).max().unwrap_or(0);
        Feed { posts, last_id }
    }

    /// Construct a post from the composer text and insert it at the
    /// head of the feed. Whitespace-only input is rejected and leaves
    /// the feed untouched.
    pub fn create(&mut self, content: &str) -> PlazaResult<&Post> {
        let post = Post::new(self.next_id(), constant::DEFAULT_AUTHOR, content)?;
        self.last_id = post.id();
        self.posts.insert(0, post);
        Ok(&self.posts[0])
    }

    /// Flip the like state of the post with the given id, adjusting
    /// its counter in the same call. A failed lookup leaves the feed
    /// untouched.
    pub fn toggle_like(&mut self, id: u64) -> PlazaResult<()> {
        let post = self
            .posts
            .iter_mut()
            .find(|post| post.id() == id)
            .ok_or(PlazaError::UnknownPost { id })?;
        post.toggle_like();
        Ok(())
    }

    pub fn get(&self, id: u64) -> Option<&Post> {
        self.posts.iter().find(|post| post.id() == id)
    }

    /// The posts in render order, newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    fn next_id(&self) -> u64 {
        now_millis().max(self.last_id + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_with(contents: &[&str]) -> Feed {
        let mut feed = Feed::default();
        for content in contents {
            feed.create(content).unwrap();
        }
        feed
    }

    #[test]
    fn create_inserts_at_the_head() {
        let mut feed = feed_with(&["first", "second"]);
        feed.create("  third  ").unwrap();

        assert_eq!(feed.len(), 3);
        assert_eq!(feed.posts()[0].content, "third");
        assert_eq!(feed.posts()[0].likes, 0);
        assert!(!feed.posts()[0].is_liked);
        assert_eq!(feed.posts()[0].author, "You");
        assert_eq!(feed.posts()[2].content, "first");
    }

    #[test]
    fn create_rejects_whitespace_and_changes_nothing() {
        let mut feed = feed_with(&["only"]);
        let result = feed.create("   \t\n");
        assert!(result.is_err());
        assert_eq!(feed.len(), 1);
        assert_eq!(feed.posts()[0].content, "only");
    }

    #[test]
    fn toggle_like_pairs_flag_and_counter() {
        let mut feed = feed_with(&["likeable"]);
        let id = feed.posts()[0].id();

        feed.toggle_like(id).unwrap();
        assert_eq!(feed.get(id).unwrap().likes, 1);
        assert!(feed.get(id).unwrap().is_liked);

        feed.toggle_like(id).unwrap();
        assert_eq!(feed.get(id).unwrap().likes, 0);
        assert!(!feed.get(id).unwrap().is_liked);
    }

    #[test]
    fn toggle_like_on_unknown_id_changes_nothing() {
        let mut feed = feed_with(&["untouched"]);
        let result = feed.toggle_like(9_999);
        assert!(result.is_err());
        assert_eq!(feed.len(), 1);
        assert_eq!(feed.posts()[0].likes, 0);
        assert!(!feed.posts()[0].is_liked);
    }

    #[test]
    fn ids_are_strictly_increasing_within_one_tick() {
        let mut feed = Feed::default();
        feed.create("a").unwrap();
        feed.create("b").unwrap();
        feed.create("c").unwrap();

        // Newest first, so ids read back in descending order.
        let ids: Vec<u64> = feed.posts().iter().map(Post::id).collect();
        assert!(ids[0] > ids[1] && ids[1] > ids[2], "{ids:?}");
    }

    #[test]
    fn from_posts_primes_the_id_source() {
        let far_future_id = u64::MAX - 1;
        let posts = vec![Post::new(far_future_id, "You", "old").unwrap()];
        let mut feed = Feed::from_posts(posts);

        feed.create("new").unwrap();
        assert_eq!(feed.posts()[0].id(), far_future_id + 1);
    }
}
