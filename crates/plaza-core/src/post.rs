//! This module defines the `Post` struct, the single entity of the feed.

use crate::{constant, PlazaError, PlazaResult};
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// One feed entry: who wrote it, what it says, and the single
/// viewer's like state.
///
/// The serialized field names are fixed by the stored layout
/// (`isLiked` stays camelCase on the wire), so the derive renames
/// rather than the fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    id: u64,
    pub author: String,
    pub content: String,
    pub likes: u32,
    pub is_liked: bool,
}

impl Post {
    /// Create a new post by providing the author label and the body.
    /// The body is whitespace-trimmed; an empty result is rejected.
    pub fn new(id: u64, author: impl Into<String>, content: &str) -> PlazaResult<Self> {
        let content = content.trim();
        verify_content(content)?;
        Ok(Post {
            id,
            author: author.into(),
            content: content.to_owned(),
            likes: 0,
            is_liked: false,
        })
    }

    /// The welcome post an empty store is seeded with.
    pub fn seed(id: u64) -> Self {
        Post {
            id,
            author: constant::SEED_AUTHOR.to_owned(),
            content: constant::SEED_CONTENT.to_owned(),
            likes: 0,
            is_liked: false,
        }
    }

    /// Flip the viewer's like state, adjusting the counter in the
    /// same step. Unliking saturates at zero; a loaded record with an
    /// inconsistent flag/counter pair cannot underflow it.
    pub fn toggle_like(&mut self) {
        if self.is_liked {
            self.likes = self.likes.saturating_sub(1);
        } else {
            self.likes += 1;
        }
        self.is_liked = !self.is_liked;
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Milliseconds since the epoch, the id scale the stored layout uses.
/// A clock stuck before the epoch yields zero; the feed's id source
/// bumps past the last issued id anyway.
pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|dur| dur.as_millis() as u64)
        .unwrap_or(0)
}

/// Some necessary checks for a post's body.
fn verify_content(content: &str) -> PlazaResult<()> {
    if content.is_empty() {
        return Err(PlazaError::EmptyPost.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_post_trims_and_defaults() {
        let post = Post::new(7, "You", "  hello there  ").unwrap();
        assert_eq!(post.id(), 7);
        assert_eq!(post.author, "You");
        assert_eq!(post.content, "hello there");
        assert_eq!(post.likes, 0);
        assert!(!post.is_liked);
    }

    #[test]
    fn empty_and_whitespace_bodies_are_rejected() {
        assert!(Post::new(1, "You", "").is_err());
        assert!(Post::new(1, "You", "   \n\t ").is_err());
    }

    #[test]
    fn toggle_like_twice_is_an_involution() {
        let mut post = Post::new(1, "You", "involution").unwrap();
        post.toggle_like();
        assert_eq!(post.likes, 1);
        assert!(post.is_liked);
        post.toggle_like();
        assert_eq!(post.likes, 0);
        assert!(!post.is_liked);
    }

    #[test]
    fn serialized_field_names_match_the_stored_layout() {
        let post = Post::new(42, "You", "wire check").unwrap();
        let blob = serde_json::to_string(&post).unwrap();
        assert!(blob.contains("\"isLiked\":false"), "{blob}");
        assert!(blob.contains("\"id\":42"), "{blob}");
        assert!(blob.contains("\"likes\":0"), "{blob}");
    }

    #[test]
    fn deserializes_a_stored_record() {
        let blob = r#"{"id":1714435200000,"author":"You","content":"first","likes":2,"isLiked":true}"#;
        let post: Post = serde_json::from_str(blob).unwrap();
        assert_eq!(post.id(), 1714435200000);
        assert_eq!(post.content, "first");
        assert_eq!(post.likes, 2);
        assert!(post.is_liked);
    }

    #[test]
    fn seed_post_is_authored_by_admin() {
        let post = Post::seed(now_millis());
        assert_eq!(post.author, "Admin");
        assert_eq!(post.likes, 0);
        assert!(!post.is_liked);
    }
}
