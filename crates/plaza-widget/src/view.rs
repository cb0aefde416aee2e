//! The renderer: a pure view-building function from posts to typed
//! node descriptors, and the idempotent install of those nodes into
//! the page's feed mount. User content only ever travels as node
//! data, never as interpolated markup.

use crate::dispatch::{like_control_id, Action, LIKE_PREFIX};
use crate::page::Page;
use plaza_core::post::Post;
use std::fmt::{Display, Formatter};
use textwrap::wrap;

/// Wrap width for post bodies in the terminal rendering.
const CONTENT_WIDTH: usize = 50;

/// A typed view node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Grouping block: one post card, or a card's action row.
    Block {
        class: &'static str,
        children: Vec<Node>,
    },
    /// The author label of a card.
    Label(String),
    /// Inert text, e.g. a post body.
    Text(String),
    /// A button. `control` is the identifier the dispatch table
    /// resolves; `None` marks an inert placeholder. `pressed` drives
    /// the liked indicator.
    Button {
        label: String,
        control: Option<String>,
        pressed: bool,
    },
}

/// Build the display block for one post: author label, body text,
/// and the action row with the like control and the two inert
/// placeholders.
pub fn build_card(post: &Post) -> Node {
    Node::Block {
        class: "post",
        children: vec![
            Node::Label(format!("{}:", post.author)),
            Node::Text(post.content.clone()),
            Node::Block {
                class: "post-actions",
                children: vec![
                    Node::Button {
                        label: format!("Like ({})", post.likes),
                        control: Some(like_control_id(post.id())),
                        pressed: post.is_liked,
                    },
                    Node::Button {
                        label: "Comment".to_owned(),
                        control: None,
                        pressed: false,
                    },
                    Node::Button {
                        label: "Share".to_owned(),
                        control: None,
                        pressed: false,
                    },
                ],
            },
        ],
    }
}

/// Build the whole feed, in list order (newest first).
pub fn build_feed(posts: &[Post]) -> Vec<Node> {
    posts.iter().map(build_card).collect()
}

/// Total rebuild of the feed mount from the post list: clear, build,
/// install, and rebind the like controls to match. A page without a
/// feed mount swallows the call.
pub fn render(page: &mut Page, posts: &[Post]) {
    if page.feed.is_none() {
        return;
    }

    page.controls.unbind_prefix(LIKE_PREFIX);
    for post in posts {
        page.controls.bind(
            like_control_id(post.id()),
            Action::ToggleLike { id: post.id() },
        );
    }

    if let Some(mount) = page.feed.as_mut() {
        mount.cards = build_feed(posts);
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Block { class, children } => {
                if *class == "post" {
                    writeln!(f, "{:-<54}", "")?;
                    for child in children {
                        writeln!(f, "{child}")?;
                    }
                    write!(f, "{:-<54}", "")
                } else {
                    let row = children
                        .iter()
                        .map(|child| child.to_string())
                        .collect::<Vec<String>>()
                        .join(" ");
                    write!(f, "{row}")
                }
            }
            Node::Label(text) => write!(f, "{text}"),
            Node::Text(text) => {
                let wrapping_config = textwrap::Options::new(CONTENT_WIDTH).break_words(true);
                let lines = wrap(text, wrapping_config);
                write!(f, "{}", lines.join("\n"))
            }
            Node::Button {
                label, pressed, ..
            } => {
                if *pressed {
                    write!(f, "[{label} *]")
                } else {
                    write!(f, "[{label}]")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64, content: &str, likes: u32, liked: bool) -> Post {
        let mut post = Post::new(id, "You", content).unwrap();
        for _ in 0..likes {
            post.likes += 1;
        }
        post.is_liked = liked;
        post
    }

    fn like_button(card: &Node) -> &Node {
        let Node::Block { children, .. } = card else {
            panic!("card is not a block: {card:?}");
        };
        let Node::Block { children: actions, .. } = &children[2] else {
            panic!("card has no action row: {card:?}");
        };
        &actions[0]
    }

    #[test]
    fn card_carries_author_content_and_controls() {
        let card = build_card(&post(9, "hello feed", 0, false));

        let Node::Block { class, children } = &card else {
            panic!("not a block");
        };
        assert_eq!(*class, "post");
        assert_eq!(children[0], Node::Label("You:".into()));
        assert_eq!(children[1], Node::Text("hello feed".into()));

        let Node::Block { class, children: actions } = &children[2] else {
            panic!("no action row");
        };
        assert_eq!(*class, "post-actions");
        assert_eq!(actions.len(), 3);

        // Only the like button carries a control identifier.
        let Node::Button { label, control, pressed } = &actions[0] else {
            panic!("no like button");
        };
        assert_eq!(label, "Like (0)");
        assert_eq!(control.as_deref(), Some("like-9"));
        assert!(!pressed);
        assert!(matches!(&actions[1], Node::Button { control: None, .. }));
        assert!(matches!(&actions[2], Node::Button { control: None, .. }));
    }

    #[test]
    fn rendered_order_and_liked_indicator_follow_the_list() {
        let posts = vec![post(1, "older but liked", 3, true), post(2, "newer", 0, false)];
        let mut page = Page::with_defaults();

        render(&mut page, &posts);

        //----- Expected values
        let expected_cards = 2;
        //-----

        assert_eq!(page.cards().len(), expected_cards);
        let Node::Button { label, pressed, .. } = like_button(&page.cards()[0]) else {
            panic!("no like button");
        };
        assert_eq!(label, "Like (3)");
        assert!(*pressed);
        let Node::Button { pressed, .. } = like_button(&page.cards()[1]) else {
            panic!("no like button");
        };
        assert!(!pressed);
    }

    #[test]
    fn rerender_rebuilds_instead_of_appending() {
        let posts = vec![post(1, "only", 0, false)];
        let mut page = Page::with_defaults();

        render(&mut page, &posts);
        render(&mut page, &posts);

        assert_eq!(page.cards().len(), 1);
        assert_eq!(page.controls().resolve("like-1"), Some(&Action::ToggleLike { id: 1 }));
    }

    #[test]
    fn render_rebinds_like_controls_to_the_current_list() {
        let mut page = Page::with_defaults();
        render(&mut page, &[post(1, "gone soon", 0, false)]);
        assert!(page.controls().resolve("like-1").is_some());

        render(&mut page, &[post(2, "replacement", 0, false)]);
        assert!(page.controls().resolve("like-1").is_none());
        assert!(page.controls().resolve("like-2").is_some());
    }

    #[test]
    fn render_without_a_mount_is_a_noop() {
        let mut page = Page::new();
        render(&mut page, &[post(1, "nowhere to go", 0, false)]);
        assert!(page.cards().is_empty());
        assert!(page.controls().resolve("like-1").is_none());
    }

    #[test]
    fn terminal_display_wraps_and_marks_likes() {
        let card = build_card(&{
            let mut liked = post(1, "short body", 0, false);
            liked.toggle_like();
            liked
        });
        let text = card.to_string();
        assert!(text.contains("You:"));
        assert!(text.contains("short body"));
        assert!(text.contains("[Like (1) *]"));
        assert!(text.contains("[Comment]"));
    }
}
