use super::copy_feedback::{CopyFeedback, CopyIcon};
use super::identity::{avatar_target, owner_controls_visible, tag_label};
use super::route::Route;
use super::truncate::{needs_truncation, truncate, COMPACT_PROMPT_LIMIT};
use super::types::{Post, Viewer};

pub const READ_MORE_LABEL: &str = "Read More >>";
pub const READ_LESS_LABEL: &str = "Read Less";

/// Whether a card's full-text overlay is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Disclosure {
    expanded: bool,
}

impl Disclosure {
    pub fn open(&mut self) {
        self.expanded = true;
    }

    pub fn close(&mut self) {
        self.expanded = false;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Reflects the current state; activating the link always opens the overlay.
    pub fn expand_label(&self) -> &'static str {
        if self.expanded {
            READ_LESS_LABEL
        } else {
            READ_MORE_LABEL
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Compact,
    Expanded,
}

/// Fixed compact card height; profile pages get a taller card.
pub fn card_height(is_profile_page: bool) -> &'static str {
    if is_profile_page {
        "250px"
    } else {
        "200px"
    }
}

/// Everything the compact card and the expanded overlay render, derived
/// fresh from the post, the viewer and the card's own state.
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub creator_name: String,
    pub creator_email: String,
    pub avatar_url: String,
    pub avatar_target: Route,
    pub text: String,
    /// Label of the inline expand link, when one is shown.
    pub expand_label: Option<&'static str>,
    pub copy_icon: CopyIcon,
    pub tag_label: String,
    pub show_owner_controls: bool,
}

impl CardView {
    pub fn build(
        post: &Post,
        viewer: Option<&Viewer>,
        current_path: &str,
        feedback: &CopyFeedback,
        disclosure: Disclosure,
        mode: ViewMode,
    ) -> Self {
        let (text, expand_label) = match mode {
            ViewMode::Compact => {
                let label = needs_truncation(&post.prompt, COMPACT_PROMPT_LIMIT)
                    .then(|| disclosure.expand_label());
                (truncate(&post.prompt, COMPACT_PROMPT_LIMIT), label)
            }
            ViewMode::Expanded => (post.prompt.clone(), None),
        };

        let viewer_id = viewer.map(|v| v.id.as_str());

        Self {
            creator_name: post.creator.username.clone(),
            creator_email: post.creator.email.clone(),
            avatar_url: post.creator.image.clone(),
            avatar_target: avatar_target(viewer, &post.creator),
            text,
            expand_label,
            copy_icon: CopyIcon::for_text(feedback, &post.prompt),
            tag_label: tag_label(&post.tag),
            show_owner_controls: owner_controls_visible(viewer_id, &post.creator.id, current_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::truncate::ELLIPSIS;
    use crate::utils::types::User;

    fn post(prompt: &str) -> Post {
        Post {
            id: "p1".to_string(),
            prompt: prompt.to_string(),
            tag: "writing".to_string(),
            creator: User {
                id: "u1".to_string(),
                username: "ada".to_string(),
                email: "ada@example.com".to_string(),
                image: "https://example.com/ada.png".to_string(),
            },
        }
    }

    #[test]
    fn test_open_and_close() {
        let mut disclosure = Disclosure::default();
        assert!(!disclosure.is_expanded());
        assert_eq!(disclosure.expand_label(), READ_MORE_LABEL);

        disclosure.open();
        assert!(disclosure.is_expanded());
        assert_eq!(disclosure.expand_label(), READ_LESS_LABEL);

        disclosure.open();
        assert!(disclosure.is_expanded());

        disclosure.close();
        assert!(!disclosure.is_expanded());
    }

    #[test]
    fn test_card_height() {
        assert_eq!(card_height(true), "250px");
        assert_eq!(card_height(false), "200px");
    }

    #[test]
    fn test_compact_view_truncates_long_prompt() {
        let long = post(&"lorem ipsum ".repeat(20));
        let view = CardView::build(
            &long,
            None,
            "/",
            &CopyFeedback::new(),
            Disclosure::default(),
            ViewMode::Compact,
        );
        assert!(view.text.ends_with(ELLIPSIS));
        assert!(view.text.len() < long.prompt.len());
        assert_eq!(view.expand_label, Some(READ_MORE_LABEL));
        assert_eq!(view.tag_label, "#writing");
    }

    #[test]
    fn test_expand_label_tracks_disclosure() {
        let long = post(&"lorem ipsum ".repeat(20));
        let mut disclosure = Disclosure::default();
        disclosure.open();
        let view = CardView::build(
            &long,
            None,
            "/",
            &CopyFeedback::new(),
            disclosure,
            ViewMode::Compact,
        );
        assert_eq!(view.expand_label, Some(READ_LESS_LABEL));
    }

    #[test]
    fn test_short_prompt_has_no_expand_link() {
        let short = post("Summarize this article in three bullet points");
        let view = CardView::build(
            &short,
            None,
            "/",
            &CopyFeedback::new(),
            Disclosure::default(),
            ViewMode::Compact,
        );
        assert_eq!(view.text, short.prompt);
        assert_eq!(view.expand_label, None);
    }

    #[test]
    fn test_expanded_view_shows_full_prompt() {
        let long = post(&"lorem ipsum ".repeat(20));
        let view = CardView::build(
            &long,
            None,
            "/",
            &CopyFeedback::new(),
            Disclosure::default(),
            ViewMode::Expanded,
        );
        assert_eq!(view.text, long.prompt);
        assert_eq!(view.expand_label, None);
    }

    #[test]
    fn test_both_views_share_copy_and_owner_state() {
        let p = post("Explain borrow checking to a beginner");
        let viewer = Viewer::new("u1");
        let mut feedback = CopyFeedback::new();
        feedback.copy(p.prompt.clone());

        for mode in [ViewMode::Compact, ViewMode::Expanded] {
            let view = CardView::build(
                &p,
                Some(&viewer),
                "/profile",
                &feedback,
                Disclosure::default(),
                mode,
            );
            assert_eq!(view.copy_icon, CopyIcon::Tick);
            assert!(view.show_owner_controls);
            assert_eq!(view.avatar_target, Route::MyProfile);
        }

        let home = CardView::build(
            &p,
            Some(&viewer),
            "/",
            &feedback,
            Disclosure::default(),
            ViewMode::Compact,
        );
        assert!(!home.show_owner_controls);
        assert_eq!(home.avatar_target, Route::MyProfile);
    }

    #[test]
    fn test_other_viewer_sees_creator_route() {
        let p = post("Draft a cover letter");
        let viewer = Viewer::new("u9");
        let view = CardView::build(
            &p,
            Some(&viewer),
            "/profile",
            &CopyFeedback::new(),
            Disclosure::default(),
            ViewMode::Compact,
        );
        assert!(!view.show_owner_controls);
        assert_eq!(view.avatar_target.path(), "/profile/u1?name=ada");
        assert_eq!(view.copy_icon, CopyIcon::Copy);
    }
}
