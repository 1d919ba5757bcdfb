use super::route::{Route, PROFILE_PATH};
use super::types::{User, Viewer};

/// Edit/delete are offered only to the creator, and only on their own profile page.
pub fn owner_controls_visible(
    viewer_id: Option<&str>,
    creator_id: &str,
    current_path: &str,
) -> bool {
    viewer_id.is_some_and(|id| id == creator_id) && current_path == PROFILE_PATH
}

pub fn is_creator(viewer: Option<&Viewer>, creator: &User) -> bool {
    viewer.is_some_and(|viewer| viewer.id == creator.id)
}

/// Where activating the creator's avatar leads, regardless of the current page.
pub fn avatar_target(viewer: Option<&Viewer>, creator: &User) -> Route {
    if is_creator(viewer, creator) {
        Route::MyProfile
    } else {
        Route::UserProfile {
            id: creator.id.clone(),
            name: creator.username.clone(),
        }
    }
}

pub fn tag_label(tag: &str) -> String {
    format!("#{}", tag)
}

/// Hand `tag` to the caller's callback if one was supplied. Returns whether it was.
pub fn select_tag<F>(on_tag_selected: Option<F>, tag: &str) -> bool
where
    F: FnOnce(String),
{
    match on_tag_selected {
        Some(callback) => {
            callback(tag.to_string());
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, username: &str) -> User {
        User {
            id: id.to_string(),
            username: username.to_string(),
            email: format!("{}@example.com", username),
            image: "https://example.com/avatar.png".to_string(),
        }
    }

    #[test]
    fn test_owner_controls_on_own_profile() {
        assert!(owner_controls_visible(Some("u1"), "u1", "/profile"));
        assert!(!owner_controls_visible(Some("u1"), "u1", "/"));
    }

    #[test]
    fn test_owner_controls_hidden_for_others() {
        assert!(!owner_controls_visible(Some("u2"), "u1", "/profile"));
        assert!(!owner_controls_visible(Some("u2"), "u1", "/"));
        assert!(!owner_controls_visible(None, "u1", "/profile"));
        assert!(!owner_controls_visible(None, "", "/profile"));
        assert!(!owner_controls_visible(Some("u1"), "u1", "/profile/u1?name=ada"));
    }

    #[test]
    fn test_avatar_routes_self_to_own_profile() {
        let ada = user("u1", "ada");
        let viewer = Viewer::new("u1");
        assert_eq!(avatar_target(Some(&viewer), &ada), Route::MyProfile);
        assert_eq!(avatar_target(Some(&viewer), &ada).path(), "/profile");
    }

    #[test]
    fn test_avatar_routes_others_to_their_profile() {
        let grace = user("u2", "grace");
        let viewer = Viewer::new("u1");
        assert_eq!(
            avatar_target(Some(&viewer), &grace).path(),
            "/profile/u2?name=grace"
        );
        assert_eq!(avatar_target(None, &grace).path(), "/profile/u2?name=grace");
    }

    #[test]
    fn test_tag_selection_requires_callback() {
        let mut selected = None;
        assert!(select_tag(Some(|tag: String| selected = Some(tag)), "rust"));
        assert_eq!(selected.as_deref(), Some("rust"));

        assert!(!select_tag(None::<fn(String)>, "rust"));
        assert_eq!(tag_label("rust"), "#rust");
    }
}
