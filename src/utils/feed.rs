use super::error::Result;
use super::types::Post;
use regex::RegexBuilder;

const BUNDLED_FEED: &str = include_str!("../../assets/feed.json");

/// Parse a JSON array of posts.
pub fn parse_feed(json: &str) -> Result<Vec<Post>> {
    let posts: Vec<Post> = serde_json::from_str(json)?;
    Ok(posts)
}

/// The sample feed shipped with the app. Empty if it fails to parse.
pub fn bundled_feed() -> Vec<Post> {
    parse_feed(BUNDLED_FEED).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to load bundled feed");
        Vec::new()
    })
}

/// Posts whose creator username, tag or prompt contain `query`, ignoring case.
/// The query is matched literally.
pub fn filter_posts(posts: &[Post], query: &str) -> Vec<Post> {
    let query = query.trim();
    if query.is_empty() {
        return posts.to_vec();
    }

    let re = match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re,
        Err(e) => {
            tracing::warn!(error = %e, query, "Unusable search query");
            return posts.to_vec();
        }
    };

    posts
        .iter()
        .filter(|post| {
            re.is_match(&post.creator.username)
                || re.is_match(&post.tag)
                || re.is_match(&post.prompt)
        })
        .cloned()
        .collect()
}

pub fn posts_by_creator(posts: &[Post], creator_id: &str) -> Vec<Post> {
    posts
        .iter()
        .filter(|post| post.creator.id == creator_id)
        .cloned()
        .collect()
}

/// Drop the post with `id` from the in-memory list. Returns whether one was removed.
pub fn remove_post(posts: &mut Vec<Post>, id: &str) -> bool {
    let before = posts.len();
    posts.retain(|post| post.id != id);
    posts.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"[
        {
            "_id": "p1",
            "prompt": "Write a limerick about the borrow checker",
            "tag": "poetry",
            "creator": { "_id": "u1", "username": "ada", "email": "ada@example.com", "image": "https://example.com/ada.png" }
        },
        {
            "id": "p2",
            "prompt": "Explain (a+b)^2 step by step",
            "tag": "math",
            "creator": { "id": "u2", "username": "Grace", "email": "grace@example.com", "avatarUrl": "https://example.com/grace.png" }
        }
    ]"#;

    #[test]
    fn test_parse_feed_accepts_both_id_spellings() {
        let posts = parse_feed(FEED).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, "p1");
        assert_eq!(posts[0].creator.id, "u1");
        assert_eq!(posts[1].creator.image, "https://example.com/grace.png");
    }

    #[test]
    fn test_parse_feed_rejects_garbage() {
        assert!(parse_feed("{ not json").is_err());
    }

    #[test]
    fn test_bundled_feed_loads() {
        assert!(!bundled_feed().is_empty());
    }

    #[test]
    fn test_filter_matches_username_tag_and_prompt() {
        let posts = parse_feed(FEED).unwrap();
        assert_eq!(filter_posts(&posts, "grace")[0].id, "p2");
        assert_eq!(filter_posts(&posts, "POETRY")[0].id, "p1");
        assert_eq!(filter_posts(&posts, "borrow")[0].id, "p1");
        assert_eq!(filter_posts(&posts, "  ").len(), 2);
        assert!(filter_posts(&posts, "haskell").is_empty());
    }

    #[test]
    fn test_filter_treats_query_literally() {
        let posts = parse_feed(FEED).unwrap();
        let hits = filter_posts(&posts, "(a+b)^2");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "p2");
    }

    #[test]
    fn test_posts_by_creator() {
        let posts = parse_feed(FEED).unwrap();
        let mine = posts_by_creator(&posts, "u1");
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id, "p1");
        assert!(posts_by_creator(&posts, "u3").is_empty());
    }

    #[test]
    fn test_remove_post() {
        let mut posts = parse_feed(FEED).unwrap();
        assert!(remove_post(&mut posts, "p1"));
        assert_eq!(posts.len(), 1);
        assert!(!remove_post(&mut posts, "p1"));
        assert_eq!(posts[0].id, "p2");
    }
}
