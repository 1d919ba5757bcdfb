mod clipboard;
mod copy_feedback;
mod disclosure;
mod error;
mod feed;
mod identity;
mod route;
mod session;
mod settings;
mod theme;
mod truncate;
mod types;

pub use clipboard::SystemClipboard;
pub use copy_feedback::{copy_prompt, expire_after, CopyFeedback, CopyIcon};
pub use disclosure::{card_height, CardView, Disclosure, ViewMode};
pub use feed::{bundled_feed, filter_posts, posts_by_creator, remove_post};
pub use identity::select_tag;
pub use route::{Route, HOME_PATH};
pub use session::{Session, DEMO_VIEWER_ID};
pub use settings::{run_settings_saver, Settings};
pub use theme::Theme;
pub use types::{Post, Viewer};
