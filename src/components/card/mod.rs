mod card_list;
mod copy_button;
mod creator_badge;
mod modal;
mod owner_controls;
mod prompt_card;
mod tag_label;

pub use card_list::PromptCardList;
pub use copy_button::CopyButton;
pub use creator_badge::{Avatar, CreatorBadge};
pub use modal::Modal;
pub use owner_controls::OwnerControls;
pub use prompt_card::PromptCard;
pub use tag_label::TagLabel;
