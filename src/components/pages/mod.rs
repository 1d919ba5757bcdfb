mod feed;
mod profile;

pub use feed::Feed;
pub use profile::Profile;
