use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(alias = "avatarUrl")]
    pub image: String,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Post {
    #[serde(alias = "_id")]
    pub id: String,
    pub prompt: String,
    pub tag: String,
    pub creator: User,
}

/// The signed-in identity looking at the page.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Viewer {
    pub id: String,
}

impl Viewer {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
