use url::form_urlencoded;

pub const HOME_PATH: &str = "/";
pub const PROFILE_PATH: &str = "/profile";

/// Pages the app can show, addressed by path.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Route {
    Home,
    /// The viewer's own profile.
    MyProfile,
    UserProfile { id: String, name: String },
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => HOME_PATH.to_string(),
            Route::MyProfile => PROFILE_PATH.to_string(),
            Route::UserProfile { id, name } => {
                let query: String = form_urlencoded::Serializer::new(String::new())
                    .append_pair("name", name)
                    .finish();
                format!("{}/{}?{}", PROFILE_PATH, id, query)
            }
        }
    }

    /// Unknown paths fall back to [`Route::Home`].
    pub fn parse(path: &str) -> Route {
        let (path, query) = path.split_once('?').unwrap_or((path, ""));
        let path = path.trim_end_matches('/');

        if path == PROFILE_PATH {
            return Route::MyProfile;
        }

        if let Some(id) = path.strip_prefix(PROFILE_PATH).and_then(|rest| rest.strip_prefix('/')) {
            if !id.is_empty() && !id.contains('/') {
                let name = form_urlencoded::parse(query.as_bytes())
                    .find(|(key, _)| key == "name")
                    .map(|(_, value)| value.into_owned())
                    .unwrap_or_default();
                return Route::UserProfile {
                    id: id.to_string(),
                    name,
                };
            }
        }

        Route::Home
    }

    pub fn is_profile_page(&self) -> bool {
        matches!(self, Route::MyProfile | Route::UserProfile { .. })
    }
}
