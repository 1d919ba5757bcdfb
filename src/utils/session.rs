use super::settings::Settings;
use super::types::Viewer;

/// Identity used by the header's sign-in button.
pub const DEMO_VIEWER_ID: &str = "u1";

/// Who is looking at the page. Resolved from settings; no tokens involved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    viewer: Option<Viewer>,
}

impl Session {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            viewer: settings.viewer_id.as_deref().map(Viewer::new),
        }
    }

    pub fn current_viewer(&self) -> Option<&Viewer> {
        self.viewer.as_ref()
    }

    pub fn viewer_id(&self) -> Option<&str> {
        self.viewer.as_ref().map(|v| v.id.as_str())
    }

    pub fn sign_in(&mut self, id: impl Into<String>) {
        self.viewer = Some(Viewer::new(id));
    }

    pub fn sign_out(&mut self) {
        self.viewer = None;
    }
}
