use super::error::{AppError, Result};
use super::theme::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use futures::{Stream, StreamExt};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub theme: String,
    /// Demo identity of the signed-in viewer, if any.
    #[serde(default)]
    pub viewer_id: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light.id().to_string(),
            viewer_id: None,
        }
    }
}

impl Settings {
    /// Get the platform-specific settings directory
    pub fn settings_dir() -> Result<PathBuf> {
        let config_dir = if cfg!(any(target_os = "windows", target_os = "macos")) {
            // Windows: %APPDATA%\promptcard, macOS: ~/Library/Application Support/promptcard
            dirs::config_dir()
                .ok_or(AppError::MissingDir("config"))?
                .join("promptcard")
        } else {
            // Linux/Unix: $HOME/.promptcard
            dirs::home_dir()
                .ok_or(AppError::MissingDir("home"))?
                .join(".promptcard")
        };

        Ok(config_dir)
    }

    pub fn settings_path() -> Result<PathBuf> {
        Ok(Self::settings_dir()?.join("settings.toml"))
    }

    /// Load settings from the config file
    pub fn load() -> Result<Self> {
        let path = Self::settings_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(AppError::ReadSettings)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save settings to `path`, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(AppError::WriteSettings)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(AppError::WriteSettings)?;

        tracing::debug!(path = %path.display(), "Settings saved");
        Ok(())
    }

    /// Theme from settings, light if the stored id is unknown.
    pub fn theme(&self) -> Theme {
        Theme::from_id(&self.theme).unwrap_or(Theme::Light)
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme.id().to_string();
    }
}

/// Write each snapshot from `queue` to `path`, one at a time and in order.
///
/// Disk work runs on the blocking pool; the next snapshot is not started until
/// the previous write has finished, so the file always ends up holding the
/// newest settings.
pub async fn run_settings_saver<S>(mut queue: S, path: PathBuf)
where
    S: Stream<Item = Settings> + Unpin,
{
    while let Some(settings) = queue.next().await {
        let target = path.clone();
        match tokio::task::spawn_blocking(move || settings.save_to(&target)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!(error = %e, "Failed to save settings"),
            Err(e) => tracing::error!(error = %e, "Settings save task failed"),
        }
    }
}
