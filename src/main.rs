use dioxus::prelude::*;

mod components;
mod utils;

use components::{Feed, Header, Profile};
use utils::{
    bundled_feed, run_settings_saver, Route, Session, Settings, DEMO_VIEWER_ID, HOME_PATH,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Load settings from disk on startup
    let mut app_settings = use_signal(|| {
        Settings::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load settings, using defaults");
            Settings::default()
        })
    });

    let mut theme = use_signal(|| app_settings.read().theme());
    let mut session = use_signal(|| Session::from_settings(&app_settings.read()));

    // Single writer for the settings file; snapshots are saved in the order they were sent.
    let settings_saver = use_coroutine(|queue: UnboundedReceiver<Settings>| async move {
        match Settings::settings_path() {
            Ok(path) => run_settings_saver(queue, path).await,
            Err(e) => tracing::error!(error = %e, "Settings will not be saved"),
        }
    });

    // The listing is supplied by the host; here it is the bundled sample feed.
    let posts = use_signal(|| {
        let posts = bundled_feed();
        tracing::info!(count = posts.len(), "Feed loaded");
        posts
    });

    // Current route path; every page is derived from it.
    let mut current_path = use_signal(|| HOME_PATH.to_string());

    let navigate = move |route: Route| {
        let path = route.path();
        tracing::debug!(%path, "Navigating");
        current_path.set(path);
    };

    let toggle_theme = move |_| {
        let new_theme = theme.read().toggled();
        theme.set(new_theme);
        app_settings.write().set_theme(new_theme);
        settings_saver.send(app_settings.read().clone());
    };

    let sign_in = move |_| {
        session.write().sign_in(DEMO_VIEWER_ID);
        app_settings.write().viewer_id = Some(DEMO_VIEWER_ID.to_string());
        tracing::info!(viewer_id = DEMO_VIEWER_ID, "Signed in");
        settings_saver.send(app_settings.read().clone());
    };

    let sign_out = move |_| {
        session.write().sign_out();
        app_settings.write().viewer_id = None;
        tracing::info!("Signed out");
        settings_saver.send(app_settings.read().clone());
    };

    let path = current_path.read().clone();
    let route = Route::parse(&path);
    let data_theme = theme.read().id();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            "data-theme": "{data_theme}",
            class: "app",

            Header {
                theme,
                session,
                posts,
                on_toggle_theme: toggle_theme,
                on_sign_in: sign_in,
                on_sign_out: sign_out,
                on_navigate: navigate,
            }

            main {
                match route {
                    Route::Home => rsx! {
                        Feed {
                            theme,
                            posts,
                            session,
                            current_path,
                            on_navigate: navigate,
                        }
                    },
                    profile => rsx! {
                        Profile {
                            key: "{path}",
                            theme,
                            route: profile,
                            posts,
                            session,
                            current_path,
                            on_navigate: navigate,
                            on_sign_in: sign_in,
                        }
                    },
                }
            }
        }
    }
}
