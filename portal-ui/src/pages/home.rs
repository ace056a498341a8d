/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

use dioxus::prelude::*;
use portal_routes::{portal_routes, Params, SPOTIFY_CALLBACK};

use crate::constants::app_name;

#[component]
pub fn HomeView() -> Element {
    let name = app_name();
    let spotify = portal_routes()
        .path_for(SPOTIFY_CALLBACK, &Params::new())
        .unwrap_or_else(|_| "/spotify/callback".to_string());

    rsx! {
        div { class: "home-container",
            h1 { class: "home-title", "{name}" }
            p { class: "home-subtitle", "Welcome back. Pick something to play." }
            Link { to: spotify, class: "spotify-link", "Spotify connection status" }
        }
    }
}
