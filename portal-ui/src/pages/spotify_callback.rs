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

//! Landing page for the Spotify OAuth redirect.
//!
//! Only reports what the provider sent back. Exchanging the code for a token
//! is handled elsewhere.

use dioxus::prelude::*;
use portal_routes::{parse_query, Query};

/// What the provider put on the redirect URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackStatus {
    /// The user approved access; an authorization code is present.
    Authorized { state: Option<String> },
    /// The provider returned `error=...`.
    Denied(String),
    /// Neither `code` nor `error` was present.
    Missing,
}

impl CallbackStatus {
    pub fn from_query(query: &Query) -> Self {
        let first = |key: &str| {
            query
                .get(key)
                .and_then(|values| values.first())
                .filter(|value| !value.is_empty())
                .cloned()
        };
        if let Some(error) = first("error") {
            return CallbackStatus::Denied(error);
        }
        match first("code") {
            Some(_) => CallbackStatus::Authorized {
                state: first("state"),
            },
            None => CallbackStatus::Missing,
        }
    }

    /// Parses `location.search`, with or without the leading `?`.
    pub fn from_search(search: &str) -> Self {
        Self::from_query(&parse_query(search.trim_start_matches('?')))
    }
}

fn current_search() -> String {
    web_sys::window()
        .and_then(|win| win.location().search().ok())
        .unwrap_or_default()
}

#[component]
pub fn SpotifyCallbackView() -> Element {
    let status = use_hook(|| CallbackStatus::from_search(&current_search()));

    use_effect({
        let status = status.clone();
        move || match &status {
            CallbackStatus::Authorized { .. } => log::info!("spotify authorization code received"),
            CallbackStatus::Denied(error) => log::warn!("spotify authorization denied: {error}"),
            CallbackStatus::Missing => log::warn!("spotify callback without code or error"),
        }
    });

    let detail = match &status {
        CallbackStatus::Authorized { .. } => "Authorization received, finishing sign-in.".to_string(),
        CallbackStatus::Denied(error) => format!("Spotify returned an error: {error}"),
        CallbackStatus::Missing => "No authorization code was found in the callback URL.".to_string(),
    };

    rsx! {
        div { class: "spotify-callback",
            h1 { "Connecting to Spotify..." }
            p { class: "callback-status", "{detail}" }
        }
    }
}
