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
use portal_routes::{portal_routes, View};

use crate::components::layout::use_route_title;
use crate::components::load_failed::LoadFailed;
use crate::pages::home::HomeView;
use crate::pages::not_found::NotFoundView;
use crate::pages::spotify_callback::SpotifyCallbackView;

#[derive(Clone)]
enum LoadState {
    Loading,
    Ready(View),
    Failed(String),
}

/// Renders the view of the named route, going through the table's load
/// cache for deferred views.
#[component]
pub fn RouteView(name: &'static str) -> Element {
    use_route_title(name);

    let mut state = use_signal(move || {
        match portal_routes().get(name).and_then(|route| route.component.ready()) {
            Some(view) => LoadState::Ready(view),
            None => LoadState::Loading,
        }
    });

    use_effect(move || {
        if !matches!(*state.peek(), LoadState::Loading) {
            return;
        }
        spawn(async move {
            let next = match portal_routes().get(name) {
                Some(route) => match route.load().await {
                    Ok(view) => LoadState::Ready(view),
                    Err(e) => LoadState::Failed(e.to_string()),
                },
                None => LoadState::Failed(format!("no route named `{name}`")),
            };
            state.set(next);
        });
    });

    let current = state.read().clone();
    match current {
        LoadState::Loading => rsx! {
            div { class: "route-loading", "Loading..." }
        },
        LoadState::Ready(view) => render_view(view),
        LoadState::Failed(message) => rsx! {
            LoadFailed { name: name.to_string(), message }
        },
    }
}

fn render_view(view: View) -> Element {
    match view {
        View::Home => rsx! { HomeView {} },
        View::SpotifyCallback => rsx! { SpotifyCallbackView {} },
        View::NotFound => rsx! { NotFoundView {} },
    }
}
