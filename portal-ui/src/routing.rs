// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application route definitions.
//!
//! The variants mirror the portal route table in `portal-routes`, in the same
//! order. Dioxus matches static segments case-sensitively while the table does
//! not, so locations Dioxus sends to `NotFound` are resolved again against the
//! table before the 404 view is chosen.

use dioxus::prelude::*;
use portal_routes::{portal_routes, HOME, NOT_FOUND, SPOTIFY_CALLBACK};

use crate::components::layout::PortalLayout;
use crate::components::route_view::RouteView;

#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(PortalLayout)]
        #[route("/", HomeRoute)]
        Home {},
        #[route("/spotify/callback", SpotifyCallbackRoute)]
        SpotifyCallback {},
        #[route("/:..segments", NotFoundRoute)]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Name of the matching entry in the portal route table.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home {} => HOME,
            Route::SpotifyCallback {} => SPOTIFY_CALLBACK,
            Route::NotFound { segments } => fallback_name(segments),
        }
    }
}

/// Table entry for a location the Dioxus matcher left unmatched, e.g.
/// `/Spotify/Callback`.
fn fallback_name(segments: &[String]) -> &'static str {
    let path = format!("/{}", segments.join("/"));
    portal_routes()
        .resolve(&path)
        .map(|resolved| resolved.name())
        .unwrap_or(NOT_FOUND)
}

#[component]
fn HomeRoute() -> Element {
    rsx! { RouteView { name: HOME } }
}

#[component]
fn SpotifyCallbackRoute() -> Element {
    rsx! { RouteView { name: SPOTIFY_CALLBACK } }
}

#[component]
fn NotFoundRoute(segments: Vec<String>) -> Element {
    let name = fallback_name(&segments);
    if name == NOT_FOUND {
        log::debug!("no route for /{}", segments.join("/"));
    }
    rsx! { RouteView { key: "{name}", name } }
}
