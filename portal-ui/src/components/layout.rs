// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shell shared by every route, and the document-title hook.

use dioxus::prelude::*;
use portal_routes::portal_routes;

use crate::constants::app_name;
use crate::routing::Route;

#[component]
pub fn PortalLayout() -> Element {
    let route = use_route::<Route>();
    log::debug!("navigated to {route} ({})", route.name());

    rsx! {
        main { class: "portal",
            Outlet::<Route> {}
        }
    }
}

/// Sets `document.title` from the named route's `meta.title` when the calling
/// component mounts. Each route renders its own component, so this runs once
/// per navigation.
pub fn use_route_title(name: &'static str) {
    use_effect(move || {
        let title = portal_routes().document_title(name, &app_name());
        gloo_utils::document().set_title(&title);
    });
}
