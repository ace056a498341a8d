// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;
use portal_routes::{portal_routes, Params, HOME};

use crate::routing::Route;

#[component]
pub fn NotFoundView() -> Element {
    let missing = match use_route::<Route>() {
        Route::NotFound { segments } => format!("/{}", segments.join("/")),
        other => other.to_string(),
    };
    let home = portal_routes()
        .path_for(HOME, &Params::new())
        .unwrap_or_else(|_| "/".to_string());

    rsx! {
        div { class: "not-found",
            h1 { "404" }
            p { "Page not found" }
            code { class: "missing-path", "{missing}" }
            a { href: "{home}", class: "home-link", "Go Home" }
        }
    }
}
