/*
 * Copyright 2025 Security Union LLC
 * Licensed under MIT OR Apache-2.0
 */

use dioxus::prelude::*;

/// Shown in place of a deferred view whose loader failed.
#[component]
pub fn LoadFailed(name: String, message: String) -> Element {
    rsx! {
        div { class: "error-container load-failed",
            p { class: "error-message", "Could not open this page." }
            p { "{message}" }
            p { class: "route-name", "Route: {name}" }
        }
    }
}
