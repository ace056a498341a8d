// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dioxus frontend of the Goomba portal.
//!
//! [`routing::Route`] is what the Dioxus router matches against; its routes
//! render through [`components::route_view::RouteView`], which titles the
//! document and loads deferred views via the `portal-routes` table. Runtime
//! settings come from `window.__APP_CONFIG` ([`constants`]). `main.rs` only
//! installs logging and launches the router.

pub mod components;
pub mod constants;
pub mod pages;
pub mod routing;
