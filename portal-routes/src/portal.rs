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

//! The Goomba portal route table.

use std::sync::OnceLock;

use futures::future::LocalBoxFuture;
use futures::FutureExt;

use crate::component::LoadError;
use crate::route::{RouteDescriptor, RouteMeta, RouteTable, RouteTableError};

pub const HOME: &str = "home";
pub const SPOTIFY_CALLBACK: &str = "spotifyCallback";
pub const NOT_FOUND: &str = "notFound";

/// Renderable views of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    SpotifyCallback,
    NotFound,
}

fn load_spotify_callback() -> LocalBoxFuture<'static, Result<View, LoadError>> {
    async { Ok(View::SpotifyCallback) }.boxed_local()
}

fn load_not_found() -> LocalBoxFuture<'static, Result<View, LoadError>> {
    async { Ok(View::NotFound) }.boxed_local()
}

/// Builds a fresh copy of the portal table, with empty load caches.
pub fn portal_route_table() -> Result<RouteTable<View>, RouteTableError> {
    RouteTable::new(vec![
        RouteDescriptor::eager("/", HOME, View::Home)?
            .with_meta(RouteMeta::titled("Goomba Portal")),
        RouteDescriptor::deferred("/spotify/callback", SPOTIFY_CALLBACK, load_spotify_callback)?
            .with_meta(RouteMeta::titled("Connecting to Spotify...")),
        // 404 fallback, must stay last
        RouteDescriptor::deferred("/:pathMatch(.*)*", NOT_FOUND, load_not_found)?
            .with_meta(RouteMeta::titled("404 Not Found")),
    ])
}

/// The process-wide portal table, built on first access.
pub fn portal_routes() -> &'static RouteTable<View> {
    static ROUTES: OnceLock<RouteTable<View>> = OnceLock::new();
    ROUTES.get_or_init(|| portal_route_table().expect("portal route table is well-formed"))
}
