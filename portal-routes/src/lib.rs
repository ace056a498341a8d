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

//! Route table for the Goomba portal single-page app.
//!
//! This crate is framework-agnostic: it owns the route descriptors, the path
//! matcher used to resolve locations, and the deferred-loading indirection
//! with its per-route load cache. The Dioxus frontend in `portal-ui` consumes
//! [`portal_routes`] to title pages and to load deferred views.
//!
//! ```
//! use portal_routes::{portal_routes, NOT_FOUND};
//!
//! let resolved = portal_routes().resolve("/does/not/exist").unwrap();
//! assert_eq!(resolved.name(), NOT_FOUND);
//! assert_eq!(resolved.title(), Some("404 Not Found"));
//! ```

pub mod component;
pub mod pattern;
pub mod portal;
pub mod query;
pub mod route;

pub use component::{ComponentRef, DeferredComponent, LoadError, Loader};
pub use pattern::{ParamValue, Params, PathPattern, PatternError};
pub use portal::{portal_route_table, portal_routes, View, HOME, NOT_FOUND, SPOTIFY_CALLBACK};
pub use query::{parse_query, Query};
pub use route::{ResolvedRoute, RouteDescriptor, RouteMeta, RouteTable, RouteTableError};
