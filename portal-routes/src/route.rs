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

//! Route descriptors and the ordered route table.
//!
//! The table is built once and never mutated. Resolution walks the entries in
//! declaration order and returns the first match, so a catch-all entry is only
//! accepted in last position.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashSet};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::component::{ComponentRef, LoadError, Loader};
use crate::pattern::{Params, PathPattern, PatternError};
use crate::query::{parse_query, Query};

/// Errors raised while building or navigating a [`RouteTable`].
#[derive(Debug, Clone, Error)]
pub enum RouteTableError {
    #[error("route table has no entries")]
    Empty,

    #[error("route name `{0}` is declared more than once")]
    DuplicateName(String),

    #[error("catch-all route `{name}` at position {index} would shadow the routes after it")]
    CatchAllNotLast { name: String, index: usize },

    #[error("no route named `{0}`")]
    UnknownName(String),

    #[error(transparent)]
    Pattern(#[from] PatternError),
}

/// Auxiliary data attached to a route. Read by the hosting app, never by the
/// table itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl RouteMeta {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            extra: BTreeMap::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        match key {
            "title" => self.title.clone().map(Value::String),
            _ => self.extra.get(key).cloned(),
        }
    }
}

/// Binds a path pattern to a view and its metadata.
#[derive(Debug)]
pub struct RouteDescriptor<V> {
    pub path: PathPattern,
    pub name: String,
    pub component: ComponentRef<V>,
    pub meta: RouteMeta,
}

impl<V> RouteDescriptor<V> {
    pub fn eager(path: &str, name: impl Into<String>, view: V) -> Result<Self, PatternError> {
        Self::new(path, name, ComponentRef::Eager(view))
    }

    pub fn deferred(
        path: &str,
        name: impl Into<String>,
        loader: Loader<V>,
    ) -> Result<Self, PatternError> {
        Self::new(path, name, ComponentRef::deferred(loader))
    }

    fn new(
        path: &str,
        name: impl Into<String>,
        component: ComponentRef<V>,
    ) -> Result<Self, PatternError> {
        Ok(Self {
            path: PathPattern::parse(path)?,
            name: name.into(),
            component,
            meta: RouteMeta::default(),
        })
    }

    pub fn with_meta(mut self, meta: RouteMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.meta.title.as_deref()
    }
}

impl<V: Clone> RouteDescriptor<V> {
    /// Resolves the view, loading it first if it is deferred and not cached.
    pub async fn load(&self) -> Result<V, LoadError> {
        if !self.component.is_loaded() {
            debug!("loading deferred view for route `{}`", self.name);
        }
        self.component.resolve().await.inspect_err(|err| {
            warn!("route `{}`: {err}", self.name);
        })
    }
}

/// The result of resolving a location against a [`RouteTable`].
#[derive(Debug)]
pub struct ResolvedRoute<'a, V> {
    pub route: &'a RouteDescriptor<V>,
    pub path: String,
    pub params: Params,
    pub query: Query,
    pub hash: Option<String>,
}

impl<'a, V> ResolvedRoute<'a, V> {
    pub fn name(&self) -> &'a str {
        &self.route.name
    }

    pub fn title(&self) -> Option<&'a str> {
        self.route.title()
    }

    /// First value of a query param.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

/// Ordered, immutable sequence of route descriptors.
#[derive(Debug)]
pub struct RouteTable<V> {
    routes: Vec<RouteDescriptor<V>>,
}

impl<V> RouteTable<V> {
    pub fn new(routes: Vec<RouteDescriptor<V>>) -> Result<Self, RouteTableError> {
        if routes.is_empty() {
            return Err(RouteTableError::Empty);
        }

        let mut names = HashSet::new();
        for route in &routes {
            if !names.insert(route.name.as_str()) {
                return Err(RouteTableError::DuplicateName(route.name.clone()));
            }
        }

        let last = routes.len() - 1;
        if let Some((index, route)) = routes
            .iter()
            .enumerate()
            .find(|(index, route)| route.path.is_catch_all() && *index != last)
        {
            return Err(RouteTableError::CatchAllNotLast {
                name: route.name.clone(),
                index,
            });
        }

        Ok(Self { routes })
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor<V>> {
        self.routes.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|route| route.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&RouteDescriptor<V>> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// Resolves `location` (path with optional `?query` and `#hash`) to the
    /// first matching entry.
    pub fn resolve(&self, location: &str) -> Option<ResolvedRoute<'_, V>> {
        let (rest, hash) = match location.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash.to_string())),
            None => (location, None),
        };
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
        let path = if path.starts_with('/') {
            Cow::Borrowed(path)
        } else {
            Cow::Owned(format!("/{path}"))
        };

        let resolved = self.routes.iter().find_map(|route| {
            route.path.matches(&path).map(|params| ResolvedRoute {
                route,
                path: path.to_string(),
                params,
                query: parse_query(query),
                hash: hash.clone(),
            })
        });
        match &resolved {
            Some(resolved) => debug!("{location} resolved to route `{}`", resolved.name()),
            None => debug!("{location} matched no route"),
        }
        resolved
    }

    /// Path for the named route, for programmatic navigation.
    pub fn path_for(&self, name: &str, params: &Params) -> Result<String, RouteTableError> {
        let route = self
            .get(name)
            .ok_or_else(|| RouteTableError::UnknownName(name.to_string()))?;
        Ok(route.path.build(params)?)
    }

    /// Document title for the named route: its `meta.title`, else `fallback`.
    pub fn document_title(&self, name: &str, fallback: &str) -> String {
        self.get(name)
            .and_then(RouteDescriptor::title)
            .unwrap_or(fallback)
            .to_string()
    }
}
