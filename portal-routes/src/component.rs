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

//! Eager and deferred view references.
//!
//! A deferred view is a zero-argument loader returning a future. The first
//! successful load is cached on the route entry, so a view is fetched at most
//! once no matter how often its route is visited.

use std::fmt;
use std::sync::OnceLock;

use futures::future::LocalBoxFuture;
use thiserror::Error;

/// Zero-argument deferred loader.
pub type Loader<V> = fn() -> LocalBoxFuture<'static, Result<V, LoadError>>;

/// A deferred view could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to load view: {0}")]
pub struct LoadError(pub String);

impl LoadError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Deferred view plus its load cache.
pub struct DeferredComponent<V> {
    loader: Loader<V>,
    cache: OnceLock<V>,
}

impl<V> DeferredComponent<V> {
    pub fn new(loader: Loader<V>) -> Self {
        Self {
            loader,
            cache: OnceLock::new(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.cache.get().is_some()
    }
}

impl<V: Clone> DeferredComponent<V> {
    pub fn loaded(&self) -> Option<V> {
        self.cache.get().cloned()
    }

    /// Returns the cached view, or runs the loader. Failures are not cached.
    pub async fn resolve(&self) -> Result<V, LoadError> {
        if let Some(view) = self.cache.get() {
            return Ok(view.clone());
        }
        let view = (self.loader)().await?;
        Ok(self.cache.get_or_init(|| view).clone())
    }
}

impl<V> fmt::Debug for DeferredComponent<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredComponent")
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

/// How a route reaches its view.
#[derive(Debug)]
pub enum ComponentRef<V> {
    Eager(V),
    Deferred(DeferredComponent<V>),
}

impl<V> ComponentRef<V> {
    pub fn deferred(loader: Loader<V>) -> Self {
        ComponentRef::Deferred(DeferredComponent::new(loader))
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, ComponentRef::Deferred(_))
    }

    /// Eager views count as loaded.
    pub fn is_loaded(&self) -> bool {
        match self {
            ComponentRef::Eager(_) => true,
            ComponentRef::Deferred(deferred) => deferred.is_loaded(),
        }
    }
}

impl<V: Clone> ComponentRef<V> {
    /// The view if it can be rendered without waiting.
    pub fn ready(&self) -> Option<V> {
        match self {
            ComponentRef::Eager(view) => Some(view.clone()),
            ComponentRef::Deferred(deferred) => deferred.loaded(),
        }
    }

    pub async fn resolve(&self) -> Result<V, LoadError> {
        match self {
            ComponentRef::Eager(view) => Ok(view.clone()),
            ComponentRef::Deferred(deferred) => deferred.resolve().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::FutureExt;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static LOADS: AtomicUsize = AtomicUsize::new(0);

    fn counted_loader() -> LocalBoxFuture<'static, Result<&'static str, LoadError>> {
        async {
            LOADS.fetch_add(1, Ordering::SeqCst);
            Ok("callback")
        }
        .boxed_local()
    }

    fn failing_loader() -> LocalBoxFuture<'static, Result<&'static str, LoadError>> {
        async { Err(LoadError::new("chunk missing")) }.boxed_local()
    }

    #[test]
    fn deferred_loads_once() {
        let component = ComponentRef::deferred(counted_loader);
        assert!(component.is_deferred());
        assert!(!component.is_loaded());
        assert_eq!(component.ready(), None);

        assert_eq!(block_on(component.resolve()), Ok("callback"));
        assert_eq!(block_on(component.resolve()), Ok("callback"));

        assert!(component.is_loaded());
        assert_eq!(component.ready(), Some("callback"));
        assert_eq!(LOADS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failed_load_is_not_cached() {
        let component = ComponentRef::deferred(failing_loader);
        let err = block_on(component.resolve()).unwrap_err();
        assert_eq!(err.to_string(), "failed to load view: chunk missing");
        assert!(!component.is_loaded());
    }

    #[test]
    fn eager_is_always_ready() {
        let component = ComponentRef::Eager("home");
        assert!(!component.is_deferred());
        assert!(component.is_loaded());
        assert_eq!(component.ready(), Some("home"));
        assert_eq!(block_on(component.resolve()), Ok("home"));
    }
}
