// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for goomba-portal component tests.
//
// Provides mount/cleanup helpers, URL and runtime-config injection, and a
// Dioxus rendering helper so that individual test files stay focused on
// assertions.
#![allow(dead_code)]

use dioxus::prelude::*;
use wasm_bindgen_futures::JsFuture;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Point the browser at `url` so the router picks the matching route.
pub fn push_url(url: &str) {
    let _ = gloo_utils::window()
        .history()
        .unwrap()
        .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url));
}

// ---------------------------------------------------------------------------
// Dioxus rendering helper
// ---------------------------------------------------------------------------

/// Render a Dioxus component into the given mount element.
pub fn render_into(mount: &web_sys::Element, root: fn() -> Element) {
    let cfg = dioxus::web::Config::new().rootelement(mount.clone());
    dioxus::web::launch::launch_virtual_dom(VirtualDom::new(root), cfg);
}

/// Full app shell: the router over the portal routes.
pub fn app_shell() -> Element {
    rsx! {
        Router::<goomba_portal::routing::Route> {}
    }
}

async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        gloo_utils::window()
            .request_animation_frame(&resolve)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

/// Yield to the browser event loop so Dioxus can render and deferred views
/// can resolve.
pub async fn yield_now() {
    next_frame().await;
    next_frame().await;
    next_frame().await;
}

// ---------------------------------------------------------------------------
// Runtime config injection
// ---------------------------------------------------------------------------

/// Inject a `window.__APP_CONFIG` object.
pub fn inject_app_config(app_name: &str, log_level: &str) {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &"appName".into(), &app_name.into()).unwrap();
    js_sys::Reflect::set(&config, &"logLevel".into(), &log_level.into()).unwrap();
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &config).unwrap();
}

/// Inject a `window.__APP_CONFIG` whose fields have the wrong types.
pub fn inject_malformed_app_config() {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &"appName".into(), &wasm_bindgen::JsValue::from(42)).unwrap();
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &config).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}
