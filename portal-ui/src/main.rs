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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use dioxus::prelude::*;
use goomba_portal::components::config_error::ConfigError;
use goomba_portal::constants::{app_config, log_level};
use goomba_portal::routing::Route;

/// App root component
#[component]
fn App() -> Element {
    if let Err(e) = app_config() {
        log::error!("{e}");
        return rsx! {
            ConfigError { message: e }
        };
    }

    rsx! {
        Router::<Route> {}
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log_level());
    dioxus::launch(App);
}
