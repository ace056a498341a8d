// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod config_error;
pub mod layout;
pub mod load_failed;
pub mod route_view;
