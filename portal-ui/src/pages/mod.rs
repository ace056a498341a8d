// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod home;
pub mod not_found;
pub mod spotify_callback;
