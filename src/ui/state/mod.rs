// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Interaction state kept apart from rendering, so it can be driven and
//! tested without a window.

pub mod disclosure;
pub mod drawer_resize;

pub use disclosure::Disclosure;
pub use drawer_resize::{DrawerResize, Release};
