// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes its state, a `Message` enum, an `update` and a `view`.
//!
//! # Features
//!
//! - [`breadcrumbs`] - Ancestor trail with sibling dropdowns
//! - [`notifications`] - Bounded toast stack with auto-hide
//! - [`components`] - Avatar, badge and progress indicators
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Window-free interaction state (disclosure, drawer resize)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod breadcrumbs;
pub mod components;
pub mod design_tokens;
pub mod notifications;
pub mod state;
pub mod styles;
pub mod theming;
