// SPDX-License-Identifier: MPL-2.0
//! `iced_trellis` is a small design-system toolkit for the Iced GUI framework.
//!
//! It resolves breadcrumb trails from a navigation forest, manages a bounded
//! stack of toast notifications with auto-hide timers, and ships the tokens,
//! styles and presentational components they are drawn with. The
//! `trellis-gallery` binary shows everything in one window.

#![doc(html_root_url = "https://docs.rs/iced_trellis/0.1.0")]

pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;
