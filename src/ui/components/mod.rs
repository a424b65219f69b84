// SPDX-License-Identifier: MPL-2.0
//! Small presentational components.
//!
//! # Components
//!
//! - [`avatar`] - Initials in a colored circle
//! - [`badge`] - Capped count pill
//! - [`progress`] - Circular ring and linear bar

pub mod avatar;
pub mod badge;
pub mod progress;

pub use avatar::{Avatar, AvatarSize};
pub use badge::BadgeSize;
pub use progress::CircularProgress;
