// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: toast stack capacity and auto-hide duration
//! - **Breadcrumbs**: trail length before middle segments collapse
//! - **Drawer**: bottom drawer resize bounds

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Maximum number of toasts visible at once.
pub const MAX_VISIBLE: usize = 3;

/// Default auto-hide delay for a toast, in milliseconds. Zero disables it.
pub const DEFAULT_AUTO_HIDE_MS: u64 = 5000;

/// Upper bound accepted for the visible toast capacity.
pub const MAX_VISIBLE_LIMIT: usize = 10;

// ==========================================================================
// Breadcrumb Defaults
// ==========================================================================

/// Longest trail rendered in full. Longer trails keep the first and the last
/// two segments and fold the rest behind an ellipsis.
pub const BREADCRUMB_COLLAPSE_AFTER: usize = 4;

// ==========================================================================
// Drawer Defaults
// ==========================================================================

/// Smallest height a drawer can be dragged to before it snaps closed.
pub const DRAWER_MIN_HEIGHT: f32 = 120.0;

/// Largest height a drawer can be dragged to.
pub const DRAWER_MAX_HEIGHT: f32 = 640.0;

/// Releasing a drag below this height closes the drawer.
pub const DRAWER_CLOSE_THRESHOLD: f32 = 80.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MAX_VISIBLE > 0);
    assert!(MAX_VISIBLE <= MAX_VISIBLE_LIMIT);

    // First + ellipsis + last two must hide at least one segment.
    assert!(BREADCRUMB_COLLAPSE_AFTER >= 3);

    assert!(DRAWER_MIN_HEIGHT > 0.0);
    assert!(DRAWER_MAX_HEIGHT > DRAWER_MIN_HEIGHT);
    assert!(DRAWER_CLOSE_THRESHOLD < DRAWER_MIN_HEIGHT);
};
