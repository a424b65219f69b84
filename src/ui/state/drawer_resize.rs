// SPDX-License-Identifier: MPL-2.0
//! Drawer resize state
//!
//! Tracks a drag on a bottom drawer's handle. Dragging up grows the drawer,
//! dragging down shrinks it, and releasing it short enough closes it.

use crate::config::{DRAWER_CLOSE_THRESHOLD, DRAWER_MAX_HEIGHT, DRAWER_MIN_HEIGHT};

/// What to do with the drawer when the drag ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    /// Keep the drawer open at this height.
    Height(f32),
    /// The drawer was dragged below the close threshold.
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Grab {
    start_y: f32,
    start_height: f32,
    /// Unclamped height following the pointer.
    raw_height: f32,
}

/// Manages a drawer handle drag
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerResize {
    pub min: f32,
    pub max: f32,
    pub close_threshold: f32,
    grab: Option<Grab>,
}

impl Default for DrawerResize {
    fn default() -> Self {
        Self::new(DRAWER_MIN_HEIGHT, DRAWER_MAX_HEIGHT)
    }
}

impl DrawerResize {
    #[must_use]
    pub fn new(min: f32, max: f32) -> Self {
        Self {
            min,
            max: max.max(min),
            close_threshold: DRAWER_CLOSE_THRESHOLD.min(min),
            grab: None,
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }

    /// Starts a drag at pointer `y` on a drawer currently `height` tall.
    pub fn start(&mut self, y: f32, height: f32) {
        self.grab = Some(Grab {
            start_y: y,
            start_height: height,
            raw_height: height,
        });
    }

    /// Moves the pointer to `y` and returns the clamped drawer height.
    ///
    /// Returns `None` when no drag is active.
    pub fn drag_to(&mut self, y: f32) -> Option<f32> {
        let grab = self.grab.as_mut()?;
        // Screen y grows downward, so moving up makes the drawer taller.
        grab.raw_height = grab.start_height + (grab.start_y - y);
        Some(grab.raw_height.clamp(self.min, self.max))
    }

    /// Ends the drag. `None` if no drag was active.
    pub fn end(&mut self) -> Option<Release> {
        let grab = self.grab.take()?;
        if grab.raw_height < self.close_threshold {
            Some(Release::Close)
        } else {
            Some(Release::Height(grab.raw_height.clamp(self.min, self.max)))
        }
    }
}
