// SPDX-License-Identifier: MPL-2.0
//! Display surface the controller hands toasts to.

use super::notification::{Notification, ToastKey};
use serde::{Deserialize, Serialize};

/// Screen corner the toast stack is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

impl Anchor {
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, Anchor::TopLeft | Anchor::TopRight)
    }

    #[must_use]
    pub fn is_left(self) -> bool {
        matches!(self, Anchor::TopLeft | Anchor::BottomLeft)
    }
}

/// Receives show/hide requests for individual toasts.
///
/// The controller calls `show` when an entry takes a slot and `hide` when a
/// visible entry closes. Queued entries never reach the surface.
pub trait Surface {
    fn show(&mut self, key: ToastKey, notification: &Notification, anchor: Anchor);
    fn hide(&mut self, key: ToastKey);
}

/// Surface that only logs. Iced hosts render from `Controller::visible`
/// instead, so they need no other surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSurface;

impl Surface for TracingSurface {
    fn show(&mut self, key: ToastKey, notification: &Notification, anchor: Anchor) {
        tracing::debug!(
            %key,
            severity = ?notification.severity(),
            ?anchor,
            "toast shown"
        );
    }

    fn hide(&mut self, key: ToastKey) {
        tracing::debug!(%key, "toast hidden");
    }
}
