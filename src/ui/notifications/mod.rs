// SPDX-License-Identifier: MPL-2.0
//! Toast notification stack.
//!
//! A bounded stack of transient messages. At most three toasts (by default)
//! are visible; further requests wait in a FIFO queue and take the first slot
//! that frees up. Plain toasts close themselves after a delay, toasts with an
//! action stay until the user acts or closes them.
//!
//! # Components
//!
//! - [`controller`] - `Controller` owning the visible stack, queue and timers
//! - [`notification`] - `Notification`, `Severity`, `DisplayOptions`, `ToastKey`
//! - [`timer`] - `Timer` seam with a clock-driven `DeadlineTimer`
//! - [`surface`] - `Surface` seam receiving show/hide calls
//! - [`toast`] - Iced widgets rendering the visible stack
//!
//! # Usage
//!
//! ```ignore
//! let mut toasts = Controller::default();
//! let key = toasts.display_success("Saved", DisplayOptions::new());
//!
//! // On each `Message::Tick` from a `time::every` subscription:
//! toasts.tick();
//!
//! // In the view:
//! let overlay = toast::view_overlay(&toasts, &i18n).map(Message::Toast);
//! ```

pub mod controller;
pub mod notification;
pub mod surface;
pub mod timer;
pub mod toast;

pub use controller::{Controller, Entry, Message as NotificationMessage};
pub use notification::{
    Action, DisplayOptions, Lifecycle, Notification, Severity, ToastKey,
};
pub use surface::{Anchor, Surface, TracingSurface};
pub use timer::{Clock, DeadlineTimer, ManualClock, SystemClock, Timer, TimerHandle};
