// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A [`Notification`] is what a call site asks the controller to show: a
//! message, a [`Severity`], and [`DisplayOptions`] (action button, close
//! callback, auto-hide delay). The controller wraps each one in an entry
//! identified by a [`ToastKey`].

use crate::config::DEFAULT_AUTO_HIDE_MS;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::time::Duration;

/// Identifier handed back by `display`, used to close a toast later.
///
/// Built from the wall-clock time in milliseconds plus a random tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastKey {
    timestamp_ms: i64,
    nonce: u32,
}

impl ToastKey {
    /// Generates a fresh key from the current time.
    #[must_use]
    pub fn generate() -> Self {
        Self {
            timestamp_ms: chrono::Utc::now().timestamp_millis(),
            nonce: rand::random(),
        }
    }

    /// Builds a key from its parts.
    #[must_use]
    pub fn from_parts(timestamp_ms: i64, nonce: u32) -> Self {
        Self {
            timestamp_ms,
            nonce,
        }
    }

    #[must_use]
    pub fn timestamp_ms(&self) -> i64 {
        self.timestamp_ms
    }
}

impl fmt::Display for ToastKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:08x}", self.timestamp_ms, self.nonce)
    }
}

/// Where a live entry is in its life. Closed entries are forgotten, so
/// lookups on them return nothing instead of a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Waiting for a free slot.
    Queued,
    /// Currently shown.
    Visible,
}

/// Severity level determines the accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Glyph shown before the message.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Info => "ℹ",
            Severity::Success => "✓",
            Severity::Warning | Severity::Error => "⚠",
        }
    }
}

/// Button rendered inside a toast. Activating it closes the toast.
pub struct Action {
    label: String,
    on_activate: Box<dyn FnMut()>,
}

impl Action {
    pub fn new(label: impl Into<String>, on_activate: impl FnMut() + 'static) -> Self {
        Self {
            label: label.into(),
            on_activate: Box::new(on_activate),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn activate(&mut self) {
        (self.on_activate)();
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Optional behavior attached to a notification.
pub struct DisplayOptions {
    pub(crate) action: Option<Action>,
    pub(crate) on_close: Option<Box<dyn FnOnce()>>,
    pub(crate) auto_hide: Duration,
}

impl DisplayOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an action button. A toast with an action never auto-hides.
    #[must_use]
    pub fn with_action(mut self, label: impl Into<String>, on_activate: impl FnMut() + 'static) -> Self {
        self.action = Some(Action::new(label, on_activate));
        self
    }

    /// Registers a callback invoked once when the toast is closed.
    #[must_use]
    pub fn on_close(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    /// Sets the auto-hide delay. `Duration::ZERO` keeps the toast until closed.
    #[must_use]
    pub fn auto_hide(mut self, duration: Duration) -> Self {
        self.auto_hide = duration;
        self
    }

    /// Sets the auto-hide delay in milliseconds.
    #[must_use]
    pub fn auto_hide_ms(self, millis: u64) -> Self {
        self.auto_hide(Duration::from_millis(millis))
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            action: None,
            on_close: None,
            auto_hide: Duration::from_millis(DEFAULT_AUTO_HIDE_MS),
        }
    }
}

impl fmt::Debug for DisplayOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayOptions")
            .field("action", &self.action)
            .field("on_close", &self.on_close.is_some())
            .field("auto_hide", &self.auto_hide)
            .finish()
    }
}

/// A notification to be displayed to the user.
#[derive(Debug)]
pub struct Notification {
    message: String,
    severity: Severity,
    options: DisplayOptions,
}

impl Notification {
    pub fn new(severity: Severity, message: impl Into<String>, options: DisplayOptions) -> Self {
        Self {
            message: message.into(),
            severity,
            options,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn action(&self) -> Option<&Action> {
        self.options.action.as_ref()
    }

    #[must_use]
    pub fn auto_hide(&self) -> Duration {
        self.options.auto_hide
    }

    /// Returns whether a timer should close this notification.
    ///
    /// An action button suppresses auto-hide whatever the delay: the user is
    /// expected to drive dismissal.
    #[must_use]
    pub fn should_auto_hide(&self) -> bool {
        !self.options.auto_hide.is_zero() && self.options.action.is_none()
    }

    pub(crate) fn action_mut(&mut self) -> Option<&mut Action> {
        self.options.action.as_mut()
    }

    pub(crate) fn take_on_close(&mut self) -> Option<Box<dyn FnOnce()>> {
        self.options.on_close.take()
    }
}
