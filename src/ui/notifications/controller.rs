// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The [`Controller`] bounds how many toasts are visible at once, queues the
//! rest in FIFO order, and closes toasts when their auto-hide timer expires.
//! A queued toast takes the first slot that frees up, one promotion per close.

use super::notification::{DisplayOptions, Lifecycle, Notification, Severity, ToastKey};
use super::surface::{Anchor, Surface, TracingSurface};
use super::timer::{DeadlineTimer, Timer, TimerHandle};
use crate::config::{NotificationsConfig, MAX_VISIBLE};
use std::collections::{HashMap, VecDeque};
use std::time::Duration;

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Close a toast (close button).
    Close(ToastKey),
    /// Run a toast's action, then close it.
    Activate(ToastKey),
    /// Check auto-hide timers.
    Tick,
}

/// A notification tracked by the controller.
#[derive(Debug)]
pub struct Entry {
    key: ToastKey,
    notification: Notification,
}

impl Entry {
    #[must_use]
    pub fn key(&self) -> ToastKey {
        self.key
    }

    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    fn finish(mut self) {
        if let Some(on_close) = self.notification.take_on_close() {
            on_close();
        }
    }
}

/// Owns the visible stack, the pending queue and the auto-hide timers.
#[derive(Debug)]
pub struct Controller<T: Timer = DeadlineTimer, S: Surface = TracingSurface> {
    /// Visible entries, oldest first.
    visible: VecDeque<Entry>,
    /// Entries waiting for a slot, oldest first.
    pending: VecDeque<Entry>,
    timers: HashMap<ToastKey, TimerHandle>,
    timer: T,
    surface: S,
    anchor: Anchor,
    max_visible: usize,
    default_auto_hide: Duration,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(DeadlineTimer::new(), TracingSurface)
    }
}

impl<T: Timer, S: Surface> Controller<T, S> {
    /// Creates a controller showing at most [`MAX_VISIBLE`] toasts.
    pub fn new(timer: T, surface: S) -> Self {
        Self::with_capacity(MAX_VISIBLE, timer, surface)
    }

    /// Creates a controller with a custom capacity (at least one).
    pub fn with_capacity(max_visible: usize, timer: T, surface: S) -> Self {
        Self {
            visible: VecDeque::new(),
            pending: VecDeque::new(),
            timers: HashMap::new(),
            timer,
            surface,
            anchor: Anchor::default(),
            max_visible: max_visible.max(1),
            default_auto_hide: DisplayOptions::default().auto_hide,
        }
    }

    /// Creates a controller from the `[notifications]` settings.
    pub fn from_config(config: &NotificationsConfig, timer: T, surface: S) -> Self {
        let mut controller = Self::with_capacity(config.max_visible(), timer, surface);
        controller.anchor = config.anchor;
        controller.default_auto_hide = config.auto_hide();
        controller
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Returns options pre-filled with this controller's auto-hide delay.
    #[must_use]
    pub fn options(&self) -> DisplayOptions {
        DisplayOptions::new().auto_hide(self.default_auto_hide)
    }

    /// Shows a notification, or queues it if every slot is taken.
    ///
    /// The key is returned either way so callers can close a queued toast
    /// before it ever shows.
    pub fn display(
        &mut self,
        message: impl Into<String>,
        options: DisplayOptions,
        severity: Severity,
    ) -> ToastKey {
        let key = self.unique_key();
        let entry = Entry {
            key,
            notification: Notification::new(severity, message, options),
        };

        if self.visible.len() < self.max_visible {
            self.show(entry);
        } else {
            tracing::debug!(%key, ?severity, queued = self.pending.len() + 1, "toast queued");
            self.pending.push_back(entry);
        }
        key
    }

    pub fn display_info(&mut self, message: impl Into<String>, options: DisplayOptions) -> ToastKey {
        self.display(message, options, Severity::Info)
    }

    pub fn display_success(
        &mut self,
        message: impl Into<String>,
        options: DisplayOptions,
    ) -> ToastKey {
        self.display(message, options, Severity::Success)
    }

    pub fn display_warning(
        &mut self,
        message: impl Into<String>,
        options: DisplayOptions,
    ) -> ToastKey {
        self.display(message, options, Severity::Warning)
    }

    pub fn display_error(&mut self, message: impl Into<String>, options: DisplayOptions) -> ToastKey {
        self.display(message, options, Severity::Error)
    }

    /// Closes a toast, visible or queued.
    ///
    /// Returns `false` for unknown or already closed keys. Closing a visible
    /// toast promotes at most one queued toast.
    pub fn close(&mut self, key: ToastKey) -> bool {
        if let Some(pos) = self.visible.iter().position(|e| e.key == key) {
            if let Some(entry) = self.visible.remove(pos) {
                self.cancel_timer(key);
                self.surface.hide(key);
                tracing::debug!(%key, "toast closed");
                entry.finish();
                self.promote();
            }
            return true;
        }

        // Queued toasts were never shown, so the surface is left alone.
        if let Some(pos) = self.pending.iter().position(|e| e.key == key) {
            if let Some(entry) = self.pending.remove(pos) {
                tracing::debug!(%key, "queued toast dropped");
                entry.finish();
            }
            return true;
        }

        false
    }

    /// Runs the action of a visible toast, then closes it.
    ///
    /// Returns `false` if the toast is not visible or has no action.
    pub fn activate(&mut self, key: ToastKey) -> bool {
        let Some(entry) = self.visible.iter_mut().find(|e| e.key == key) else {
            return false;
        };
        let Some(action) = entry.notification.action_mut() else {
            return false;
        };
        action.activate();
        self.close(key)
    }

    /// Closes every toast whose timer expired. Returns how many were closed.
    pub fn tick(&mut self) -> usize {
        let expired = self.timer.expired();
        let mut closed = 0;
        for key in expired {
            // The timer already fired; forget the handle before closing.
            self.timers.remove(&key);
            if self.close(key) {
                closed += 1;
            }
        }
        closed
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Close(key) => {
                self.close(*key);
            }
            Message::Activate(key) => {
                self.activate(*key);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Cancels every timer and drops all toasts without running callbacks.
    pub fn dispose(&mut self) {
        let live = self.visible.len() + self.pending.len();
        for (_, handle) in self.timers.drain() {
            self.timer.cancel(handle);
        }
        self.visible.clear();
        self.pending.clear();
        if live > 0 {
            tracing::debug!(dropped = live, "notification controller disposed");
        }
    }

    /// Returns the visible toasts, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Entry> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.pending.len()
    }

    /// Returns whether there are any toasts (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.pending.is_empty()
    }

    /// Returns where `key` is in its life, or `None` once closed or unknown.
    #[must_use]
    pub fn lifecycle(&self, key: ToastKey) -> Option<Lifecycle> {
        if self.visible.iter().any(|e| e.key == key) {
            Some(Lifecycle::Visible)
        } else if self.pending.iter().any(|e| e.key == key) {
            Some(Lifecycle::Queued)
        } else {
            None
        }
    }

    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    #[must_use]
    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn show(&mut self, entry: Entry) {
        let key = entry.key;
        if entry.notification.should_auto_hide() {
            let handle = self.timer.start(key, entry.notification.auto_hide());
            self.timers.insert(key, handle);
        }
        self.surface.show(key, &entry.notification, self.anchor);
        self.visible.push_back(entry);
    }

    fn promote(&mut self) {
        if self.visible.len() >= self.max_visible {
            return;
        }
        if let Some(entry) = self.pending.pop_front() {
            tracing::debug!(key = %entry.key, "queued toast promoted");
            self.show(entry);
        }
    }

    fn cancel_timer(&mut self, key: ToastKey) {
        if let Some(handle) = self.timers.remove(&key) {
            self.timer.cancel(handle);
        }
    }

    fn unique_key(&self) -> ToastKey {
        loop {
            let key = ToastKey::generate();
            if self.lifecycle(key).is_none() {
                return key;
            }
        }
    }
}

impl<T: Timer, S: Surface> Drop for Controller<T, S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::timer::ManualClock;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Show(String),
        Hide(ToastKey),
    }

    #[derive(Debug, Default)]
    struct RecordingSurface {
        calls: Vec<Call>,
    }

    impl Surface for RecordingSurface {
        fn show(&mut self, _key: ToastKey, notification: &Notification, _anchor: Anchor) {
            self.calls.push(Call::Show(notification.message().to_string()));
        }

        fn hide(&mut self, key: ToastKey) {
            self.calls.push(Call::Hide(key));
        }
    }

    type TestController = Controller<DeadlineTimer<ManualClock>, RecordingSurface>;

    fn controller() -> (TestController, ManualClock) {
        let clock = ManualClock::new();
        let controller = Controller::new(
            DeadlineTimer::with_clock(clock.clone()),
            RecordingSurface::default(),
        );
        (controller, clock)
    }

    fn sticky() -> DisplayOptions {
        DisplayOptions::new().auto_hide(Duration::ZERO)
    }

    fn visible_messages(controller: &TestController) -> Vec<String> {
        controller
            .visible()
            .map(|e| e.notification().message().to_string())
            .collect()
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        (count, move || seen.set(seen.get() + 1))
    }

    #[test]
    fn new_controller_is_empty() {
        let (controller, _) = controller();
        assert_eq!(controller.visible_count(), 0);
        assert_eq!(controller.queued_count(), 0);
        assert!(!controller.has_notifications());
        assert_eq!(controller.max_visible(), MAX_VISIBLE);
    }

    #[test]
    fn display_shows_immediately_when_slot_free() {
        let (mut controller, _) = controller();
        let key = controller.display_info("hello", sticky());

        assert_eq!(controller.lifecycle(key), Some(Lifecycle::Visible));
        assert_eq!(controller.surface().calls, vec![Call::Show("hello".into())]);
    }

    #[test]
    fn overflow_is_queued_without_surface_calls() {
        let (mut controller, _) = controller();
        let keys: Vec<ToastKey> = (0..5)
            .map(|i| controller.display_info(format!("n{i}"), sticky()))
            .collect();

        assert_eq!(controller.visible_count(), 3);
        assert_eq!(controller.queued_count(), 2);
        assert_eq!(controller.lifecycle(keys[3]), Some(Lifecycle::Queued));
        assert_eq!(controller.surface().calls.len(), 3);
    }

    #[test]
    fn close_promotes_exactly_one_in_call_order() {
        let (mut controller, _) = controller();
        let keys: Vec<ToastKey> = (0..5)
            .map(|i| controller.display_info(format!("n{i}"), sticky()))
            .collect();

        assert!(controller.close(keys[1]));
        assert_eq!(visible_messages(&controller), ["n0", "n2", "n3"]);
        assert_eq!(controller.queued_count(), 1);

        assert!(controller.close(keys[0]));
        assert_eq!(visible_messages(&controller), ["n2", "n3", "n4"]);
        assert_eq!(controller.queued_count(), 0);
    }

    #[test]
    fn free_slot_lets_late_request_jump_the_queue() {
        let (mut controller, _) = controller();
        let first = controller.display_info("a", sticky());
        controller.display_info("b", sticky());
        controller.close(first);
        controller.display_info("c", sticky());

        assert_eq!(visible_messages(&controller), ["b", "c"]);
    }

    #[test]
    fn close_fires_on_close_once_and_is_idempotent() {
        let (mut controller, _) = controller();
        let (count, callback) = counter();
        let key = controller.display_success("saved", sticky().on_close(callback));

        assert!(controller.close(key));
        assert!(!controller.close(key));
        assert_eq!(count.get(), 1);
        assert_eq!(controller.lifecycle(key), None);
    }

    #[test]
    fn close_hides_on_surface() {
        let (mut controller, _) = controller();
        let key = controller.display_info("bye", sticky());
        controller.close(key);
        assert_eq!(controller.surface().calls.last(), Some(&Call::Hide(key)));
    }

    #[test]
    fn closing_queued_entry_skips_surface() {
        let (mut controller, _) = controller();
        for i in 0..3 {
            controller.display_info(format!("v{i}"), sticky());
        }
        let (count, callback) = counter();
        let queued = controller.display_info("queued", sticky().on_close(callback));
        let calls_before = controller.surface().calls.len();

        assert!(controller.close(queued));
        assert_eq!(controller.queued_count(), 0);
        assert_eq!(controller.visible_count(), 3);
        assert_eq!(controller.surface().calls.len(), calls_before);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn closing_unknown_key_is_noop() {
        let (mut controller, _) = controller();
        controller.display_info("x", sticky());
        assert!(!controller.close(ToastKey::from_parts(0, 0)));
        assert_eq!(controller.visible_count(), 1);
    }

    #[test]
    fn auto_hide_closes_after_delay() {
        let (mut controller, clock) = controller();
        let (count, callback) = counter();
        let key = controller.display_info(
            "temporary",
            DisplayOptions::new().auto_hide_ms(2000).on_close(callback),
        );

        clock.advance(Duration::from_millis(1999));
        assert_eq!(controller.tick(), 0);
        assert_eq!(controller.lifecycle(key), Some(Lifecycle::Visible));

        clock.advance(Duration::from_millis(1));
        assert_eq!(controller.tick(), 1);
        assert_eq!(controller.lifecycle(key), None);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn action_suppresses_auto_hide() {
        let (mut controller, clock) = controller();
        let key = controller.display_warning(
            "undo?",
            DisplayOptions::new().auto_hide_ms(2000).with_action("Undo", || {}),
        );

        clock.advance(Duration::from_secs(60));
        assert_eq!(controller.tick(), 0);
        assert_eq!(controller.lifecycle(key), Some(Lifecycle::Visible));
        assert_eq!(controller.timer().pending(), 0);
    }

    #[test]
    fn manual_close_cancels_timer() {
        let (mut controller, clock) = controller();
        let key = controller.display_info("x", DisplayOptions::new().auto_hide_ms(1000));
        assert_eq!(controller.timer().pending(), 1);

        controller.close(key);
        assert_eq!(controller.timer().pending(), 0);

        clock.advance(Duration::from_secs(5));
        assert_eq!(controller.tick(), 0);
    }

    #[test]
    fn promoted_entry_starts_its_own_timer() {
        let (mut controller, clock) = controller();
        let first = controller.display_info("a", sticky());
        controller.display_info("b", sticky());
        controller.display_info("c", sticky());
        let late = controller.display_info("d", DisplayOptions::new().auto_hide_ms(500));

        // Time spent queued does not count.
        clock.advance(Duration::from_secs(10));
        assert_eq!(controller.tick(), 0);

        controller.close(first);
        assert_eq!(controller.lifecycle(late), Some(Lifecycle::Visible));

        clock.advance(Duration::from_millis(500));
        assert_eq!(controller.tick(), 1);
        assert_eq!(controller.lifecycle(late), None);
    }

    #[test]
    fn activate_runs_action_and_closes() {
        let (mut controller, _) = controller();
        let hits = Rc::new(Cell::new(0));
        let seen = Rc::clone(&hits);
        let key = controller.display_error(
            "failed",
            DisplayOptions::new().with_action("Retry", move || seen.set(seen.get() + 1)),
        );

        assert!(controller.activate(key));
        assert!(!controller.activate(key));
        assert_eq!(hits.get(), 1);
        assert_eq!(controller.visible_count(), 0);
    }

    #[test]
    fn activate_without_action_does_nothing() {
        let (mut controller, _) = controller();
        let key = controller.display_info("plain", sticky());
        assert!(!controller.activate(key));
        assert_eq!(controller.lifecycle(key), Some(Lifecycle::Visible));
    }

    #[test]
    fn dispose_cancels_timers_without_callbacks() {
        let (mut controller, clock) = controller();
        let (count, callback) = counter();
        for i in 0..4 {
            controller.display_info(format!("n{i}"), DisplayOptions::new().auto_hide_ms(100));
        }
        controller.display_info("cb", DisplayOptions::new().on_close(callback));

        controller.dispose();
        assert_eq!(controller.timer().pending(), 0);
        assert!(!controller.has_notifications());

        clock.advance(Duration::from_secs(1));
        assert_eq!(controller.tick(), 0);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn handle_message_dispatches() {
        let (mut controller, clock) = controller();
        let key = controller.display_info("x", sticky());
        controller.handle_message(&Message::Close(key));
        assert_eq!(controller.visible_count(), 0);

        controller.display_info("y", DisplayOptions::new().auto_hide_ms(10));
        clock.advance(Duration::from_millis(10));
        controller.handle_message(&Message::Tick);
        assert_eq!(controller.visible_count(), 0);
    }

    #[test]
    fn from_config_applies_capacity_anchor_and_delay() {
        let config = NotificationsConfig {
            max_visible: 1,
            auto_hide_ms: 750,
            anchor: Anchor::TopLeft,
        };
        let controller = Controller::from_config(
            &config,
            DeadlineTimer::with_clock(ManualClock::new()),
            RecordingSurface::default(),
        );
        assert_eq!(controller.max_visible(), 1);
        assert_eq!(controller.anchor(), Anchor::TopLeft);
        assert_eq!(controller.options().auto_hide, Duration::from_millis(750));
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let controller = Controller::with_capacity(
            0,
            DeadlineTimer::with_clock(ManualClock::new()),
            RecordingSurface::default(),
        );
        assert_eq!(controller.max_visible(), 1);
    }

    #[test]
    fn on_close_sees_callback_order() {
        let (mut controller, _) = controller();
        let order = Rc::new(RefCell::new(Vec::new()));
        let keys: Vec<ToastKey> = (0..2)
            .map(|i| {
                let log = Rc::clone(&order);
                controller.display_info(format!("n{i}"), sticky().on_close(move || log.borrow_mut().push(i)))
            })
            .collect();

        controller.close(keys[1]);
        controller.close(keys[0]);
        assert_eq!(*order.borrow(), vec![1, 0]);
    }
}
