// SPDX-License-Identifier: MPL-2.0
//! Interactive gallery application.
//!
//! Shows the breadcrumb trail over a navigation forest, lets the user push
//! toasts of every severity, and hosts the smaller components. The toast
//! controller is polled from a 100 ms tick subscription.

mod sample;

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::breadcrumbs::{self, build_segments, forest, NavigationNode};
use crate::ui::components::{avatar::Avatar, badge, progress, AvatarSize, BadgeSize, CircularProgress};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{
    toast, Controller, DeadlineTimer, NotificationMessage, Severity, TracingSurface,
};
use crate::ui::state::{Disclosure, DrawerResize, Release};
use crate::ui::styles::{self, Variant};
use crate::ui::theming::AppTheme;
use iced::widget::{button, mouse_area, Column, Container, Row, Stack, Text};
use iced::{alignment, event, mouse, time, window, Element, Length, Subscription, Task, Theme};
use std::cell::Cell;
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
const TICK_INTERVAL_MS: u64 = 100;
const PROGRESS_STEP: f32 = 2.0;
const DRAWER_DEFAULT_HEIGHT: f32 = 240.0;
const BADGE_MAX: u32 = 9;

/// Launch options parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub lang: Option<String>,
    pub config_dir: Option<PathBuf>,
    pub navigation: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Breadcrumbs(breadcrumbs::Message),
    Toast(NotificationMessage),
    Show(Severity),
    ShowWithAction,
    ClearToasts,
    Tick(Instant),
    RestartProgress,
    ToggleDisclosure,
    DisclosureHovered(bool),
    ToggleDrawer,
    DrawerGrab,
    PointerMoved(f32),
    PointerReleased,
}

pub struct App {
    i18n: I18n,
    theme: AppTheme,
    forest: Vec<NavigationNode>,
    current_path: String,
    breadcrumbs: breadcrumbs::State,
    toasts: Controller<DeadlineTimer, TracingSurface>,
    toast_count: u32,
    undo_count: Rc<Cell<u32>>,
    progress: f32,
    disclosure: Disclosure,
    drawer: DrawerResize,
    drawer_open: bool,
    drawer_height: f32,
    cursor_y: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current_path", &self.current_path)
            .field("visible_toasts", &self.toasts.visible_count())
            .field("queued_toasts", &self.toasts.queued_count())
            .finish_non_exhaustive()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced calls boot through `Fn`; the flags are only consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir);
        let i18n = I18n::new(flags.lang, &config);
        let mut toasts =
            Controller::from_config(&config.notifications, DeadlineTimer::new(), TracingSurface);

        let mut warnings: Vec<String> = config_warning.into_iter().collect();
        let forest = match flags.navigation.as_deref() {
            Some(path) => forest::load_from_path(path).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), error = %err, "using sample navigation");
                warnings.push(err.warning_key().to_string());
                sample::forest()
            }),
            None => sample::forest(),
        };

        for key in warnings {
            let options = toasts.options();
            toasts.display_warning(i18n.tr(&key), options);
        }

        let current_path = sample::initial_path(&forest);
        tracing::info!(%current_path, locale = %i18n.current_locale(), "gallery started");

        let app = App {
            i18n,
            theme: AppTheme::new(config.general.theme_mode),
            forest,
            current_path,
            breadcrumbs: breadcrumbs::State::default(),
            toasts,
            toast_count: 0,
            undo_count: Rc::new(Cell::new(0)),
            progress: 0.0,
            disclosure: Disclosure::default(),
            drawer: DrawerResize::default(),
            drawer_open: false,
            drawer_height: DRAWER_DEFAULT_HEIGHT,
            cursor_y: 0.0,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let ticking = self.toasts.has_notifications() || self.progress < 100.0;
        let tick = if ticking {
            time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
        } else {
            Subscription::none()
        };
        let pointer = if self.drawer_open {
            event::listen_with(pointer_event)
        } else {
            Subscription::none()
        };
        Subscription::batch([tick, pointer])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Breadcrumbs(message) => {
                if let breadcrumbs::Event::Navigate(path) =
                    breadcrumbs::update(message, &mut self.breadcrumbs)
                {
                    tracing::debug!(%path, "navigate");
                    self.current_path = path;
                }
            }
            Message::Toast(message) => {
                let undone = self.undo_count.get();
                self.toasts.handle_message(&message);
                if self.undo_count.get() > undone {
                    let options = self.toasts.options();
                    self.toasts
                        .display_success(self.i18n.tr("gallery-undo-done"), options);
                }
            }
            Message::Show(severity) => {
                self.toast_count += 1;
                let text = self.toast_text();
                let options = self.toasts.options();
                self.toasts.display(text, options, severity);
            }
            Message::ShowWithAction => {
                self.toast_count += 1;
                let text = self.toast_text();
                let undo = Rc::clone(&self.undo_count);
                let options = self
                    .toasts
                    .options()
                    .with_action(self.i18n.tr("gallery-action-undo"), move || {
                        undo.set(undo.get() + 1);
                    });
                self.toasts.display_info(text, options);
            }
            Message::ClearToasts => self.toasts.dispose(),
            Message::Tick(_) => {
                self.toasts.tick();
                if self.progress < 100.0 {
                    self.progress = (self.progress + PROGRESS_STEP).min(100.0);
                }
            }
            Message::RestartProgress => self.progress = 0.0,
            Message::ToggleDisclosure => {
                self.disclosure.toggle();
            }
            Message::DisclosureHovered(true) => self.disclosure.hover(),
            Message::DisclosureHovered(false) => self.disclosure.unhover(),
            Message::ToggleDrawer => {
                self.drawer_open = !self.drawer_open;
                self.drawer_height = DRAWER_DEFAULT_HEIGHT;
            }
            Message::DrawerGrab => self.drawer.start(self.cursor_y, self.drawer_height),
            Message::PointerMoved(y) => {
                self.cursor_y = y;
                if let Some(height) = self.drawer.drag_to(y) {
                    self.drawer_height = height;
                }
            }
            Message::PointerReleased => match self.drawer.end() {
                Some(Release::Height(height)) => self.drawer_height = height,
                Some(Release::Close) => {
                    self.drawer_open = false;
                    self.drawer_height = DRAWER_DEFAULT_HEIGHT;
                }
                None => {}
            },
        }
        Task::none()
    }

    fn toast_text(&self) -> String {
        let count = self.toast_count.to_string();
        self.i18n
            .tr_with_args("gallery-toast-count", &[("count", count.as_str())])
    }

    fn view(&self) -> Element<'_, Message> {
        let segments = build_segments(&self.forest, &self.current_path);
        let trail = breadcrumbs::view(breadcrumbs::ViewContext {
            i18n: &self.i18n,
            segments: &segments,
            state: &self.breadcrumbs,
        })
        .map(Message::Breadcrumbs);

        let current = Text::new(self.i18n.tr_with_args(
            "gallery-current-path",
            &[("path", self.current_path.as_str())],
        ))
        .size(typography::BODY_SM);

        let content = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(section(
                self.i18n.tr("gallery-section-breadcrumbs"),
                Column::new()
                    .spacing(spacing::XS)
                    .push(trail)
                    .push(current)
                    .into(),
            ))
            .push(section(
                self.i18n.tr("gallery-section-notifications"),
                self.notifications_panel(),
            ))
            .push(section(
                self.i18n.tr("gallery-section-components"),
                self.components_panel(),
            ));

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(content);

        if self.drawer_open {
            layers = layers.push(self.drawer_view());
        }

        layers
            .push(toast::view_overlay(&self.toasts, &self.i18n).map(Message::Toast))
            .into()
    }

    fn notifications_panel(&self) -> Element<'_, Message> {
        let buttons = Row::new()
            .spacing(spacing::XS)
            .push(action_button(
                self.i18n.tr("gallery-show-info"),
                Message::Show(Severity::Info),
                Variant::Secondary,
            ))
            .push(action_button(
                self.i18n.tr("gallery-show-success"),
                Message::Show(Severity::Success),
                Variant::Secondary,
            ))
            .push(action_button(
                self.i18n.tr("gallery-show-warning"),
                Message::Show(Severity::Warning),
                Variant::Secondary,
            ))
            .push(action_button(
                self.i18n.tr("gallery-show-error"),
                Message::Show(Severity::Error),
                Variant::Danger,
            ))
            .push(action_button(
                self.i18n.tr("gallery-show-action"),
                Message::ShowWithAction,
                Variant::Primary,
            ))
            .push(action_button(
                self.i18n.tr("gallery-clear"),
                Message::ClearToasts,
                Variant::Ghost,
            ));

        let visible = self.toasts.visible_count().to_string();
        let queued = self.toasts.queued_count().to_string();
        let status = Text::new(self.i18n.tr_with_args(
            "gallery-status",
            &[("visible", visible.as_str()), ("queued", queued.as_str())],
        ))
        .size(typography::BODY_SM);

        let mut header = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(status);
        if let Some(badge) = badge::view(self.toast_count, BADGE_MAX, BadgeSize::Medium) {
            header = header.push(badge);
        }

        Column::new()
            .spacing(spacing::SM)
            .push(buttons)
            .push(header)
            .into()
    }

    fn components_panel(&self) -> Element<'_, Message> {
        let avatars = [
            ("Ada Lovelace", AvatarSize::Small),
            ("Grace Hopper", AvatarSize::Medium),
            ("Alan Turing", AvatarSize::Large),
            ("Edsger Wybe Dijkstra", AvatarSize::XLarge),
        ]
        .into_iter()
        .fold(
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center),
            |row: Row<'_, Message>, (name, size)| row.push(Avatar::new(name).size(size).view()),
        );

        let value = self.progress.round().to_string();
        let progress_row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(CircularProgress::default().view(self.progress))
            .push(
                Container::new(progress::linear(self.progress)).width(Length::Fixed(sizing::TOAST_WIDTH)),
            )
            .push(
                button(Text::new(self.i18n.tr_with_args(
                    "gallery-progress",
                    &[("value", value.as_str())],
                )))
                .on_press(Message::RestartProgress)
                .style(styles::button::link),
            );

        let header_style = if self.disclosure.hovered {
            Variant::Secondary
        } else {
            Variant::Ghost
        };
        let disclosure_header = mouse_area(
            button(Text::new(format!(
                "{} {}",
                self.disclosure.chevron(),
                self.i18n.tr("gallery-disclosure-title")
            )))
            .on_press(Message::ToggleDisclosure)
            .style(styles::button::variant(header_style)),
        )
        .on_enter(Message::DisclosureHovered(true))
        .on_exit(Message::DisclosureHovered(false));

        let mut disclosure = Column::new().spacing(spacing::XXS).push(disclosure_header);
        if self.disclosure.open {
            disclosure = disclosure.push(
                Text::new(self.i18n.tr("gallery-disclosure-body")).size(typography::BODY_SM),
            );
        }

        Column::new()
            .spacing(spacing::MD)
            .push(avatars)
            .push(progress_row)
            .push(disclosure)
            .push(action_button(
                self.i18n.tr("gallery-drawer-toggle"),
                Message::ToggleDrawer,
                Variant::Secondary,
            ))
            .into()
    }

    fn drawer_view(&self) -> Element<'_, Message> {
        let handle = mouse_area(
            Container::new(Text::new("═").size(typography::BODY))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::DRAWER_HANDLE))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        )
        .on_press(Message::DrawerGrab)
        .interaction(mouse::Interaction::ResizingVertically);

        let sheet = Container::new(
            Column::new()
                .spacing(spacing::SM)
                .push(handle)
                .push(Text::new(self.i18n.tr("gallery-drawer-title")).size(typography::BODY)),
        )
        .width(Length::Fill)
        .height(Length::Fixed(self.drawer_height))
        .padding(spacing::SM)
        .style(styles::container::sheet);

        Container::new(sheet)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(alignment::Vertical::Bottom)
            .into()
    }
}

fn section<'a>(title: String, body: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(body)
        .into()
}

fn action_button<'a>(label: String, message: Message, variant: Variant) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::variant(variant))
        .into()
}

fn pointer_event(
    event: iced::Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match event {
        iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position.y))
        }
        iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        _ => None,
    }
}
