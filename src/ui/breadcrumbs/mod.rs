// SPDX-License-Identifier: MPL-2.0
//! Breadcrumb trail with sibling dropdowns.
//!
//! The trail is computed by [`build_segments`] from the navigation forest and
//! the current path, then rendered by [`view`]. Segments whose level holds
//! other entries get a dropdown toggle listing those siblings. Trails longer
//! than [`BREADCRUMB_COLLAPSE_AFTER`] fold their middle behind "…".
//!
//! # Usage
//!
//! ```ignore
//! use iced_trellis::ui::breadcrumbs::{self, build_segments};
//!
//! let segments = build_segments(&forest, &current_path);
//! let trail = breadcrumbs::view(breadcrumbs::ViewContext {
//!     i18n: &self.i18n,
//!     segments: &segments,
//!     state: &self.breadcrumbs,
//! })
//! .map(Message::Breadcrumbs);
//! ```

pub mod forest;
mod resolver;

pub use resolver::{build_segments, find_ancestor_chain, NavigationNode, PathSegment};

use crate::config::BREADCRUMB_COLLAPSE_AFTER;
use crate::i18n::I18n;
use crate::ui::design_tokens::{border, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, container, text, tooltip, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Which segment's dropdown is open, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    pub open_menu: Option<usize>,
}

/// Messages emitted by the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Navigate(String),
    ToggleMenu(usize),
    CloseMenu,
}

/// Events propagated to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(String),
}

/// Contextual data needed to render the trail.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub segments: &'a [PathSegment<'a>],
    pub state: &'a State,
}

/// One position of the rendered trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The segment at this index.
    Segment(usize),
    /// Every segment between the first and the last two.
    Collapsed,
}

/// Lays out a trail of `len` segments.
///
/// Up to `collapse_after` segments (never less than 3) are shown in full.
/// Past that only the first and the last two remain.
#[must_use]
pub fn layout(len: usize, collapse_after: usize) -> Vec<Slot> {
    if len <= collapse_after.max(3) {
        return (0..len).map(Slot::Segment).collect();
    }
    vec![
        Slot::Segment(0),
        Slot::Collapsed,
        Slot::Segment(len - 2),
        Slot::Segment(len - 1),
    ]
}

/// Process a breadcrumb message and return the corresponding event.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::Navigate(path) => {
            state.open_menu = None;
            Event::Navigate(path)
        }
        Message::ToggleMenu(index) => {
            state.open_menu = if state.open_menu == Some(index) {
                None
            } else {
                Some(index)
            };
            Event::None
        }
        Message::CloseMenu => {
            state.open_menu = None;
            Event::None
        }
    }
}

/// Render the trail. An empty segment list renders an empty row.
///
/// Labels are copied into the widgets, so the element does not borrow the
/// segments it was built from.
pub fn view<'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let mut trail = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    let slots = layout(ctx.segments.len(), BREADCRUMB_COLLAPSE_AFTER);

    for (position, slot) in slots.iter().enumerate() {
        if position > 0 {
            trail = trail.push(separator());
        }
        let item = match *slot {
            Slot::Segment(index) => build_segment(ctx.i18n, index, &ctx.segments[index]),
            Slot::Collapsed => build_collapsed(ctx.i18n, ctx.segments),
        };
        trail = trail.push(item);
    }

    let mut content = Column::new().spacing(spacing::XXS).push(trail);

    let open_segment = ctx
        .state
        .open_menu
        .and_then(|index| ctx.segments.get(index))
        .filter(|segment| !segment.siblings.is_empty());
    if let Some(segment) = open_segment {
        content = content.push(build_dropdown(segment));
    }

    content.into()
}

fn separator<'a>() -> Element<'a, Message> {
    Text::new("/")
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.color),
        })
        .into()
}

/// Ellipsis standing for the folded middle; hovering lists what it hides.
fn build_collapsed<'a>(i18n: &I18n, segments: &[PathSegment<'_>]) -> Element<'a, Message> {
    let end = segments.len().saturating_sub(2);
    let hidden = segments
        .get(1..end)
        .unwrap_or_default()
        .iter()
        .map(|segment| segment.node.label.as_str())
        .collect::<Vec<_>>()
        .join(" / ");

    tooltip(
        Text::new("…").size(typography::BODY),
        Text::new(i18n.tr_with_args("breadcrumbs-hidden", &[("pages", hidden.as_str())]))
            .size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .gap(spacing::XXS)
    .into()
}

/// Build one segment: optional leading icon, label, and dropdown toggle.
fn build_segment<'a>(
    i18n: &I18n,
    index: usize,
    segment: &PathSegment<'_>,
) -> Element<'a, Message> {
    let node = segment.node;
    let mut row = Row::new().spacing(spacing::XXS).align_y(Vertical::Center);

    // Icon names are resolved by the host's icon font.
    if index == 0 {
        if let Some(icon) = &node.icon {
            row = row.push(Text::new(icon.clone()).size(sizing::ICON_SM));
        }
    }

    let label: Element<'a, Message> = match (&node.path, segment.is_active) {
        (Some(path), false) => button(Text::new(node.label.clone()).size(typography::BODY))
            .on_press(Message::Navigate(path.clone()))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::link)
            .into(),
        _ => {
            let is_active = segment.is_active;
            Text::new(node.label.clone())
                .size(typography::BODY)
                .style(move |theme: &Theme| text::Style {
                    color: Some(if is_active {
                        theme.palette().text
                    } else {
                        theme.extended_palette().background.strong.text
                    }),
                })
                .into()
        }
    };
    row = row.push(label);

    if !segment.siblings.is_empty() {
        let toggle = button(Text::new("▾").size(typography::CAPTION))
            .on_press(Message::ToggleMenu(index))
            .padding(spacing::XXS)
            .style(styles::button::ghost);
        row = row.push(
            tooltip(
                toggle,
                Text::new(i18n.tr("breadcrumbs-more")).size(typography::CAPTION),
                tooltip::Position::Bottom,
            )
            .gap(spacing::XXS),
        );
    }

    row.into()
}

/// Build the sibling list shown under the trail.
fn build_dropdown<'a>(segment: &PathSegment<'_>) -> Element<'a, Message> {
    let items = segment.siblings.iter().map(|sibling| {
        let entry = button(Text::new(sibling.label.clone()).size(typography::BODY))
            .padding([spacing::XS, spacing::SM])
            .width(Length::Fill)
            .style(styles::button::menu_item);
        // Grouping nodes without a path cannot be navigated to.
        let item: Element<'a, Message> = match &sibling.path {
            Some(path) => entry.on_press(Message::Navigate(path.clone())).into(),
            None => entry.into(),
        };
        item
    });

    let menu = Column::with_children(items).spacing(spacing::XXS);

    Container::new(menu)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::MENU_MIN_WIDTH))
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: border::WIDTH_SM,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn i18n() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    fn sales_forest() -> Vec<NavigationNode> {
        vec![NavigationNode::new("ventes", "Ventes")
            .with_icon("cart")
            .with_children(vec![
                NavigationNode::new("devis", "Devis").with_path("/devis"),
                NavigationNode::new("factures", "Factures").with_path("/factures"),
                NavigationNode::new("archives", "Archives"),
            ])]
    }

    #[test]
    fn view_renders_trail() {
        let forest = sales_forest();
        let segments = build_segments(&forest, "/devis");
        let state = State::default();
        let _element = view(ViewContext {
            i18n: &i18n(),
            segments: &segments,
            state: &state,
        });
    }

    #[test]
    fn view_renders_with_dropdown_open() {
        let forest = sales_forest();
        let segments = build_segments(&forest, "/devis");
        let state = State {
            open_menu: Some(1),
        };
        let _element = view(ViewContext {
            i18n: &i18n(),
            segments: &segments,
            state: &state,
        });
    }

    #[test]
    fn view_renders_nothing_for_unknown_path() {
        let forest = sales_forest();
        let segments = build_segments(&forest, "/nowhere");
        assert!(segments.is_empty());
        let state = State {
            open_menu: Some(3),
        };
        let _element = view(ViewContext {
            i18n: &i18n(),
            segments: &segments,
            state: &state,
        });
    }

    #[test]
    fn short_trails_are_not_collapsed() {
        assert!(layout(0, 4).is_empty());
        assert_eq!(
            layout(4, 4),
            [Slot::Segment(0), Slot::Segment(1), Slot::Segment(2), Slot::Segment(3)]
        );
    }

    #[test]
    fn trail_past_threshold_keeps_first_and_last_two() {
        assert_eq!(
            layout(5, 4),
            [
                Slot::Segment(0),
                Slot::Collapsed,
                Slot::Segment(3),
                Slot::Segment(4)
            ]
        );
        assert_eq!(layout(9, 4)[2..], [Slot::Segment(7), Slot::Segment(8)]);
    }

    #[test]
    fn collapse_never_hides_nothing() {
        // A threshold under 3 would fold zero segments behind the ellipsis.
        assert_eq!(layout(3, 1).len(), 3);
        assert_eq!(layout(4, 1)[1], Slot::Collapsed);
    }

    #[test]
    fn view_renders_collapsed_trail() {
        let forest = vec![NavigationNode::new("a", "A").with_path("/a").with_children(vec![
            NavigationNode::new("b", "B").with_path("/b").with_children(vec![
                NavigationNode::new("c", "C").with_path("/c").with_children(vec![
                    NavigationNode::new("d", "D").with_path("/d").with_children(vec![
                        NavigationNode::new("e", "E").with_path("/e"),
                    ]),
                ]),
            ]),
        ])];
        let segments = build_segments(&forest, "/e");
        assert_eq!(segments.len(), 5);
        let _element = view(ViewContext {
            i18n: &i18n(),
            segments: &segments,
            state: &State::default(),
        });
    }

    #[test]
    fn toggle_menu_opens_and_closes() {
        let mut state = State::default();

        assert_eq!(update(Message::ToggleMenu(1), &mut state), Event::None);
        assert_eq!(state.open_menu, Some(1));

        assert_eq!(update(Message::ToggleMenu(1), &mut state), Event::None);
        assert_eq!(state.open_menu, None);
    }

    #[test]
    fn toggle_other_menu_switches() {
        let mut state = State {
            open_menu: Some(0),
        };
        update(Message::ToggleMenu(2), &mut state);
        assert_eq!(state.open_menu, Some(2));
    }

    #[test]
    fn navigate_closes_menu_and_emits_event() {
        let mut state = State {
            open_menu: Some(1),
        };
        let event = update(Message::Navigate("/factures".into()), &mut state);
        assert_eq!(event, Event::Navigate("/factures".into()));
        assert_eq!(state.open_menu, None);
    }

    #[test]
    fn close_menu_clears_state() {
        let mut state = State {
            open_menu: Some(1),
        };
        assert_eq!(update(Message::CloseMenu, &mut state), Event::None);
        assert_eq!(state.open_menu, None);
    }
}
