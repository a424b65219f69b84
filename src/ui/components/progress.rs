// SPDX-License-Identifier: MPL-2.0
//! Circular and linear progress indicators.
//!
//! Values are percentages and are clamped to `0..=100`. The circular
//! indicator follows the stroke-dash model: the arc is the circumference
//! minus the dash offset.

use crate::ui::design_tokens::{palette, sizing};
use iced::widget::canvas::{self, path, Canvas, Path, Stroke};
use iced::widget::progress_bar;
use iced::{mouse, Color, Element, Length, Radians, Rectangle, Theme};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Geometry of a circular progress ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularProgress {
    pub size: f32,
    pub thickness: f32,
}

impl Default for CircularProgress {
    fn default() -> Self {
        Self {
            size: sizing::PROGRESS_SIZE,
            thickness: sizing::PROGRESS_THICKNESS,
        }
    }
}

impl CircularProgress {
    /// Ring radius, measured to the middle of the stroke.
    #[must_use]
    pub fn radius(&self) -> f32 {
        ((self.size - self.thickness) / 2.0).max(0.0)
    }

    #[must_use]
    pub fn circumference(&self) -> f32 {
        TAU * self.radius()
    }

    /// Length of the ring left undrawn for `value` percent.
    #[must_use]
    pub fn dash_offset(&self, value: f32) -> f32 {
        self.circumference() * (1.0 - linear_fraction(value))
    }

    /// Renders the ring filled to `value` percent.
    pub fn view<'a, Message: 'a>(self, value: f32) -> Element<'a, Message> {
        Canvas::new(Ring {
            geometry: self,
            fraction: linear_fraction(value),
        })
        .width(Length::Fixed(self.size))
        .height(Length::Fixed(self.size))
        .into()
    }
}

/// Fraction of a linear bar filled for `value` percent.
#[must_use]
pub fn linear_fraction(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0) / 100.0
}

/// Renders a horizontal progress bar filled to `value` percent.
pub fn linear<'a, Message: 'a>(value: f32) -> Element<'a, Message> {
    progress_bar(0.0..=1.0, linear_fraction(value))
        .girth(sizing::PROGRESS_THICKNESS)
        .into()
}

struct Ring {
    geometry: CircularProgress,
    fraction: f32,
}

impl<Message> canvas::Program<Message> for Ring {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = self.geometry.radius();
        let track = Color {
            a: 0.2,
            ..theme.palette().text
        };

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default()
                .with_color(track)
                .with_width(self.geometry.thickness),
        );

        if self.fraction > 0.0 {
            // Start at twelve o'clock and run clockwise.
            let start = -FRAC_PI_2;
            let arc = Path::new(|builder| {
                builder.arc(path::Arc {
                    center,
                    radius,
                    start_angle: Radians(start),
                    end_angle: Radians(start + TAU * self.fraction),
                });
            });
            frame.stroke(
                &arc,
                Stroke::default()
                    .with_color(palette::PRIMARY_500)
                    .with_width(self.geometry.thickness)
                    .with_line_cap(canvas::LineCap::Round),
            );
        }

        vec![frame.into_geometry()]
    }
}
