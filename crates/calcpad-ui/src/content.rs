//! The calculator screen: header, two-line display, number pad.

use calcpad_common::Color;
use calcpad_config::{CalcpadConfig, Palette};
use serde::{Deserialize, Serialize};

use crate::node::{Alignment, Font, FontWeight, Node, Style};
use crate::pad::build_number_pad;
use crate::tap::TapAction;

/// Sizes used while building the tree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UiMetrics {
    pub menu_button_size: f64,
    pub menu_icon_size: f64,
    pub padding: f64,
    pub upper_font_size: f64,
    pub lower_font_size: f64,
}

impl Default for UiMetrics {
    fn default() -> Self {
        Self::from_config(&CalcpadConfig::default())
    }
}

impl UiMetrics {
    pub fn from_config(config: &CalcpadConfig) -> Self {
        Self {
            menu_button_size: f64::from(config.layout.menu_button_size),
            menu_icon_size: f64::from(config.layout.menu_icon_size),
            padding: f64::from(config.layout.padding),
            upper_font_size: f64::from(config.display.upper_font_size),
            lower_font_size: f64::from(config.display.lower_font_size),
        }
    }
}

/// Screen state: the two display lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentView {
    pub upper_text: String,
    pub lower_text: String,
}

impl Default for ContentView {
    fn default() -> Self {
        Self::from_config(&CalcpadConfig::default())
    }
}

impl ContentView {
    pub fn new(upper_text: impl Into<String>, lower_text: impl Into<String>) -> Self {
        Self {
            upper_text: upper_text.into(),
            lower_text: lower_text.into(),
        }
    }

    pub fn from_config(config: &CalcpadConfig) -> Self {
        Self::new(&config.display.upper_text, &config.display.lower_text)
    }

    pub fn build(&self, palette: &Palette, metrics: &UiMetrics) -> Node {
        Node::vstack(
            vec![
                build_header(metrics),
                self.build_display_area(metrics),
                build_number_pad(palette, metrics.padding),
            ],
            Style::default()
                .max_height()
                .background(Color::OPAQUE_BLACK),
        )
    }

    fn build_display_area(&self, metrics: &UiMetrics) -> Node {
        let upper = Node::Text {
            content: self.upper_text.clone(),
            foreground: Color::GRAY,
            font: Font::System {
                size: metrics.upper_font_size,
                weight: FontWeight::Semibold,
            },
            style: Style::default().max_width(Alignment::Trailing),
        };
        let lower = Node::Text {
            content: self.lower_text.clone(),
            foreground: Color::WHITE,
            font: Font::System {
                size: metrics.lower_font_size,
                weight: FontWeight::Semibold,
            },
            style: Style::default().max_width(Alignment::Trailing),
        };

        Node::vstack(
            vec![Node::Spacer, upper, lower],
            Style::default().padding(metrics.padding).max_height(),
        )
    }
}

fn build_header(metrics: &UiMetrics) -> Node {
    let icon = Node::zstack(vec![
        Node::Circle {
            fill: Color::GRAY,
            diameter: Some(metrics.menu_button_size),
        },
        Node::Image {
            system_name: "list.bullet".into(),
            foreground: Color::WHITE,
            font: None,
            style: Style::default().frame(metrics.menu_icon_size, metrics.menu_icon_size),
        },
    ]);

    Node::hstack(
        vec![Node::button(TapAction::Menu, icon), Node::Spacer],
        Style::default()
            .padding(metrics.padding)
            .fixed_vertical()
            .layout_priority(1),
    )
}
