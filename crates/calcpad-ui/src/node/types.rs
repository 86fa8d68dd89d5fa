//! Core types for the view tree: Node, Style and Font.

use calcpad_common::Color;
use serde::{Deserialize, Serialize};

use crate::tap::TapAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontWeight {
    Semibold,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Font {
    LargeTitle,
    System { size: f64, weight: FontWeight },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    Leading,
    Center,
    Trailing,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
}

/// Layout attributes attached to a node. Everything is off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame: Option<Frame>,
    #[serde(skip_serializing_if = "is_false")]
    pub max_width: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub max_height: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    /// Size vertically to content instead of stretching.
    #[serde(skip_serializing_if = "is_false")]
    pub fixed_vertical: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub layout_priority: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl Style {
    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn frame(mut self, width: f64, height: f64) -> Self {
        self.frame = Some(Frame { width, height });
        self
    }

    pub fn max_width(mut self, alignment: Alignment) -> Self {
        self.max_width = true;
        self.alignment = Some(alignment);
        self
    }

    pub fn max_height(mut self) -> Self {
        self.max_height = true;
        self
    }

    pub fn fixed_vertical(mut self) -> Self {
        self.fixed_vertical = true;
        self
    }

    pub fn layout_priority(mut self, priority: i32) -> Self {
        self.layout_priority = priority;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    VStack {
        children: Vec<Node>,
        style: Style,
    },
    HStack {
        children: Vec<Node>,
        style: Style,
    },
    ZStack {
        children: Vec<Node>,
        style: Style,
    },
    Spacer,
    Circle {
        fill: Color,
        /// `None` fills the space the parent offers.
        diameter: Option<f64>,
    },
    Text {
        content: String,
        foreground: Color,
        font: Font,
        style: Style,
    },
    Image {
        system_name: String,
        foreground: Color,
        font: Option<Font>,
        style: Style,
    },
    Button {
        action: TapAction,
        label: Box<Node>,
    },
}

impl Node {
    pub fn vstack(children: Vec<Node>, style: Style) -> Self {
        Node::VStack { children, style }
    }

    pub fn hstack(children: Vec<Node>, style: Style) -> Self {
        Node::HStack { children, style }
    }

    pub fn zstack(children: Vec<Node>) -> Self {
        Node::ZStack {
            children,
            style: Style::default(),
        }
    }

    pub fn button(action: TapAction, label: Node) -> Self {
        Node::Button {
            action,
            label: Box::new(label),
        }
    }

    /// Direct children, in order.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::VStack { children, .. }
            | Node::HStack { children, .. }
            | Node::ZStack { children, .. } => children,
            Node::Button { label, .. } => std::slice::from_ref(&**label),
            Node::Spacer | Node::Circle { .. } | Node::Text { .. } | Node::Image { .. } => &[],
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Node::VStack { .. } => "VStack",
            Node::HStack { .. } => "HStack",
            Node::ZStack { .. } => "ZStack",
            Node::Spacer => "Spacer",
            Node::Circle { .. } => "Circle",
            Node::Text { .. } => "Text",
            Node::Image { .. } => "Image",
            Node::Button { .. } => "Button",
        }
    }
}
