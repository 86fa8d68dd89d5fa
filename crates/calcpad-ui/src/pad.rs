//! The 5x4 number pad.

use calcpad_common::{ButtonFace, ButtonType, Color, Function};
use calcpad_config::Palette;

use crate::node::{Font, Node, Style};
use crate::tap::TapAction;

use calcpad_common::ButtonType::{Function as F, Number as N};

/// Pad rows, top to bottom.
pub const NUMBER_PAD: [[ButtonType; 4]; 5] = [
    [
        F(Function::Remove),
        F(Function::Clear),
        F(Function::Percent),
        F(Function::Divide),
    ],
    [N(7), N(8), N(9), F(Function::Multiply)],
    [N(4), N(5), N(6), F(Function::Subtract)],
    [N(1), N(2), N(3), F(Function::Add)],
    [
        F(Function::ChangeSign),
        N(0),
        F(Function::FloatingPoint),
        F(Function::Result),
    ],
];

pub fn build_number_pad(palette: &Palette, padding: f64) -> Node {
    let rows = NUMBER_PAD
        .iter()
        .map(|row| {
            let buttons = row
                .iter()
                .map(|button| build_number_button(*button, palette))
                .collect();
            Node::hstack(buttons, Style::default())
        })
        .collect();

    Node::vstack(
        rows,
        Style::default()
            .padding(padding)
            .fixed_vertical()
            .layout_priority(1),
    )
}

/// A circle in the button's swatch color with its face on top.
pub fn build_number_button(button: ButtonType, palette: &Palette) -> Node {
    let circle = Node::Circle {
        fill: palette.color_for(button.swatch()),
        diameter: None,
    };
    let face = match button.face() {
        ButtonFace::Text(content) => Node::Text {
            content,
            foreground: Color::WHITE,
            font: Font::LargeTitle,
            style: Style::default(),
        },
        ButtonFace::SystemImage(system_name) => Node::Image {
            system_name,
            foreground: Color::WHITE,
            font: Some(Font::LargeTitle),
            style: Style::default(),
        },
    };

    Node::button(TapAction::Pad(button), Node::zstack(vec![circle, face]))
}
