//! Plain-text outline of a view tree, one node per line.

use std::fmt::Write;

use crate::node::{Font, FontWeight, Node, Style};

const INDENT: &str = "  ";

pub fn render_outline(root: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, root, 0);
    out
}

fn write_node(out: &mut String, node: &Node, level: usize) {
    out.push_str(&INDENT.repeat(level));
    out.push_str(&describe(node));
    out.push('\n');
    for child in node.children() {
        write_node(out, child, level + 1);
    }
}

fn describe(node: &Node) -> String {
    let mut line = node.kind().to_string();
    match node {
        Node::VStack { style, .. } | Node::HStack { style, .. } | Node::ZStack { style, .. } => {
            push_style(&mut line, style);
        }
        Node::Spacer => {}
        Node::Circle { fill, diameter } => {
            let _ = write!(line, " {}", fill.to_hex());
            if let Some(d) = diameter {
                let _ = write!(line, " d={d}");
            }
        }
        Node::Text {
            content,
            foreground,
            font,
            style,
        } => {
            let _ = write!(line, " {content:?} {} {}", foreground.to_hex(), font_name(font));
            push_style(&mut line, style);
        }
        Node::Image {
            system_name,
            foreground,
            font,
            style,
        } => {
            let _ = write!(line, " <{system_name}> {}", foreground.to_hex());
            if let Some(font) = font {
                let _ = write!(line, " {}", font_name(font));
            }
            push_style(&mut line, style);
        }
        Node::Button { action, .. } => {
            let _ = write!(line, " [{}]", action.label());
        }
    }
    line
}

fn font_name(font: &Font) -> String {
    match font {
        Font::LargeTitle => "largeTitle".to_string(),
        Font::System { size, weight } => {
            let weight = match weight {
                FontWeight::Semibold => "semibold",
            };
            format!("{size}pt {weight}")
        }
    }
}

fn push_style(line: &mut String, style: &Style) {
    let mut attrs = Vec::new();
    if let Some(p) = style.padding {
        attrs.push(format!("padding={p}"));
    }
    if let Some(frame) = style.frame {
        attrs.push(format!("frame={}x{}", frame.width, frame.height));
    }
    if style.max_width {
        attrs.push("max_width".to_string());
    }
    if style.max_height {
        attrs.push("max_height".to_string());
    }
    if let Some(alignment) = style.alignment {
        attrs.push(format!("align={alignment:?}").to_lowercase());
    }
    if style.fixed_vertical {
        attrs.push("fixed_vertical".to_string());
    }
    if style.layout_priority != 0 {
        attrs.push(format!("priority={}", style.layout_priority));
    }
    if let Some(bg) = style.background {
        attrs.push(format!("bg={}", bg.to_hex()));
    }
    if !attrs.is_empty() {
        let _ = write!(line, " ({})", attrs.join(", "));
    }
}
