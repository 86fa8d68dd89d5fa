use serde::{Deserialize, Serialize};

mod button_enum;
mod dispatch;

pub use button_enum::*;

/// What is drawn on top of a button's circle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonFace {
    Text(String),
    SystemImage(String),
}

/// Background role of a button; the palette maps each role to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Swatch {
    DarkGray,
    Orange,
    LightGray,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_are_orange() {
        for f in [
            Function::Add,
            Function::Subtract,
            Function::Multiply,
            Function::Divide,
            Function::Result,
        ] {
            assert_eq!(ButtonType::Function(f).swatch(), Swatch::Orange);
        }
    }

    #[test]
    fn utility_functions_are_light_gray() {
        for f in [Function::Percent, Function::Remove, Function::Clear] {
            assert_eq!(ButtonType::Function(f).swatch(), Swatch::LightGray);
        }
    }

    #[test]
    fn digits_and_entry_helpers_are_dark_gray() {
        assert_eq!(ButtonType::Number(7).swatch(), Swatch::DarkGray);
        assert_eq!(
            ButtonType::Function(Function::ChangeSign).swatch(),
            Swatch::DarkGray
        );
        assert_eq!(
            ButtonType::Function(Function::FloatingPoint).swatch(),
            Swatch::DarkGray
        );
    }

    #[test]
    fn number_face_is_its_digit() {
        assert_eq!(
            ButtonType::Number(0).face(),
            ButtonFace::Text("0".into())
        );
        assert_eq!(
            ButtonType::Number(9).face(),
            ButtonFace::Text("9".into())
        );
    }

    #[test]
    fn function_faces() {
        assert_eq!(Function::Clear.face(), ButtonFace::Text("AC".into()));
        assert_eq!(Function::FloatingPoint.face(), ButtonFace::Text(",".into()));
        assert_eq!(
            Function::ChangeSign.face(),
            ButtonFace::SystemImage("plus.forwardslash.minus".into())
        );
        assert_eq!(
            Function::Remove.face(),
            ButtonFace::SystemImage("delete.left".into())
        );
        assert_eq!(
            Function::Result.face(),
            ButtonFace::SystemImage("equal".into())
        );
    }

    #[test]
    fn every_function_has_distinct_symbol_and_name() {
        let mut seen = std::collections::HashSet::new();
        for f in Function::ALL {
            assert!(seen.insert(f.symbol()), "duplicate symbol {}", f.symbol());
            assert!(seen.insert(f.name()), "duplicate name {}", f.name());
        }
    }

    #[test]
    fn from_label_resolves_digits_symbols_and_names() {
        assert_eq!(ButtonType::from_label("7"), Some(ButtonType::Number(7)));
        assert_eq!(
            ButtonType::from_label("+"),
            Some(ButtonType::Function(Function::Add))
        );
        assert_eq!(
            ButtonType::from_label("+/-"),
            Some(ButtonType::Function(Function::ChangeSign))
        );
        assert_eq!(
            ButtonType::from_label("Divide"),
            Some(ButtonType::Function(Function::Divide))
        );
        assert_eq!(
            ButtonType::from_label(" ac "),
            Some(ButtonType::Function(Function::Clear))
        );
    }

    #[test]
    fn from_label_rejects_unknown() {
        assert_eq!(ButtonType::from_label("10"), None);
        assert_eq!(ButtonType::from_label("sqrt"), None);
        assert_eq!(ButtonType::from_label(""), None);
    }

    #[test]
    fn label_round_trips_through_from_label() {
        let mut all: Vec<ButtonType> = (0..=9).map(ButtonType::Number).collect();
        all.extend(Function::ALL.iter().copied().map(ButtonType::Function));
        for button in all {
            assert_eq!(ButtonType::from_label(&button.label()), Some(button));
        }
    }

    #[test]
    fn button_serde_roundtrip() {
        let buttons = [
            ButtonType::Number(3),
            ButtonType::Function(Function::Percent),
        ];
        for button in &buttons {
            let json = serde_json::to_string(button).unwrap();
            let back: ButtonType = serde_json::from_str(&json).unwrap();
            assert_eq!(*button, back);
        }
    }
}
