use super::{ButtonFace, ButtonType, Function, Swatch};

impl Function {
    pub fn face(&self) -> ButtonFace {
        match self {
            Function::Add => ButtonFace::SystemImage("plus".into()),
            Function::Subtract => ButtonFace::SystemImage("minus".into()),
            Function::Multiply => ButtonFace::SystemImage("multiply".into()),
            Function::Divide => ButtonFace::SystemImage("divide".into()),
            Function::Percent => ButtonFace::SystemImage("percent".into()),
            Function::ChangeSign => ButtonFace::SystemImage("plus.forwardslash.minus".into()),
            Function::FloatingPoint => ButtonFace::Text(",".into()),
            Function::Clear => ButtonFace::Text("AC".into()),
            Function::Remove => ButtonFace::SystemImage("delete.left".into()),
            Function::Result => ButtonFace::SystemImage("equal".into()),
        }
    }

    pub fn swatch(&self) -> Swatch {
        match self {
            Function::Add
            | Function::Subtract
            | Function::Multiply
            | Function::Divide
            | Function::Result => Swatch::Orange,
            Function::Percent | Function::Remove | Function::Clear => Swatch::LightGray,
            Function::ChangeSign | Function::FloatingPoint => Swatch::DarkGray,
        }
    }

    /// Short key label, as typed on the command line.
    pub fn symbol(&self) -> &'static str {
        match self {
            Function::Add => "+",
            Function::Subtract => "-",
            Function::Multiply => "*",
            Function::Divide => "/",
            Function::Percent => "%",
            Function::ChangeSign => "+/-",
            Function::FloatingPoint => ",",
            Function::Clear => "AC",
            Function::Remove => "del",
            Function::Result => "=",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Function::Add => "add",
            Function::Subtract => "subtract",
            Function::Multiply => "multiply",
            Function::Divide => "divide",
            Function::Percent => "percent",
            Function::ChangeSign => "change-sign",
            Function::FloatingPoint => "floating-point",
            Function::Clear => "clear",
            Function::Remove => "remove",
            Function::Result => "result",
        }
    }
}

impl ButtonType {
    pub fn face(&self) -> ButtonFace {
        match self {
            ButtonType::Number(n) => ButtonFace::Text(n.to_string()),
            ButtonType::Function(f) => f.face(),
        }
    }

    pub fn swatch(&self) -> Swatch {
        match self {
            ButtonType::Number(_) => Swatch::DarkGray,
            ButtonType::Function(f) => f.swatch(),
        }
    }

    pub fn label(&self) -> String {
        match self {
            ButtonType::Number(n) => n.to_string(),
            ButtonType::Function(f) => f.symbol().to_string(),
        }
    }

    /// Resolve a digit, key symbol, or function name (case-insensitive).
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if let Ok(n) = label.parse::<u8>() {
            return (n <= 9).then_some(ButtonType::Number(n));
        }
        Function::ALL
            .iter()
            .find(|f| {
                f.symbol().eq_ignore_ascii_case(label) || f.name().eq_ignore_ascii_case(label)
            })
            .map(|f| ButtonType::Function(*f))
    }
}
