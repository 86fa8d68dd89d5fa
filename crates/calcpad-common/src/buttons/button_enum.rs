use serde::{Deserialize, Serialize};

/// Every button on the calculator pad.
///
/// Pressing a button is a stub; the type only drives how the button looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonType {
    /// Digit key, 0 through 9.
    Number(u8),
    Function(Function),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Function {
    Add,
    Subtract,
    Multiply,
    Divide,
    Percent,
    ChangeSign,
    FloatingPoint,
    Clear,
    Remove,
    Result,
}

impl Function {
    pub const ALL: [Function; 10] = [
        Function::Add,
        Function::Subtract,
        Function::Multiply,
        Function::Divide,
        Function::Percent,
        Function::ChangeSign,
        Function::FloatingPoint,
        Function::Clear,
        Function::Remove,
        Function::Result,
    ];
}
