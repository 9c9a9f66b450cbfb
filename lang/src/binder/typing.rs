#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Type {
    /// The type of a node which failed to bind. Operators never accept it.
    Error,
    Number,
    Boolean,
}

impl Type {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Error => write!(f, "error"),
            Type::Number => write!(f, "number"),
            Type::Boolean => write!(f, "bool"),
        }
    }
}
