mod vars;

pub use vars::EnvVarManager;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    InvalidName(String),
    InvalidValue(String),
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvError::InvalidName(name) => write!(f, "Invalid variable name: {:?}", name),
            EnvError::InvalidValue(value) => write!(f, "Invalid value: {:?}", value),
        }
    }
}

impl std::error::Error for EnvError {}
