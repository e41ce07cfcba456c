use forwardkit_core::RefError;
use thiserror::Error;

/// Errors that can occur while emitting declarations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmitError {
    #[error("Failed to parse manifest: {0}")]
    Manifest(String),

    #[error("Component '{component}': {source}")]
    Component {
        component: String,
        #[source]
        source: RefError,
    },
}

impl EmitError {
    /// Name of the component the error belongs to, if any
    pub fn component(&self) -> Option<&str> {
        match self {
            EmitError::Component { component, .. } => Some(component),
            EmitError::Manifest(_) => None,
        }
    }
}

pub type EmitResult<T> = Result<T, EmitError>;
