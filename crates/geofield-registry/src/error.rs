//! Error types for registry access and function object execution.

use geofield_core::FieldError;
use std::error::Error;
use std::fmt;

/// Errors from [`ObjectRegistry`](crate::ObjectRegistry) operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// An object with this name is already registered.
    DuplicateName {
        /// The contested name.
        name: String,
    },
    /// No object is registered under this name.
    NotFound {
        /// The requested name.
        name: String,
    },
    /// The object registered under this name has a different type.
    TypeMismatch {
        /// The requested name.
        name: String,
        /// The type the caller asked for.
        expected: &'static str,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName { name } => write!(f, "object '{name}' is already registered"),
            Self::NotFound { name } => write!(f, "no object named '{name}'"),
            Self::TypeMismatch { name, expected } => {
                write!(f, "object '{name}' is not a {expected}")
            }
        }
    }
}

impl Error for RegistryError {}

/// Errors reported by a [`FunctionObject`](crate::FunctionObject).
#[derive(Clone, Debug, PartialEq)]
pub enum FunctionObjectError {
    /// A registry lookup or store failed.
    Registry(RegistryError),
    /// Building a result field failed.
    Field(FieldError),
    /// The function object configuration is invalid.
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
    /// Inputs were found but could not be combined.
    ExecutionFailed {
        /// Name of the failing function object.
        name: String,
        /// Description of the failure.
        reason: String,
    },
}

impl fmt::Display for FunctionObjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Registry(e) => write!(f, "registry: {e}"),
            Self::Field(e) => write!(f, "field: {e}"),
            Self::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
            Self::ExecutionFailed { name, reason } => {
                write!(f, "function object '{name}' failed: {reason}")
            }
        }
    }
}

impl Error for FunctionObjectError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Registry(e) => Some(e),
            Self::Field(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RegistryError> for FunctionObjectError {
    fn from(e: RegistryError) -> Self {
        Self::Registry(e)
    }
}

impl From<FieldError> for FunctionObjectError {
    fn from(e: FieldError) -> Self {
        Self::Field(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_error_is_the_source() {
        let e = FunctionObjectError::from(RegistryError::NotFound { name: "Y_O2".into() });
        assert_eq!(e.to_string(), "registry: no object named 'Y_O2'");
        assert!(e.source().is_some());
    }

    #[test]
    fn config_error_has_no_source() {
        let e = FunctionObjectError::InvalidConfig {
            reason: "empty prefix".into(),
        };
        assert!(e.source().is_none());
    }
}
