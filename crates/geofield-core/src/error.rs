//! Construction errors for geometric fields.
//!
//! Every variant describes a configuration that must not produce a usable
//! field. Constructors return these instead of a partially initialised
//! object; precondition breaches after construction (out-of-range patch
//! index, reading through a null sentinel) are panics, not errors.

use std::error::Error;
use std::fmt;

/// Errors detected while building a field or its boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// The boundary specification does not have one entry per mesh patch.
    PatchCountMismatch {
        /// Number of patches in the mesh.
        expected: usize,
        /// Number of per-patch entries supplied.
        found: usize,
    },
    /// A per-patch entry names a different patch than the mesh at that index.
    PatchNameMismatch {
        /// Patch index.
        index: usize,
        /// Patch name in the mesh.
        expected: String,
        /// Patch name in the specification.
        found: String,
    },
    /// No patch field behavior is registered under this type name.
    UnknownPatchType {
        /// Patch the entry was meant for.
        patch: String,
        /// The unrecognised type name.
        type_name: String,
    },
    /// A behavior requires a value but the entry supplied none.
    MissingValue {
        /// Patch the entry was meant for.
        patch: String,
        /// The behavior that needs a value.
        type_name: String,
    },
    /// A non-uniform patch value has the wrong number of elements.
    ValueSizeMismatch {
        /// Patch the entry was meant for.
        patch: String,
        /// Number of faces (or points) on the patch.
        expected: usize,
        /// Number of values supplied.
        found: usize,
    },
    /// The initial interior values do not match the mesh element count.
    InternalSizeMismatch {
        /// Number of mesh elements for this field's mesh category.
        expected: usize,
        /// Number of values supplied.
        found: usize,
    },
    /// A topology map was produced for a different mesh instance.
    MeshMismatch {
        /// Description of the mismatch.
        reason: String,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PatchCountMismatch { expected, found } => {
                write!(
                    f,
                    "boundary has {found} patch entries but the mesh has {expected} patches"
                )
            }
            Self::PatchNameMismatch {
                index,
                expected,
                found,
            } => {
                write!(
                    f,
                    "patch {index} is '{expected}' in the mesh but '{found}' in the boundary spec"
                )
            }
            Self::UnknownPatchType { patch, type_name } => {
                write!(f, "unknown patch field type '{type_name}' on patch '{patch}'")
            }
            Self::MissingValue { patch, type_name } => {
                write!(f, "patch field type '{type_name}' on patch '{patch}' requires a value")
            }
            Self::ValueSizeMismatch {
                patch,
                expected,
                found,
            } => {
                write!(
                    f,
                    "patch '{patch}' has {expected} elements but {found} values were supplied"
                )
            }
            Self::InternalSizeMismatch { expected, found } => {
                write!(
                    f,
                    "mesh has {expected} elements but {found} interior values were supplied"
                )
            }
            Self::MeshMismatch { reason } => write!(f, "mesh mismatch: {reason}"),
        }
    }
}

impl Error for FieldError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_patch() {
        let err = FieldError::UnknownPatchType {
            patch: "inlet".into(),
            type_name: "bogus".into(),
        };
        assert_eq!(
            err.to_string(),
            "unknown patch field type 'bogus' on patch 'inlet'"
        );
    }

    #[test]
    fn display_patch_count_mismatch() {
        let err = FieldError::PatchCountMismatch {
            expected: 3,
            found: 2,
        };
        assert!(err.to_string().contains("2 patch entries"));
        assert!(err.to_string().contains("3 patches"));
    }
}
