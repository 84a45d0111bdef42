use crate::loc;
use thiserror::Error;

/// A document/schema mismatch. Never fatal to the loader: each one is
/// reported to the build as a diagnostic and output is still emitted.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("This anonymous operation must be the only defined operation.")]
    AnonymousOperationNotAlone {
        location: loc::SourcePosition,
    },

    #[error("There can be only one operation named \"{operation_name}\".")]
    DuplicateOperationName {
        operation_name: String,
        location: loc::SourcePosition,
    },

    #[error("Fragment cannot condition on non composite type \"{type_name}\".")]
    FragmentOnNonCompositeType {
        type_name: String,
        location: loc::SourcePosition,
    },

    #[error(
        "Field \"{field_name}\" must not have a selection since type \
        \"{type_name}\" has no subfields."
    )]
    LeafFieldHasSelections {
        field_name: String,
        type_name: String,
        location: loc::SourcePosition,
    },

    #[error(
        "Field \"{field_name}\" of type \"{type_name}\" must have a selection \
        of subfields."
    )]
    MissingSubselection {
        field_name: String,
        type_name: String,
        location: loc::SourcePosition,
    },

    #[error("Cannot query field \"{field_name}\" on type \"{type_name}\".")]
    UndefinedField {
        field_name: String,
        type_name: String,
        location: loc::SourcePosition,
    },

    #[error("Unknown fragment \"{fragment_name}\".")]
    UnknownFragment {
        fragment_name: String,
        location: loc::SourcePosition,
    },

    #[error("Unknown type \"{type_name}\".")]
    UnknownType {
        type_name: String,
        location: loc::SourcePosition,
    },

    #[error("Fragment \"{fragment_name}\" is never used.")]
    UnusedFragment {
        fragment_name: String,
        location: loc::SourcePosition,
    },

    #[error("Schema is not configured for {operation_kind}s.")]
    UnsupportedOperation {
        operation_kind: &'static str,
        location: loc::SourcePosition,
    },
}
impl ValidationError {
    pub fn location(&self) -> &loc::SourcePosition {
        match self {
            Self::AnonymousOperationNotAlone { location }
            | Self::DuplicateOperationName { location, .. }
            | Self::FragmentOnNonCompositeType { location, .. }
            | Self::LeafFieldHasSelections { location, .. }
            | Self::MissingSubselection { location, .. }
            | Self::UndefinedField { location, .. }
            | Self::UnknownFragment { location, .. }
            | Self::UnknownType { location, .. }
            | Self::UnusedFragment { location, .. }
            | Self::UnsupportedOperation { location, .. } => location,
        }
    }
}
