//! Error types used in the library.
//!
//! Most absences are not errors.
//! A name which is not bound in the registry resolves to nothing, and nothing is propagated as the absence of a formula or of a value.
//! Likewise, redundant operations (re-adding an atom, re-adding a name to a junction) are silently ignored.
//!
//! Errors are reserved for misuse of keys and for traversals which exceed the configured depth limit.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Registry(RegistryError),

    /// A traversal of some formula exceeded the configured depth limit.
    /// Almost certainly, some name is bound to a formula which (transitively) refers to the name.
    DepthExceeded,
}

/// Errors in the registry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RegistryError {
    /// No formula is stored under the key.
    UnknownKey,

    /// A junction operation was requested on some formula which is not a junction.
    NotAJunction,

    /// An implication operation was requested on some formula which is not an implication.
    NotAnImplication,

    /// A DNF was requested over some formula which is not an atom.
    NotAnAtom,

    /// A DNF operation was requested on some formula which is not a DNF.
    NotADnf,

    /// An empty string, where some non-empty name was required.
    EmptyName,

    /// A junction would contain its own name.
    SelfReference,
}

impl From<RegistryError> for ErrorKind {
    fn from(e: RegistryError) -> Self {
        ErrorKind::Registry(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Registry(e) => write!(f, "Registry error: {e:?}"),
            Self::DepthExceeded => write!(f, "Depth limit exceeded"),
        }
    }
}

impl std::error::Error for ErrorKind {}
