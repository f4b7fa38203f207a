//! Error types for the circles core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes
//! and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced by [`crate::DisjointSetWithSizeStats`] and
/// [`crate::analyse`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum CirclesError {
    /// The universe must contain at least one user.
    #[error("universe size must be at least 1 (got {got})")]
    InvalidUniverseSize {
        /// The invalid universe size supplied by the caller.
        got: usize,
    },
    /// A user id fell outside `0..universe`.
    #[error("user id {id} is out of range for a universe of {universe} users")]
    OutOfRange {
        /// The offending user id.
        id: usize,
        /// Number of users in the universe.
        universe: usize,
    },
    /// A statistic was requested while no circles exist.
    #[error("{statistic} circle size is undefined when there are no circles")]
    DivisionUndefined {
        /// Name of the statistic that could not be computed.
        statistic: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`CirclesError`] variants.
    enum CirclesErrorCode for CirclesError {
        /// The universe must contain at least one user.
        InvalidArgument => InvalidUniverseSize { .. } => "CIRCLES_INVALID_ARGUMENT",
        /// A user id fell outside `0..universe`.
        OutOfRange => OutOfRange { .. } => "CIRCLES_OUT_OF_RANGE",
        /// A statistic was requested while no circles exist.
        DivisionUndefined => DivisionUndefined { .. } => "CIRCLES_DIVISION_UNDEFINED",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, CirclesError>;
