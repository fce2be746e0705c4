use std::fmt;
use std::io;

/// The two value kinds a prefix byte can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Byte string (including the self-encoded single byte form).
    String,
    /// List of nested values.
    List,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::String => write!(f, "string"),
            Kind::List => write!(f, "list"),
        }
    }
}

/// Reasons a prefix is rejected as non-canonical or malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixFault {
    /// Long-form length starts with a zero byte.
    LeadingZeroLength,
    /// Long-form length fits in the short form (<= 55).
    ShortFormRequired,
    /// A single byte below 0x80 wrapped in a `0x81` prefix.
    SingleByteWrapped,
}

impl fmt::Display for PrefixFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PrefixFault::*;
        match self {
            LeadingZeroLength => write!(f, "length-of-length has a leading zero byte"),
            ShortFormRequired => write!(f, "long form used for a payload of 55 bytes or less"),
            SingleByteWrapped => write!(f, "single byte below 0x80 must encode itself"),
        }
    }
}

/// Unified codec error.
/// - Every variant is terminal for the encode/decode call in progress.
/// - Offsets are absolute byte positions in the decoded input.
#[derive(Debug, thiserror::Error)]
pub enum RlpError {
    #[error("malformed prefix at offset {offset}: {fault}")]
    MalformedPrefix { offset: u64, fault: PrefixFault },

    #[error("unexpected end of input")]
    UnexpectedEof,

    /// Payload boundary and cursor disagree (under- or over-consumption).
    #[error("payload boundary at offset {boundary}, cursor at {cursor}")]
    TrailingData { boundary: u64, cursor: u64 },

    #[error("declared payload of {size} bytes exceeds limit of {max}")]
    SizeExceeded { size: u64, max: u64 },

    #[error("list nesting exceeds maximum depth {max}")]
    DepthExceeded { max: usize },

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: Kind, found: Kind },

    #[error("non-canonical integer: leading zero byte")]
    NonCanonicalInteger,

    #[error("integer of {size} bytes overflows a {max}-byte target")]
    IntegerOverflow { size: usize, max: usize },

    #[error("length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("invalid boolean encoding")]
    InvalidBool,

    #[error("invalid utf-8 in string value")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Cursor reached the end of the enclosing list.
    #[error("end of list")]
    EndOfList,

    #[error("exit_list called without an open list")]
    NotInList,

    /// Error surfaced by a type's own encode/decode routine.
    #[error("hook failure: {0}")]
    HookFailure(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("I/O error: {0}")]
    Io(io::Error),
}

impl RlpError {
    /// Wrap an error raised inside a custom encode/decode routine.
    pub fn hook(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        RlpError::HookFailure(err.into())
    }
}

/// Allow `?` on std::io::Error; a short read is a truncated encoding.
impl From<io::Error> for RlpError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::UnexpectedEof => RlpError::UnexpectedEof,
            _ => RlpError::Io(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, RlpError>;
