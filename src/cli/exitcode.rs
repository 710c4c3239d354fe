//! Standard exit codes (BSD sysexits.h compatible)

/// Catalog loaded but failed the prerequisite check
pub const INVALID: i32 = 1;

/// Command line usage error
pub const USAGE: i32 = 64;

/// Data format error
pub const DATAERR: i32 = 65;

/// Cannot open input
pub const NOINPUT: i32 = 66;

/// Input/output error
pub const IOERR: i32 = 74;
