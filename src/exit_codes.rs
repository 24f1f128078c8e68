//! Exit code constants for the xstub CLI.
//!
//! - 0: Success (including runs where individual directories failed)
//! - 1: User error (bad config)
//! - 3: Traversal failure (a directory in the tree could not be listed)
//! - 4: Output failure (stdout rejected the report for a reason other than
//!   the reader going away)
//!
//! Code 2 is left to clap for usage errors.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: unreadable, unparsable, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Traversal failure: the root or a subdirectory could not be listed.
pub const TRAVERSAL_FAILURE: i32 = 3;

/// Output failure: writing the report to stdout failed.
pub const OUTPUT_FAILURE: i32 = 4;
