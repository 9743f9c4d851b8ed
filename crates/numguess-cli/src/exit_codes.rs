//! Process exit codes. Part of the CLI contract.

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INVARIANT_FAILED: i32 = 1; // `check` found a broken invariant
pub const EXIT_CONFIG_ERROR: i32 = 2; // bad arguments or unrecoverable setup error
