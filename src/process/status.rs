use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;

/// Offset added to a signal number when a child is killed by a signal.
pub const SIGNAL_STATUS_BASE: i32 = 128;

/// Folds any integer into the `0..=255` range an exit status can take.
pub fn normalize(raw: i64) -> u8 {
    raw.rem_euclid(256) as u8
}

/// Converts a child's wait status into the shell's exit status.
///
/// A normal exit yields the child's own code; death by signal N yields
/// `128 + N`.
pub fn from_exit_status(status: ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return normalize(code.into());
    }

    match status.signal() {
        Some(signal) => normalize((SIGNAL_STATUS_BASE + signal).into()),
        None => normalize(SIGNAL_STATUS_BASE.into()),
    }
}
