//! Path command implementation.
//!
//! Responsibilities:
//! - Check whether a file is readable, writable, executable or exists.
//!
//! Invariants:
//! - `readable` and `writable` ask the kernel via access(2), so they reflect
//!   the effective permissions of this process.
//! - `executable` is true when any execute bit is set, for any user.
//! - `existence` is false only when the path is missing; other stat errors
//!   are reported as errors.

use std::io;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::error::CommandError;

/// A supported path check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathOperation {
    Readable,
    Writable,
    Executable,
    Existence,
}

impl FromStr for PathOperation {
    type Err = CommandError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "readable" => Ok(Self::Readable),
            "writable" => Ok(Self::Writable),
            "executable" => Ok(Self::Executable),
            "existence" => Ok(Self::Existence),
            other => Err(CommandError::Validation(format!(
                "unknown operation '{other}' (expected readable, writable, executable or existence)"
            ))),
        }
    }
}

/// Run `operation` against `path`.
pub fn check(path: &Path, operation: PathOperation) -> io::Result<bool> {
    match operation {
        PathOperation::Readable => access(path, AccessMode::Read).map(|()| true),
        PathOperation::Writable => access(path, AccessMode::Write).map(|()| true),
        PathOperation::Executable => is_executable(path),
        PathOperation::Existence => match std::fs::metadata(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        },
    }
}

pub fn run(path: &Path, operation: &str) -> Result<()> {
    let op: PathOperation = operation.parse()?;
    let ok = check(path, op).with_context(|| {
        format!(
            "error checking operation '{operation}' on file '{}'",
            path.display()
        )
    })?;

    if ok {
        tracing::debug!(path = %path.display(), operation, "Path check passed");
        Ok(())
    } else {
        Err(CommandError::CheckFailed(format!(
            "operation '{operation}' on file '{}' is unsuccessful",
            path.display()
        ))
        .into())
    }
}

#[derive(Debug, Clone, Copy)]
enum AccessMode {
    Read,
    Write,
}

#[cfg(unix)]
fn access(path: &Path, mode: AccessMode) -> io::Result<()> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let mode = match mode {
        AccessMode::Read => libc::R_OK,
        AccessMode::Write => libc::W_OK,
    };
    // SAFETY: `c_path` is a valid NUL-terminated string that outlives the call.
    let rc = unsafe { libc::access(c_path.as_ptr(), mode) };
    if rc == 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

#[cfg(not(unix))]
fn access(path: &Path, mode: AccessMode) -> io::Result<()> {
    let metadata = std::fs::metadata(path)?;
    match mode {
        AccessMode::Read => Ok(()),
        AccessMode::Write if metadata.permissions().readonly() => Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "file is read-only",
        )),
        AccessMode::Write => Ok(()),
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> io::Result<bool> {
    use std::os::unix::fs::PermissionsExt;

    Ok(std::fs::metadata(path)?.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> io::Result<bool> {
    std::fs::metadata(path).map(|m| m.is_file())
}
