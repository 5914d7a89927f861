//! # File System Operations Module / 文件系统操作模块
//!
//! Path expansion and file reading for user-supplied paths (filter files,
//! allowlists). Users hand the launcher paths straight from their shell, so
//! `~` and environment variables are expanded before the filesystem is
//! touched.
//!
//! 针对用户提供路径（过滤器文件、允许列表）的路径展开与文件读取。
//! 用户直接从 shell 传入路径，因此在访问文件系统之前先展开
//! `~` 和环境变量。

use std::io;
use std::path::PathBuf;

/// Expands `~` and `$VAR` references in a user-supplied path.
///
/// Expansion failures (an unset variable, an unresolvable home directory)
/// surface as `InvalidInput` I/O errors so callers handle one error channel.
pub fn expand_path(raw: &str) -> io::Result<PathBuf> {
    let expanded = shellexpand::full(raw)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Reads the file at the (expanded) path into a string.
pub fn read_to_string(raw: &str) -> io::Result<String> {
    let path = expand_path(raw)?;
    std::fs::read_to_string(&path)
}
