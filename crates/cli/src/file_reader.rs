// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reads the text to search from disk.
//!
// Allow unsafe_code for memory-mapped I/O (required by memmap2).
// Safety justification:
// 1. File handle is valid (just opened)
// 2. We don't mutate the mapped memory
// 3. The text is only read for the duration of one search
#![allow(unsafe_code)]
//!
//! - < 64KB: Direct read into buffer
//! - >= 64KB: Memory-mapped I/O

use std::fs::{self, File};
use std::io;
use std::path::Path;

use memmap2::Mmap;

/// Files at or above this size are memory-mapped.
pub const MMAP_THRESHOLD: u64 = 64 * 1024;

/// Content of a file, either owned or memory-mapped.
pub enum FileContent {
    /// Small file read into memory.
    Owned(Vec<u8>),
    /// Large file memory-mapped.
    Mapped(Mmap),
}

impl FileContent {
    /// Read file using appropriate strategy based on size.
    pub fn read(path: &Path) -> io::Result<Self> {
        let size = fs::metadata(path)?.len();

        if size < MMAP_THRESHOLD {
            Ok(FileContent::Owned(fs::read(path)?))
        } else {
            tracing::debug!("memory-mapping {} ({} bytes)", path.display(), size);
            let file = File::open(path)?;
            // SAFETY: File handle is valid (just opened), we don't mutate the mapped memory,
            // and the mapping only lives for one search.
            let mmap = unsafe { Mmap::map(&file)? };
            Ok(FileContent::Mapped(mmap))
        }
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self, FileContent::Mapped(_))
    }

    /// Get content as string slice.
    /// Returns None if content is not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        let bytes: &[u8] = match self {
            FileContent::Owned(bytes) => bytes.as_slice(),
            FileContent::Mapped(mmap) => &mmap[..],
        };
        std::str::from_utf8(bytes).ok()
    }
}

#[cfg(test)]
#[path = "file_reader_tests.rs"]
mod tests;
