// crates/infra/src/platform.rs
//! Platform-specific file type classification.
//!
//! Sockets, devices and FIFOs only exist as distinct kinds on Unix; other
//! platforms report everything that is not a directory or link as a file.

use std::fs::FileType;

use dir_count_shared_kernel::EntryType;

/// Map a filesystem file type onto the entry type vocabulary.
pub fn classify(file_type: FileType) -> EntryType {
    if file_type.is_symlink() {
        EntryType::Symlink
    } else if file_type.is_dir() {
        EntryType::Dir
    } else if file_type.is_file() {
        EntryType::File
    } else {
        classify_special(file_type)
    }
}

#[cfg(unix)]
fn classify_special(file_type: FileType) -> EntryType {
    use std::os::unix::fs::FileTypeExt;

    if file_type.is_socket() {
        EntryType::Socket
    } else if file_type.is_block_device() {
        EntryType::BlockDevice
    } else if file_type.is_char_device() {
        EntryType::CharDevice
    } else if file_type.is_fifo() {
        EntryType::Fifo
    } else {
        EntryType::File
    }
}

#[cfg(not(unix))]
fn classify_special(_file_type: FileType) -> EntryType {
    EntryType::File
}
