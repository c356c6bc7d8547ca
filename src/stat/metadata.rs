use std::path::PathBuf;

use super::{FileType, Timestamp, TypeFlags};
use crate::native::RawStat;
use crate::util;

/// The metadata of a single file, as of one successful query.
///
/// A record can be reused for further queries through
/// [`StatOptions::query_into`](super::StatOptions::query_into). Every successful query replaces
/// all fields, `path` included. After a failed one, the contents are unspecified and shouldn't be
/// read.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    /// The path as it was queried, not canonicalized.
    pub path: PathBuf,
    pub device_id: u64,       // st_dev
    pub inode: u64,           // st_ino
    pub link_count: u64,      // st_nlink
    /// Permission and setuid/setgid/sticky bits, `st_mode & 0o7777`.
    pub permission_bits: u32,
    pub owner_uid: i32,       // st_uid
    pub owner_gid: i32,       // st_gid
    /// The device a special file represents, `st_rdev`. Zero for anything else.
    pub device_type: u64,
    pub size_bytes: u64,      // st_size
    pub block_size: u64,      // st_blksize
    pub block_count: u64,     // st_blocks
    pub type_flags: TypeFlags,
    pub accessed: Timestamp,  // st_atime
    pub modified: Timestamp,  // st_mtime
    pub changed: Timestamp,   // st_ctime
}

impl FileMetadata {
    pub(crate) const fn from_raw(path: PathBuf, raw: &RawStat) -> FileMetadata {
        FileMetadata {
            path,
            device_id: raw.dev,
            inode: raw.ino,
            link_count: raw.nlink,
            permission_bits: raw.mode & 0o7777,
            // Ids are kept bit for bit, a uid above i32::MAX just reads as negative.
            owner_uid: raw.uid as i32,
            owner_gid: raw.gid as i32,
            device_type: raw.rdev,
            size_bytes: raw.size as u64,
            block_size: raw.blksize as u64,
            block_count: raw.blocks as u64,
            type_flags: TypeFlags::from_mode(raw.mode),
            accessed: Timestamp::from_raw(raw.atime),
            modified: Timestamp::from_raw(raw.mtime),
            changed: Timestamp::from_raw(raw.ctime),
        }
    }

    pub const fn file_type(&self) -> FileType {
        self.type_flags.file_type()
    }

    /// The permission bits as conventional 4 digit octal, e.g. `0644` or `1755`.
    pub fn format_permissions(&self) -> String {
        format!("{:04o}", self.permission_bits)
    }

    /// The major number of [`device_type`](Self::device_type).
    ///
    /// This assumes an 8-bit minor number, which doesn't hold for every Unix (Linux packs
    /// larger minors into the upper bits too).
    pub const fn device_major(&self) -> u64 {
        self.device_type >> 8
    }

    /// The minor number of [`device_type`](Self::device_type), see
    /// [`device_major`](Self::device_major) for the limitations.
    pub const fn device_minor(&self) -> u64 {
        self.device_type & 0xff
    }

    /// The device type as `major,minor`, or `-,-` if the file isn't a device.
    pub fn format_device_type(&self) -> String {
        match self.device_type {
            0 => String::from("-,-"),
            _ => format!("{},{}", self.device_major(), self.device_minor()),
        }
    }

    /// The size with thousands separators, e.g. `1,048,576`.
    pub fn format_size(&self) -> String {
        util::group_thousands(self.size_bytes)
    }
}
