use libc::c_int;

#[allow(clippy::unnecessary_cast)]
mod format {
    pub const S_IFMT: u32 = libc::S_IFMT as u32;
    pub const S_IFREG: u32 = libc::S_IFREG as u32;
    pub const S_IFDIR: u32 = libc::S_IFDIR as u32;
    pub const S_IFCHR: u32 = libc::S_IFCHR as u32;
    pub const S_IFBLK: u32 = libc::S_IFBLK as u32;
    pub const S_IFIFO: u32 = libc::S_IFIFO as u32;
    pub const S_IFLNK: u32 = libc::S_IFLNK as u32;
    pub const S_IFSOCK: u32 = libc::S_IFSOCK as u32;
}

pub(crate) use format::*;

/// Whether a query resolves symbolic links.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkMode {
    /// Report on the target of a link, like `stat`.
    #[default]
    Follow,
    /// Report on the link itself, like `lstat`.
    NoFollow,
}

impl LinkMode {
    pub const fn from_follow(follow_links: bool) -> LinkMode {
        if follow_links {
            LinkMode::Follow
        } else {
            LinkMode::NoFollow
        }
    }

    pub const fn follows(self) -> bool {
        matches!(self, LinkMode::Follow)
    }

    /// The value passed across the boundary: 0 to follow links, anything else not to.
    pub const fn discriminant(self) -> c_int {
        match self {
            LinkMode::Follow => 0,
            LinkMode::NoFollow => 1,
        }
    }
}

/// The side-channel record a boundary fills on success, with every field widened to a fixed size
/// regardless of the platform's `struct stat` layout.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RawStat {
    pub dev: u64,     // st_dev
    pub ino: u64,     // st_ino
    pub mode: u32,    // st_mode
    pub nlink: u64,   // st_nlink
    pub uid: u32,     // st_uid
    pub gid: u32,     // st_gid
    pub rdev: u64,    // st_rdev
    pub size: i64,    // st_size
    pub blksize: i64, // st_blksize
    pub blocks: i64,  // st_blocks
    pub atime: (i64, i64), // st_atime, st_atime_nsec
    pub mtime: (i64, i64), // st_mtime, st_mtime_nsec
    pub ctime: (i64, i64), // st_ctime, st_ctime_nsec
}

impl RawStat {
    /// The file type bits of `mode`, comparable against the `S_IF*` constants.
    pub const fn file_format(&self) -> u32 {
        self.mode & S_IFMT
    }

    #[allow(clippy::unnecessary_cast)]
    pub(crate) const fn from_stat(raw: &libc::stat) -> RawStat {
        RawStat {
            dev: raw.st_dev as u64,
            ino: raw.st_ino as u64,
            mode: raw.st_mode as u32,
            nlink: raw.st_nlink as u64,
            uid: raw.st_uid,
            gid: raw.st_gid,
            rdev: raw.st_rdev as u64,
            size: raw.st_size as i64,
            blksize: raw.st_blksize as i64,
            blocks: raw.st_blocks as i64,
            atime: (raw.st_atime as i64, raw.st_atime_nsec as i64),
            mtime: (raw.st_mtime as i64, raw.st_mtime_nsec as i64),
            ctime: (raw.st_ctime as i64, raw.st_ctime_nsec as i64),
        }
    }
}
