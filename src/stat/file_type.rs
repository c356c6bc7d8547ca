use crate::native::{S_IFBLK, S_IFCHR, S_IFDIR, S_IFIFO, S_IFLNK, S_IFMT, S_IFREG, S_IFSOCK};

/// The type of a file as seven independent flags, one per `S_IS*` test.
///
/// Nothing forces at most one flag to be set, the kernel's answer is taken as it is. Use
/// [`TypeFlags::file_type`] for a single, checked value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeFlags {
    pub regular: bool,
    pub directory: bool,
    pub char_device: bool,
    pub block_device: bool,
    pub fifo: bool,
    pub symlink: bool,
    pub socket: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    Regular,
    Directory,
    CharDevice,
    BlockDevice,
    Fifo,
    Symlink,
    Socket,
    /// Either no flag is set or more than one is.
    Other,
}

impl TypeFlags {
    pub const fn from_mode(st_mode: u32) -> TypeFlags {
        let format = st_mode & S_IFMT;
        TypeFlags {
            regular: format == S_IFREG,
            directory: format == S_IFDIR,
            char_device: format == S_IFCHR,
            block_device: format == S_IFBLK,
            fifo: format == S_IFIFO,
            symlink: format == S_IFLNK,
            socket: format == S_IFSOCK,
        }
    }

    /// The number of flags that are set.
    pub const fn count(&self) -> usize {
        self.regular as usize
            + self.directory as usize
            + self.char_device as usize
            + self.block_device as usize
            + self.fifo as usize
            + self.symlink as usize
            + self.socket as usize
    }

    pub const fn file_type(&self) -> FileType {
        if self.count() != 1 {
            return FileType::Other;
        }

        match *self {
            TypeFlags { regular: true, .. } => FileType::Regular,
            TypeFlags { directory: true, .. } => FileType::Directory,
            TypeFlags { char_device: true, .. } => FileType::CharDevice,
            TypeFlags { block_device: true, .. } => FileType::BlockDevice,
            TypeFlags { fifo: true, .. } => FileType::Fifo,
            TypeFlags { symlink: true, .. } => FileType::Symlink,
            TypeFlags { socket: true, .. } => FileType::Socket,
            _ => FileType::Other,
        }
    }
}
