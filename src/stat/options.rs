use std::path::Path;

use super::FileMetadata;
use crate::errno::SyscallError;
use crate::native::{self, LibcBoundary, LinkMode, NativeBoundary, RawStat};

/// A builder for metadata queries, following links unless told otherwise.
///
/// ```no_run
/// use filestat::StatOptions;
///
/// let target = StatOptions::new().query("/usr/bin/cc")?;
/// let link = StatOptions::new().no_follow().query("/usr/bin/cc")?;
/// assert!(link.type_flags.symlink || !target.type_flags.symlink);
/// # Ok::<(), filestat::SyscallError>(())
/// ```
///
/// The boundary used to issue the syscalls can be swapped out with
/// [`with_boundary`](StatOptions::with_boundary), anything implementing [`NativeBoundary`] will do.
#[derive(Debug, Clone)]
pub struct StatOptions<B: NativeBoundary = LibcBoundary> {
    pub(crate) link_mode: LinkMode,
    pub(crate) boundary: B,
}

impl StatOptions<LibcBoundary> {
    pub const fn new() -> StatOptions<LibcBoundary> {
        StatOptions {
            link_mode: LinkMode::Follow,
            boundary: LibcBoundary,
        }
    }
}

impl Default for StatOptions<LibcBoundary> {
    fn default() -> Self {
        StatOptions::new()
    }
}

impl<B: NativeBoundary> StatOptions<B> {
    pub fn with_boundary<N: NativeBoundary>(self, boundary: N) -> StatOptions<N> {
        StatOptions {
            link_mode: self.link_mode,
            boundary,
        }
    }

    pub const fn link_mode(mut self, link_mode: LinkMode) -> Self {
        self.link_mode = link_mode;
        self
    }

    pub const fn follow_links(self, follow_links: bool) -> Self {
        self.link_mode(LinkMode::from_follow(follow_links))
    }

    /// Reports on symbolic links themselves rather than their targets, like `lstat`.
    pub const fn no_follow(self) -> Self {
        self.link_mode(LinkMode::NoFollow)
    }

    pub const fn follows_links(&self) -> bool {
        self.link_mode.follows()
    }

    pub const fn boundary(&self) -> &B {
        &self.boundary
    }

    /// Queries the metadata of `path`.
    ///
    /// # Panics
    /// Panics with an [`InternalConflictPanic`](crate::InternalConflictPanic) if the boundary
    /// breaks its return code contract.
    pub fn query<P: AsRef<Path>>(&self, path: P) -> Result<FileMetadata, SyscallError> {
        let path = path.as_ref();
        let raw = self.raw_query(path)?;
        Ok(FileMetadata::from_raw(path.to_path_buf(), &raw))
    }

    /// Queries the metadata of `path` into an existing record, reusing its path buffer.
    ///
    /// On success, every field of `target` is overwritten. On failure, `target` is left in an
    /// unspecified state.
    ///
    /// # Panics
    /// Panics with an [`InternalConflictPanic`](crate::InternalConflictPanic) if the boundary
    /// breaks its return code contract.
    pub fn query_into<P: AsRef<Path>>(
        &self,
        path: P,
        target: &mut FileMetadata,
    ) -> Result<(), SyscallError> {
        let path = path.as_ref();
        let raw = self.raw_query(path)?;

        let mut path_buf = std::mem::take(&mut target.path);
        let buf = path_buf.as_mut_os_string();
        buf.clear();
        buf.push(path.as_os_str());

        *target = FileMetadata::from_raw(path_buf, &raw);
        Ok(())
    }

    /// Checks whether `path` itself is a symbolic link, regardless of the configured link mode.
    ///
    /// # Panics
    /// Panics with an [`InternalConflictPanic`](crate::InternalConflictPanic) if the boundary
    /// breaks its return code contract.
    pub fn is_symlink<P: AsRef<Path>>(&self, path: P) -> Result<bool, SyscallError> {
        let path = path.as_ref();
        log::trace!("checking whether {} is a symlink", path.display());

        native::c_path(path)
            .and_then(|c_path| native::decode_symlink(self.boundary.symlink_check(&c_path)))
            .map_err(|e| e.with_path(path))
            .inspect_err(|e| log::debug!("{e}"))
    }

    fn raw_query(&self, path: &Path) -> Result<RawStat, SyscallError> {
        log::trace!("querying {} ({:?})", path.display(), self.link_mode);

        let mut raw = RawStat::default();
        native::c_path(path)
            .and_then(|c_path| {
                native::decode_stat(
                    self.boundary.stat(&c_path, self.link_mode.discriminant(), &mut raw),
                )
            })
            .map_err(|e| e.with_path(path))
            .inspect_err(|e| log::debug!("{e}"))?;
        Ok(raw)
    }
}

/// Queries the metadata of `path`, following symbolic links if `follow_links` is set.
///
/// # Panics
/// Panics if the native boundary breaks its contract, see [`StatOptions::query`].
pub fn query<P: AsRef<Path>>(path: P, follow_links: bool) -> Result<FileMetadata, SyscallError> {
    StatOptions::new().follow_links(follow_links).query(path)
}

/// Like [`query`], but into an existing record. See [`StatOptions::query_into`].
///
/// # Panics
/// Panics if the native boundary breaks its contract, see [`StatOptions::query`].
pub fn query_into<P: AsRef<Path>>(
    path: P,
    follow_links: bool,
    target: &mut FileMetadata,
) -> Result<(), SyscallError> {
    StatOptions::new().follow_links(follow_links).query_into(path, target)
}

/// Queries the metadata of `path`, following symbolic links.
///
/// # Panics
/// Panics if the native boundary breaks its contract, see [`StatOptions::query`].
pub fn stat<P: AsRef<Path>>(path: P) -> Result<FileMetadata, SyscallError> {
    StatOptions::new().query(path)
}

/// Queries the metadata of `path` without following a final symbolic link.
///
/// # Panics
/// Panics if the native boundary breaks its contract, see [`StatOptions::query`].
pub fn lstat<P: AsRef<Path>>(path: P) -> Result<FileMetadata, SyscallError> {
    StatOptions::new().no_follow().query(path)
}

/// Checks whether `path` itself is a symbolic link.
///
/// # Panics
/// Panics if the native boundary breaks its contract, see [`StatOptions::is_symlink`].
pub fn is_symlink<P: AsRef<Path>>(path: P) -> Result<bool, SyscallError> {
    StatOptions::new().is_symlink(path)
}
