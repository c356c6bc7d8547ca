use std::fmt::{self, Display, Formatter};

use super::{FileMetadata, Timestamp};

#[cfg(feature = "display")]
impl Display for Timestamp {
    /// Formats as `YYYY-MM-DD HH:MM:SS.nnnnnnnnn` in UTC.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let utc = u32::try_from(self.nanos)
            .ok()
            .and_then(|nanos| chrono::DateTime::<chrono::Utc>::from_timestamp(self.secs, nanos));

        match utc {
            Some(utc) => write!(f, "{}", utc.format("%Y-%m-%d %H:%M:%S%.9f")),
            None => write!(f, "{}.{:09}", self.secs, self.nanos),
        }
    }
}

#[cfg(not(feature = "display"))]
impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.secs, self.nanos)
    }
}

impl Display for FileMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let flags = &self.type_flags;

        writeln!(f, "Stat {} (", self.path.display())?;
        writeln!(f, "  device        : {}", self.device_id)?;
        writeln!(f, "  inode         : {}", self.inode)?;
        writeln!(f, "  protection    : {}", self.format_permissions())?;
        writeln!(f, "  hard links    : {}", self.link_count)?;
        writeln!(f, "  uid           : {}", self.owner_uid)?;
        writeln!(f, "  gid           : {}", self.owner_gid)?;
        writeln!(f, "  device type   : {}", self.format_device_type())?;
        writeln!(f, "  size          : {}", self.format_size())?;
        writeln!(f, "  block size    : {}", self.block_size)?;
        writeln!(f, "  blocks        : {}", self.block_count)?;
        writeln!(f, "  regular file? : {}", flags.regular)?;
        writeln!(f, "  directory?    : {}", flags.directory)?;
        writeln!(f, "  char device?  : {}", flags.char_device)?;
        writeln!(f, "  block device? : {}", flags.block_device)?;
        writeln!(f, "  fifo?         : {}", flags.fifo)?;
        writeln!(f, "  symlink?      : {}", flags.symlink)?;
        writeln!(f, "  socket?       : {}", flags.socket)?;
        writeln!(f, "  accessed      : {}", self.accessed)?;
        writeln!(f, "  modified      : {}", self.modified)?;
        writeln!(f, "  status change : {}", self.changed)?;
        write!(f, ")")
    }
}
