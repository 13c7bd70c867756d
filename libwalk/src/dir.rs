use crate::error;
use nix::errno::Errno;
use nix::libc;
use std::ffi::{CStr, CString, OsStr, OsString};
use std::os::unix::ffi::{OsStrExt, OsStringExt};
use std::ptr::NonNull;

/// Entry type as reported by `readdir(3)`. Only a hint: `Unknown` means the
/// filesystem did not say, and the entry has to be opened to find out.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Type {
    File,
    Directory,
    Unknown,
    Other,
}

impl Type {
    fn from_d_type(t: u8) -> Type {
        match t {
            libc::DT_REG => Type::File,
            libc::DT_DIR => Type::Directory,
            libc::DT_UNKNOWN => Type::Unknown,
            _ => Type::Other,
        }
    }

    pub fn may_be_directory(self) -> bool {
        matches!(self, Type::Directory | Type::Unknown)
    }
}

#[derive(Debug)]
pub struct Entry {
    name: OsString,
    file_type: Type,
}

impl Entry {
    pub fn file_name(&self) -> &OsStr {
        &self.name
    }

    pub fn file_type(&self) -> Type {
        self.file_type
    }
}

/// An open directory stream.
///
/// Iterating yields every entry, `.` and `..` included. A read error ends the
/// iteration. [`Dir::close`] reports a failing `closedir(3)`; a stream that is
/// dropped without being closed is still closed, silently.
pub struct Dir {
    path: OsString,
    dirp: Option<NonNull<libc::DIR>>,
    pos: usize,
    failed: bool,
}

impl Dir {
    pub fn open(path: &OsStr) -> Result<Dir, error::E> {
        let r = CString::new(path.as_bytes())
            .map_err(|_| Errno::EINVAL)
            .and_then(|cpath| {
                // SAFETY: cpath is a valid NUL-terminated string that outlives the call.
                let p = unsafe { libc::opendir(cpath.as_ptr()) };
                NonNull::new(p).ok_or_else(Errno::last)
            });
        let dirp = error::maybe_open_dir_error(path, r)?;

        Ok(Dir {
            path: path.to_owned(),
            dirp: Some(dirp),
            pos: 0,
            failed: false,
        })
    }

    fn read_entry(&mut self) -> Result<Option<Entry>, Errno> {
        let dirp = match self.dirp {
            Some(d) => d,
            None => return Ok(None),
        };

        // readdir signals errors only through errno, and leaves it untouched
        // at end of stream.
        Errno::clear();
        // SAFETY: dirp came from opendir and is closed only when taken out of
        // self.dirp, so it is still open here.
        let ent = unsafe { libc::readdir(dirp.as_ptr()) };
        if ent.is_null() {
            return match Errno::last() {
                Errno::UnknownErrno => Ok(None),
                eno => Err(eno),
            };
        }

        // SAFETY: a non-null readdir result points at a dirent that stays valid
        // until the next readdir/closedir on this stream, and d_name is
        // NUL-terminated. The name is copied out before returning.
        let ent = unsafe { &*ent };
        let name = unsafe { CStr::from_ptr(ent.d_name.as_ptr()) };
        Ok(Some(Entry {
            name: OsString::from_vec(name.to_bytes().to_vec()),
            file_type: Type::from_d_type(ent.d_type),
        }))
    }

    pub fn close(mut self) -> Result<(), error::E> {
        match self.dirp.take() {
            Some(d) => {
                // SAFETY: take() leaves None behind, so the stream is closed
                // exactly once and Drop won't touch it again.
                let r = Errno::result(unsafe { libc::closedir(d.as_ptr()) }).map(drop);
                error::maybe_close_dir_error(&self.path, r)
            }
            None => Ok(()),
        }
    }
}

impl Iterator for Dir {
    type Item = Result<Entry, error::E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let pos = self.pos;
        let r = self.read_entry();
        match error::maybe_readdir_error(&self.path, pos, r) {
            Ok(Some(e)) => {
                self.pos += 1;
                Some(Ok(e))
            }
            Ok(None) => None,
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl Drop for Dir {
    fn drop(&mut self) {
        if let Some(d) = self.dirp.take() {
            // SAFETY: still open, close() was not called.
            unsafe {
                libc::closedir(d.as_ptr());
            }
        }
    }
}
