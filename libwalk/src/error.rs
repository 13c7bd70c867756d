use nix::errno::Errno;
use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::os::unix::ffi::OsStrExt;

#[derive(Debug, thiserror::Error)]
pub enum E {
    #[error("{}: {}", .path.to_string_lossy(), .eno.desc())]
    OpenDirError { path: OsString, eno: Errno },

    #[error("{}: {}", .dirpath.to_string_lossy(), .eno.desc())]
    ReadDirError {
        dirpath: OsString,
        entry_pos: usize,
        eno: Errno,
    },

    #[error("{}: {}", .path.to_string_lossy(), .eno.desc())]
    CloseDirError { path: OsString, eno: Errno },

    /// The record stream itself is broken. Fatal for the whole run.
    #[error("write error: {source}")]
    OutputError {
        #[from]
        source: std::io::Error,
    },
}

impl E {
    /// Opening something that turned out not to be a directory. Expected
    /// whenever an entry of unknown type is probed.
    pub fn is_not_a_directory(&self) -> bool {
        matches!(
            self,
            E::OpenDirError {
                eno: Errno::ENOTDIR,
                ..
            }
        )
    }

    /// The reader of the record stream went away, e.g. `walk | head -1`.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(
            self,
            E::OutputError { source } if source.kind() == std::io::ErrorKind::BrokenPipe
        )
    }

    /// Writes a `perror(3)` style line. Unlike `Display`, the path goes out
    /// as raw bytes.
    pub fn write_diagnostic<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        match self {
            E::OpenDirError { path, eno }
            | E::CloseDirError { path, eno }
            | E::ReadDirError {
                dirpath: path, eno, ..
            } => {
                w.write_all(path.as_bytes())?;
                writeln!(w, ": {}", eno.desc())
            }
            E::OutputError { source } => writeln!(w, "{}", source),
        }
    }
}

pub fn maybe_open_dir_error<V>(path: &OsStr, r: Result<V, Errno>) -> Result<V, E> {
    match r {
        Ok(v) => Ok(v),
        Err(e) => Err(E::OpenDirError {
            path: path.to_owned(),
            eno: e,
        }),
    }
}

pub fn maybe_readdir_error<V>(path: &OsStr, pos: usize, r: Result<V, Errno>) -> Result<V, E> {
    match r {
        Ok(v) => Ok(v),
        Err(e) => Err(E::ReadDirError {
            dirpath: path.to_owned(),
            entry_pos: pos,
            eno: e,
        }),
    }
}

pub fn maybe_close_dir_error<V>(path: &OsStr, r: Result<V, Errno>) -> Result<V, E> {
    r.map_err(|eno| E::CloseDirError {
        path: path.to_owned(),
        eno,
    })
}
