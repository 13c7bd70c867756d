use crate::dir::Dir;
use crate::error;
use crate::options::Separator;
use crate::pathstr;
use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::os::unix::ffi::OsStrExt;
use tracing::{debug, trace};

/// Outcome of walking one path. The discriminants are the exit codes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Ok = 0,
    /// Some I/O error was reported somewhere below the path.
    Failed = 1,
    /// The path exists but is not a directory.
    NotADirectory = 2,
}

impl Status {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Depth-first directory walker.
///
/// Paths go to `out`, one record each, ended by the separator. Errors that
/// only affect part of the tree are written to `diag` and folded into the
/// returned [`Status`]; the walk carries on with the siblings.
pub struct Walker<O: Write, D: Write> {
    out: O,
    diag: D,
    sep: Separator,
}

impl<O: Write, D: Write> Walker<O, D> {
    pub fn new(out: O, diag: D, sep: Separator) -> Walker<O, D> {
        Walker { out, diag, sep }
    }

    pub fn into_inner(self) -> (O, D) {
        (self.out, self.diag)
    }

    fn show(&mut self, path: &OsStr) -> Result<(), error::E> {
        self.out.write_all(path.as_bytes())?;
        self.out.write_all(&[self.sep.terminator()])?;
        Ok(())
    }

    fn report(&mut self, e: &error::E) {
        debug!(error = %e, "walk error");
        // like perror(3), a failing stderr is not itself reported
        let _ = e.write_diagnostic(&mut self.diag);
    }

    /// Prints every entry below `path` (but not `path` itself).
    ///
    /// Returns `NotADirectory` without any output when `path` can't be opened
    /// as a directory for that reason. `Err` only comes from `out`.
    pub fn walk(&mut self, path: &OsStr) -> Result<Status, error::E> {
        let mut d = match Dir::open(path) {
            Ok(d) => d,
            Err(e) if e.is_not_a_directory() => {
                trace!(path = ?path, "not a directory");
                return Ok(Status::NotADirectory);
            }
            Err(e) => {
                self.report(&e);
                return Ok(Status::Failed);
            }
        };

        trace!(path = ?path, "opened");

        let mut r = Status::Ok;
        for e in d.by_ref() {
            let e = match e {
                Ok(e) => e,
                Err(e) => {
                    self.report(&e);
                    r = Status::Failed;
                    break;
                }
            };

            if pathstr::is_dot_or_dotdot(e.file_name()) {
                continue;
            }

            let child = pathstr::join(path, e.file_name());
            self.show(&child)?;

            // Unknown types are probed by opening them; NotADirectory from
            // that probe is dropped here.
            if e.file_type().may_be_directory() && self.walk(&child)? == Status::Failed {
                r = Status::Failed;
            }
        }

        if let Err(e) = d.close() {
            self.report(&e);
            r = Status::Failed;
        }

        Ok(r)
    }

    /// Prints each root followed by everything below it. Returns the OR of
    /// the per-root status codes.
    pub fn walk_roots(&mut self, roots: &[OsString]) -> Result<u8, error::E> {
        let mut code = 0;
        for root in roots {
            debug!(root = ?root, "walking");
            self.show(root)?;
            let status = self.walk(root)?;
            debug!(root = ?root, ?status, "walked");
            code |= status.code();
        }

        self.out.flush()?;
        Ok(code)
    }
}
