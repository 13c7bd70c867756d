use clap::Parser;
use std::ffi::OsString;

/// What ends each printed path.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Separator {
    Newline,
    Nul,
}

impl Separator {
    pub fn terminator(self) -> u8 {
        match self {
            Separator::Newline => b'\n',
            Separator::Nul => b'\0',
        }
    }
}

#[derive(Clone, Debug, Parser)]
#[command(
    name = "walk",
    version,
    about = "Recursively walk the specified directories (or current directory, if none is specified)."
)]
pub struct Options {
    /// End each printed path with a NUL byte instead of a newline
    #[arg(short = '0', long)]
    pub null: bool,

    /// Directories to walk
    #[arg(value_name = "DIRECTORY")]
    pub dirs: Vec<OsString>,
}

impl Options {
    pub fn separator(&self) -> Separator {
        if self.null {
            Separator::Nul
        } else {
            Separator::Newline
        }
    }

    /// The roots to walk, `.` when none were given.
    pub fn roots(&self) -> Vec<OsString> {
        if self.dirs.is_empty() {
            vec![OsString::from(".")]
        } else {
            self.dirs.clone()
        }
    }
}

#[cfg(test)]
pub fn test_option(dirs: &[&str], null: bool) -> Options {
    Options {
        null,
        dirs: dirs.iter().map(OsString::from).collect(),
    }
}
