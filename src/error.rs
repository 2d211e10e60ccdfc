use crate::parse;
use std::fmt::{self, Display, Formatter};
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Parse(parse::Error),
    Read { path: PathBuf, source: io::Error },
    Write { path: PathBuf, source: io::Error },
    NoRoutePoints,
}

impl From<parse::Error> for Error {
    fn from(e: parse::Error) -> Self {
        Error::Parse(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "{e}"),
            Error::Read { path, source } => {
                write!(f, "couldn't read {}: {source}", path.display())
            }
            Error::Write { path, source } => {
                write!(f, "couldn't write {}: {source}", path.display())
            }
            Error::NoRoutePoints => write!(f, "No route points to emit, giving up."),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(e) => Some(e),
            Error::Read { source, .. } | Error::Write { source, .. } => Some(source),
            Error::NoRoutePoints => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
