use std::error::Error as StdError;
use std::fmt;
use std::io;

/// The error type for fixture generation.
#[derive(Debug)]
pub enum Error {
    /// An error reported by the HDF5 library, surfaced unmodified.
    HDF5(hdf5::Error),
    /// A filesystem error raised outside of the HDF5 library.
    Io(io::Error),
    /// An error raised by this crate (invalid configuration, bad record data).
    Internal(String),
}

/// A type for results generated by this crate.
pub type Result<T, E = Error> = ::std::result::Result<T, E>;

impl Error {
    /// Returns true if the error originates from the HDF5 library.
    pub fn is_hdf5(&self) -> bool {
        matches!(self, Self::HDF5(_))
    }
}

impl From<hdf5::Error> for Error {
    fn from(err: hdf5::Error) -> Self {
        Self::HDF5(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<&str> for Error {
    fn from(desc: &str) -> Self {
        Self::Internal(desc.into())
    }
}

impl From<String> for Error {
    fn from(desc: String) -> Self {
        Self::Internal(desc)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::HDF5(err) => fmt::Display::fmt(err, f),
            Self::Io(err) => write!(f, "io error: {}", err),
            Self::Internal(desc) => f.write_str(desc),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::HDF5(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Internal(_) => None,
        }
    }
}

#[cfg(test)]
pub mod tests {
    use std::io;

    use super::{Error, Result};

    fn check_len(len: usize) -> Result<usize> {
        ensure!(len > 1, "length too small: {}", len);
        Ok(len)
    }

    fn always_fails() -> Result<()> {
        fail!("nope");
    }

    #[test]
    pub fn test_internal_from_macros() {
        assert_eq!(check_len(2).unwrap(), 2);
        assert_err!(check_len(1), "length too small: 1");
        assert_err!(always_fails(), "^nope$");
        assert!(!always_fails().unwrap_err().is_hdf5());
    }

    #[test]
    pub fn test_io_error() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.to_string(), "io error: gone");
        assert!(std::error::Error::source(&err).is_some());
    }
}
