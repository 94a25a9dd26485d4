use core::fmt;
use derive_more::From;

#[derive(Debug,From)]
pub enum Error {
   #[from]
    Save(std::io::Error),
    /// character with no WinAnsiEncoding byte
    UnsupportedCharacter(char),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Save(e) => Some(e),
            Error::UnsupportedCharacter(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Save(e) => write!(f, "failed to save pdf: {e}"),
            Error::UnsupportedCharacter(ch) => write!(f, "character {ch:?} (U+{:04X}) is not available in WinAnsiEncoding", *ch as u32),
        }
    }
}
