//! Line boundary detection under a fixed newline convention

use crate::util::{Error, Result};
use crate::err;

/// Which byte sequence marks the end of a line.
/// Chosen once per run and passed to the transposer, rather than
/// baked in at compile time.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum NewlineMode {
    /// a lone LF
    Lf,
    /// a CR immediately followed by an LF
    #[default]
    CrLf,
    /// either a lone CR or a lone LF
    Any,
}

impl NewlineMode {
    /// new from string
    pub fn new(x: &str) -> Result<Self> {
        if x.eq_ignore_ascii_case("lf") || x.eq_ignore_ascii_case("unix") {
            Ok(Self::Lf)
        } else if x.eq_ignore_ascii_case("crlf") || x.eq_ignore_ascii_case("dos") {
            Ok(Self::CrLf)
        } else if x.eq_ignore_ascii_case("any") {
            Ok(Self::Any)
        } else {
            err!("newline mode must be one of 'lf', 'crlf' or 'any', not '{}'", x)
        }
    }

    /// If a line boundary starts at `pos`, return the number of bytes it
    /// occupies, else zero. Total over all inputs: any out of range `pos`
    /// is simply not a boundary.
    #[must_use]
    pub fn boundary_width(self, data: &[u8], pos: usize) -> usize {
        if pos >= data.len() {
            return 0;
        }
        match self {
            Self::Lf => usize::from(data[pos] == b'\n'),
            Self::CrLf => {
                if data[pos] == b'\r' && pos + 1 < data.len() && data[pos + 1] == b'\n' {
                    2
                } else {
                    0
                }
            }
            Self::Any => usize::from(data[pos] == b'\n' || data[pos] == b'\r'),
        }
    }

    /// the byte sequence ending each output line
    #[must_use]
    pub const fn terminator(self) -> &'static [u8] {
        match self {
            Self::CrLf => b"\r\n",
            Self::Lf | Self::Any => b"\n",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths() {
        let data = b"a\nb\r\nc\rd";
        assert_eq!(NewlineMode::Lf.boundary_width(data, 1), 1);
        assert_eq!(NewlineMode::Lf.boundary_width(data, 3), 0);
        assert_eq!(NewlineMode::Lf.boundary_width(data, 4), 1);
        assert_eq!(NewlineMode::CrLf.boundary_width(data, 3), 2);
        assert_eq!(NewlineMode::CrLf.boundary_width(data, 1), 0);
        assert_eq!(NewlineMode::CrLf.boundary_width(data, 6), 0); // lone CR
        assert_eq!(NewlineMode::Any.boundary_width(data, 1), 1);
        assert_eq!(NewlineMode::Any.boundary_width(data, 3), 1);
        assert_eq!(NewlineMode::Any.boundary_width(data, 6), 1);
    }

    #[test]
    fn total_function() {
        assert_eq!(NewlineMode::Lf.boundary_width(b"", 0), 0);
        assert_eq!(NewlineMode::CrLf.boundary_width(b"x", 17), 0);
        // CR as the very last byte can't start a CRLF pair
        assert_eq!(NewlineMode::CrLf.boundary_width(b"ab\r", 2), 0);
    }

    #[test]
    fn from_str() {
        assert_eq!(NewlineMode::new("LF").unwrap(), NewlineMode::Lf);
        assert_eq!(NewlineMode::new("dos").unwrap(), NewlineMode::CrLf);
        assert_eq!(NewlineMode::new("any").unwrap(), NewlineMode::Any);
        assert!(NewlineMode::new("mac").is_err());
    }

    #[test]
    fn terminators() {
        assert_eq!(NewlineMode::Lf.terminator(), b"\n");
        assert_eq!(NewlineMode::CrLf.terminator(), b"\r\n");
        assert_eq!(NewlineMode::Any.terminator(), b"\n");
    }
}
