use std::path::Path;

const QUOTE: char = '"';

/// Delimited text dialect of one report file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dialect {
    /// Tab separated values (default)
    #[default]
    Tab,
    /// Comma separated values, selected by a `.csv` file name
    Comma,
}

impl Dialect {
    /// Pick the dialect for an output file.
    ///
    /// Paths ending in `.csv` (any case) are comma separated, everything else
    /// is tab separated.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let name = path.as_ref().to_string_lossy().to_lowercase();
        if name.ends_with(".csv") {
            Dialect::Comma
        } else {
            Dialect::Tab
        }
    }

    /// Field delimiter character
    pub fn delimiter(&self) -> char {
        match self {
            Dialect::Tab => '\t',
            Dialect::Comma => ',',
        }
    }

    pub(crate) fn delimiter_byte(&self) -> u8 {
        self.delimiter() as u8
    }

    /// Make a text value safe for this dialect.
    ///
    /// Embedded quotes are doubled. The value is wrapped in quotes only if it
    /// contains the delimiter.
    pub fn sanitize(&self, raw: &str) -> String {
        let escaped = raw.replace(QUOTE, "\"\"");
        if escaped.contains(self.delimiter()) {
            format!("{QUOTE}{escaped}{QUOTE}")
        } else {
            escaped
        }
    }
}
