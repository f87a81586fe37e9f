use std::fs;
use std::io;
use std::path::Path;

/// The persisted light/dark choice. Stored as a one-line text file whose
/// content is `dark` or `light`; a missing file means [`Dark`](Self::Dark).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    /// Reads the preference from `path`. Anything other than `dark`
    /// (case-insensitive, surrounding whitespace ignored) means light.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Self::parse(&content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::Dark),
            Err(err) => Err(err),
        }
    }

    /// Writes the preference to `path`, creating the parent directory if
    /// needed.
    pub fn save<P: AsRef<Path>>(self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, format!("{}\n", self.as_str()))
    }

    fn parse(content: &str) -> Self {
        if content.trim().eq_ignore_ascii_case("dark") {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        };
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}
