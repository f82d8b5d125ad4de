//! Font resolution and terminal-cell text measurement.
//!
//! Every face renders into monospaced terminal cells, so a [`Font`] is mostly
//! an identity: what it contributes is the measurement rules.  A glyph
//! advances by its Unicode display width and a line is one font-size tall.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::error::SceneError;
use crate::geometry::Size;

/// Resource path of the monospace face every terminal library provides.
pub const BUILTIN_MONO: &str = "builtin:mono";

const FONT_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc"];

/// A resolved font face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    path: Arc<str>,
}

impl Font {
    fn new(path: &str) -> Self {
        Self { path: path.into() }
    }

    /// The resource path this face was resolved from.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Lay out `text` at `size`, wrapping at `wrap_width` when given.
    pub fn measure(&self, text: &str, size: f32, wrap_width: Option<f32>) -> TextLayout {
        let max_columns = wrap_width.map(|w| (w.floor() as usize).max(1));
        let mut lines = Vec::new();
        for line in text.split('\n') {
            match max_columns {
                Some(max) => wrap_line(line, max, &mut lines),
                None => lines.push(line.trim_end().to_string()),
            }
        }

        let widest = lines.iter().map(|l| l.width()).max().unwrap_or(0);
        TextLayout {
            size: Size::new(widest as f32, lines.len() as f32 * size),
            lines,
        }
    }
}

/// The result of measuring a piece of text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextLayout {
    /// Wrapped lines, top to bottom.  Never empty once measured.
    pub lines: Vec<String>,
    /// Rendered extent: widest line by line count times font size.
    pub size: Size,
}

fn wrap_line(line: &str, max: usize, out: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width = 0;

    for word in line.split_inclusive(' ') {
        let visible = word.trim_end_matches(' ').width();
        if current_width > 0 && current_width + visible > max {
            out.push(current.trim_end().to_string());
            current.clear();
            current_width = 0;
        }

        if visible > max {
            // Longer than a whole line: break between characters.
            for ch in word.chars() {
                let cw = ch.width().unwrap_or(0);
                if current_width > 0 && current_width + cw > max {
                    out.push(current.trim_end().to_string());
                    current.clear();
                    current_width = 0;
                }
                current.push(ch);
                current_width += cw;
            }
            continue;
        }

        current.push_str(word);
        current_width += word.width();
    }

    out.push(current.trim_end().to_string());
}

/// Resolves font resource paths into [`Font`]s.
///
/// A path resolves when it has been [registered](FontLibrary::register), or
/// when it names an existing font file, either as given or relative to one of
/// the search directories.
#[derive(Debug, Clone, Default)]
pub struct FontLibrary {
    registered: HashMap<String, Font>,
    search_dirs: Vec<PathBuf>,
}

impl FontLibrary {
    /// An empty library that resolves nothing but files on disk.
    pub fn new() -> Self {
        Self::default()
    }

    /// A library with the built-in monospace face registered.
    pub fn terminal() -> Self {
        let mut library = Self::new();
        library.register(BUILTIN_MONO);
        library
    }

    /// Add a directory to search for relative font paths.
    pub fn with_search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dirs.push(dir.into());
        self
    }

    /// Make `path` resolvable without touching the filesystem.
    pub fn register(&mut self, path: impl Into<String>) {
        let path = path.into();
        let font = Font::new(&path);
        self.registered.insert(path, font);
    }

    /// Resolve `path` into a font.
    pub fn resolve(&self, path: &str) -> Result<Font, SceneError> {
        if let Some(font) = self.registered.get(path) {
            return Ok(font.clone());
        }

        let direct = Path::new(path);
        let found = std::iter::once(direct.to_path_buf())
            .chain(self.search_dirs.iter().map(|dir| dir.join(direct)))
            .any(|candidate| is_font_file(&candidate));
        if found {
            return Ok(Font::new(path));
        }

        tracing::warn!(path, "font resource unavailable");
        Err(SceneError::FontUnavailable {
            path: path.to_string(),
        })
    }
}

fn is_font_file(path: &Path) -> bool {
    let known_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            FONT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        });
    known_extension && path.is_file()
}
