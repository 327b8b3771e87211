//! Language detection and tree-sitter grammar loading

use std::path::Path;
use tree_sitter::Language;

use crate::error::{Result, SigSearchError};

/// Language tags known to the search engine
///
/// A tag being known does not imply an extraction capability is registered
/// for it; see [`crate::detectors::CapabilityRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Lang {
    Go,
    Rust,
    Python,
    TypeScript,
    Tsx,
    Java,
}

impl Lang {
    /// All language tags, in registry order
    pub const ALL: [Lang; 6] = [
        Self::Go,
        Self::Rust,
        Self::Python,
        Self::TypeScript,
        Self::Tsx,
        Self::Java,
    ];

    /// Detect language from file path extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| SigSearchError::UnsupportedLanguage {
                tag: "none".to_string(),
            })?;

        Self::from_extension(ext)
    }

    /// Detect language from file extension string
    pub fn from_extension(ext: &str) -> Result<Self> {
        let lower = ext.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.extensions().contains(&lower.as_str()))
            .ok_or_else(|| SigSearchError::UnsupportedLanguage {
                tag: ext.to_string(),
            })
    }

    /// Resolve a language tag by its canonical name (`golang` is accepted as an alias of `go`)
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "go" | "golang" => Ok(Self::Go),
            "rust" => Ok(Self::Rust),
            "python" => Ok(Self::Python),
            "typescript" => Ok(Self::TypeScript),
            "tsx" => Ok(Self::Tsx),
            "java" => Ok(Self::Java),
            _ => Err(SigSearchError::UnsupportedLanguage {
                tag: name.to_string(),
            }),
        }
    }

    /// Get the canonical name of the language
    pub fn name(&self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Rust => "rust",
            Self::Python => "python",
            Self::TypeScript => "typescript",
            Self::Tsx => "tsx",
            Self::Java => "java",
        }
    }

    /// Get the tree-sitter Language for parsing
    pub fn tree_sitter_language(&self) -> Language {
        match self {
            Self::Go => tree_sitter_go::LANGUAGE.into(),
            Self::Rust => tree_sitter_rust::LANGUAGE.into(),
            Self::Python => tree_sitter_python::LANGUAGE.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            Self::Java => tree_sitter_java::LANGUAGE.into(),
        }
    }

    /// File extensions mapped to this language by [`Self::from_extension`]
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Go => &["go"],
            Self::Rust => &["rs"],
            Self::Python => &["py", "pyi"],
            Self::TypeScript => &["ts", "mts", "cts"],
            Self::Tsx => &["tsx"],
            Self::Java => &["java"],
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
