//! Extraction capabilities and the language registry
//!
//! An [`ExtractionCapability`] maps raw source bytes to function records for
//! one language. The built-in implementation, [`QueryCapability`], compiles a
//! [`SignatureGrammar`] once and runs its three queries per file. New languages
//! are added by registering another capability; the pipeline never switches on
//! the language itself.

use std::collections::BTreeMap;

use tree_sitter::{Language, Node, Parser, Query, QueryCursor, StreamingIterator};
use tracing::debug;

use crate::detectors::grammar::{grammar_for, SignatureGrammar};
use crate::error::{Result, SigSearchError};
use crate::lang::Lang;
use crate::schema::{FunctionRecord, Location};

/// Per-language function signature extraction
pub trait ExtractionCapability: Send + Sync {
    /// Language tag this capability handles
    fn lang(&self) -> Lang;

    /// Extract all function records from a source file
    ///
    /// Malformed regions yield no records. Source that is not UTF-8, or that
    /// produces no tree at all, is an error.
    fn extract(&self, path: &str, source: &[u8]) -> Result<Vec<FunctionRecord>>;
}

/// A compiled query plus the capture indices it is read through
struct RoleQuery {
    query: Query,
    func: u32,
    target: u32,
}

impl RoleQuery {
    fn compile(lang: Lang, language: &Language, source: &str, target: &str) -> Result<Self> {
        let query = Query::new(language, source).map_err(|e| SigSearchError::QueryCompile {
            lang: lang.name().to_string(),
            message: e.to_string(),
        })?;

        let func = capture_index(&query, lang, "func")?;
        let target = capture_index(&query, lang, target)?;

        Ok(Self {
            query,
            func,
            target,
        })
    }
}

fn capture_index(query: &Query, lang: Lang, name: &str) -> Result<u32> {
    query
        .capture_index_for_name(name)
        .ok_or_else(|| SigSearchError::QueryCompile {
            lang: lang.name().to_string(),
            message: format!("query has no @{} capture", name),
        })
}

/// Query-driven extraction over a tree-sitter grammar
pub struct QueryCapability {
    lang: Lang,
    language: Language,
    declaration: RoleQuery,
    inputs: RoleQuery,
    outputs: RoleQuery,
}

impl QueryCapability {
    /// Compile the built-in grammar for a language
    pub fn for_lang(lang: Lang) -> Result<Self> {
        Self::from_grammar(grammar_for(lang), lang.tree_sitter_language())
    }

    /// Compile an arbitrary grammar against a tree-sitter language
    pub fn from_grammar(grammar: &SignatureGrammar, language: Language) -> Result<Self> {
        let lang = grammar.lang;
        Ok(Self {
            lang,
            declaration: RoleQuery::compile(lang, &language, grammar.declaration, "name")?,
            inputs: RoleQuery::compile(lang, &language, grammar.inputs, "type")?,
            outputs: RoleQuery::compile(lang, &language, grammar.outputs, "type")?,
            language,
        })
    }

    fn parse(&self, source: &[u8]) -> Result<tree_sitter::Tree> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| SigSearchError::ParseFailure {
                message: format!("Failed to set language: {:?}", e),
            })?;

        parser
            .parse(source, None)
            .ok_or_else(|| SigSearchError::ParseFailure {
                message: "Failed to parse file".to_string(),
            })
    }
}

impl std::fmt::Debug for QueryCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryCapability")
            .field("lang", &self.lang)
            .finish_non_exhaustive()
    }
}

impl ExtractionCapability for QueryCapability {
    fn lang(&self) -> Lang {
        self.lang
    }

    fn extract(&self, path: &str, source: &[u8]) -> Result<Vec<FunctionRecord>> {
        let text = std::str::from_utf8(source).map_err(|e| SigSearchError::ParseFailure {
            message: format!("{} is not valid UTF-8: {}", path, e),
        })?;
        let source = text.as_bytes();

        let tree = self.parse(source)?;
        let root = tree.root_node();
        if root.has_error() {
            debug!(path, "syntax errors present, extracting well-formed declarations");
        }

        let mut records = Vec::new();
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&self.declaration.query, root, source);

        while let Some(m) = matches.next() {
            let func = m.nodes_for_capture_index(self.declaration.func).next();
            let name = m.nodes_for_capture_index(self.declaration.target).next();
            let (Some(func), Some(name)) = (func, name) else {
                continue;
            };

            let start = func.start_position();
            records.push(FunctionRecord {
                path: path.to_string(),
                location: Location {
                    row: start.row,
                    column: start.column,
                },
                name: node_text(name, text),
                args: collect_types(&self.inputs, func, text),
                rets: collect_types(&self.outputs, func, text),
            });
        }

        Ok(records)
    }
}

/// Run a type query scoped to one declaration, in source order
fn collect_types(role: &RoleQuery, decl: Node, text: &str) -> Vec<String> {
    let mut found: Vec<(usize, String)> = Vec::new();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&role.query, decl, text.as_bytes());

    while let Some(m) = matches.next() {
        let owned = m
            .nodes_for_capture_index(role.func)
            .any(|n| n.id() == decl.id());
        if !owned {
            continue;
        }
        for node in m.nodes_for_capture_index(role.target) {
            found.push((node.start_byte(), node_text(node, text)));
        }
    }

    found.sort_by_key(|(start, _)| *start);
    found.into_iter().map(|(_, text)| text).collect()
}

fn node_text(node: Node, text: &str) -> String {
    text.get(node.byte_range()).unwrap_or_default().to_string()
}

/// Mapping from language tag to extraction capability
#[derive(Default)]
pub struct CapabilityRegistry {
    capabilities: BTreeMap<Lang, Box<dyn ExtractionCapability>>,
}

impl CapabilityRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every built-in grammar compiled
    pub fn with_defaults() -> Result<Self> {
        let mut registry = Self::new();
        for lang in Lang::ALL {
            registry.register(Box::new(QueryCapability::for_lang(lang)?));
        }
        Ok(registry)
    }

    /// Register a capability, replacing any previous one for the same tag
    pub fn register(&mut self, capability: Box<dyn ExtractionCapability>) {
        self.capabilities.insert(capability.lang(), capability);
    }

    pub fn get(&self, lang: Lang) -> Result<&dyn ExtractionCapability> {
        self.capabilities
            .get(&lang)
            .map(|c| &**c)
            .ok_or_else(|| SigSearchError::UnsupportedLanguage {
                tag: lang.name().to_string(),
            })
    }

    pub fn supports(&self, lang: Lang) -> bool {
        self.capabilities.contains_key(&lang)
    }

    /// Registered tags in stable order
    pub fn languages(&self) -> Vec<Lang> {
        self.capabilities.keys().copied().collect()
    }

    /// Extract records from `source` with the capability for `lang`
    pub fn extract(&self, lang: Lang, path: &str, source: &[u8]) -> Result<Vec<FunctionRecord>> {
        self.get(lang)?.extract(path, source)
    }

    /// Same as [`Self::extract`] but resolving a textual language tag
    pub fn extract_tagged(&self, tag: &str, path: &str, source: &[u8]) -> Result<Vec<FunctionRecord>> {
        let lang = Lang::from_name(tag)?;
        self.extract(lang, path, source)
    }
}

impl std::fmt::Debug for CapabilityRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapabilityRegistry")
            .field("languages", &self.languages())
            .finish()
    }
}
