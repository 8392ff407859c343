//! Rich diagnostic error types for wordnet-sap.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes, help text, and source chains so callers know exactly
//! what went wrong and how to fix it.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum WordNetError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Digraph(#[from] DigraphError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Sap(#[from] SapError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Lexicon(#[from] LexiconError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Outcast(#[from] OutcastError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Digraph errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum DigraphError {
    #[error("vertex {vertex} is out of range for a digraph with {vertex_count} vertices")]
    #[diagnostic(
        code(wordnet::digraph::out_of_range),
        help(
            "Vertex ids are dense integers in 0..{vertex_count}. \
             Check that every synset id and hypernym id refers to an existing synset."
        )
    )]
    VertexOutOfRange { vertex: usize, vertex_count: usize },
}

// ---------------------------------------------------------------------------
// Shortest-ancestral-path errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum SapError {
    #[error("empty {side} vertex set in ancestral path query")]
    #[diagnostic(
        code(wordnet::sap::empty_set),
        help("Both endpoints of a set-valued query need at least one vertex.")
    )]
    EmptyVertexSet { side: &'static str },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Digraph(#[from] DigraphError),
}

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum ValidationError {
    #[error("hypernym graph contains a directed cycle through vertex {vertex}")]
    #[diagnostic(
        code(wordnet::validate::cycle),
        help(
            "A taxonomy must be acyclic: no synset may be its own (transitive) hypernym. \
             Inspect the hypernym lines that mention vertex {vertex}."
        )
    )]
    CycleDetected { vertex: usize },

    #[error("hypernym graph must have exactly one root, found {count}")]
    #[diagnostic(
        code(wordnet::validate::root_count),
        help(
            "A root is a synset with no hypernyms that is itself a hypernym of something. \
             Candidate roots: {roots:?}. Connect them under a single most general synset."
        )
    )]
    InvalidRootCount { count: usize, roots: Vec<usize> },

    #[error("word index has {synsets} synsets but the hypernym graph has {vertices} vertices")]
    #[diagnostic(
        code(wordnet::validate::size_mismatch),
        help("Build the hypernym digraph with one vertex per synset.")
    )]
    VertexCountMismatch { synsets: usize, vertices: usize },
}

// ---------------------------------------------------------------------------
// Lexicon (word index) errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum LexiconError {
    #[error("unknown noun: \"{word}\"")]
    #[diagnostic(
        code(wordnet::lexicon::unknown_word),
        help(
            "The noun does not appear in any synset. Nouns are matched exactly, \
             with underscores in place of spaces (e.g. \"bald_eagle\")."
        )
    )]
    UnknownWord { word: String },

    #[error("empty noun in query")]
    #[diagnostic(
        code(wordnet::lexicon::empty_word),
        help("Provide a non-empty noun.")
    )]
    EmptyWord,

    #[error("synset {id} does not exist")]
    #[diagnostic(
        code(wordnet::lexicon::unknown_synset),
        help("Synset ids are dense integers starting at 0.")
    )]
    UnknownSynset { id: usize },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Sap(#[from] SapError),
}

// ---------------------------------------------------------------------------
// Input file errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    #[error("failed to read {path}")]
    #[diagnostic(
        code(wordnet::parse::io),
        help("Check that the file exists and is readable.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{source_name}:{line}: {message}")]
    #[diagnostic(
        code(wordnet::parse::malformed),
        help(
            "Synset lines look like `id,noun1 noun2,gloss`; \
             hypernym lines look like `id,hypernym1,hypernym2,...`; \
             digraph files hold `V`, `E`, then `E` pairs `v w`."
        )
    )]
    MalformedLine {
        source_name: String,
        line: usize,
        message: String,
    },

    #[error("{source_name}:{line}: invalid synset id \"{value}\"")]
    #[diagnostic(
        code(wordnet::parse::invalid_id),
        help("Synset ids must be non-negative integers.")
    )]
    InvalidId {
        source_name: String,
        line: usize,
        value: String,
    },

    #[error("{source_name}:{line}: expected synset id {expected}, found {found}")]
    #[diagnostic(
        code(wordnet::parse::non_dense),
        help("Synset ids must be assigned in file order as 0, 1, 2, ... without gaps.")
    )]
    NonDenseId {
        source_name: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{source_name}:{line}: synset {id} has no nouns")]
    #[diagnostic(
        code(wordnet::parse::empty_synset),
        help("Every synset needs at least one noun in its second field.")
    )]
    EmptySynset {
        source_name: String,
        line: usize,
        id: usize,
    },

    #[error("{source_name}:{line}: hypernym edge is invalid")]
    #[diagnostic(
        code(wordnet::parse::edge),
        help("Every id on a hypernym line must name a synset from the synsets file.")
    )]
    Edge {
        source_name: String,
        line: usize,
        #[source]
        source: DigraphError,
    },
}

// ---------------------------------------------------------------------------
// Outcast errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum OutcastError {
    #[error("outcast needs at least one noun, got an empty list")]
    #[diagnostic(
        code(wordnet::outcast::empty),
        help("Supply a non-empty list of nouns, e.g. a file with one or more words.")
    )]
    EmptyList,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Lexicon(#[from] LexiconError),
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config: {path}")]
    #[diagnostic(
        code(wordnet::config::read),
        help("Ensure the config file exists and is valid TOML.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {path}")]
    #[diagnostic(
        code(wordnet::config::parse),
        help("Check the TOML syntax: {message}")
    )]
    Parse { path: String, message: String },

    #[error("failed to write config: {path}")]
    #[diagnostic(
        code(wordnet::config::write),
        help("Ensure you have write permissions to the target directory.")
    )]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for functions returning wordnet-sap results.
pub type WordNetResult<T> = std::result::Result<T, WordNetError>;
