//! Parsers for the synsets and hypernyms text files.
//!
//! Synsets: `id,noun1 noun2 ...,gloss` with ids `0, 1, 2, ...` in file order.
//! The gloss may itself contain commas.
//!
//! Hypernyms: `id,hypernym1,hypernym2,...`, one directed edge
//! `id -> hypernym` per listed hypernym.
//!
//! Digraph: a bare graph with no synsets. Vertex count, edge count, then one
//! `v w` pair per edge, all whitespace-separated.
//!
//! Blank lines are skipped in every format; line numbers in errors are 1-based.

use std::path::Path;

use crate::error::ParseError;
use crate::graph::{Digraph, VertexId};

use super::index::WordIndex;

/// Result type for parsing.
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Parse synset lines into a [`WordIndex`].
pub fn parse_synsets(source_name: &str, text: &str) -> ParseResult<WordIndex> {
    let mut index = WordIndex::new();

    for (line_no, line) in numbered_lines(text) {
        let mut fields = line.splitn(3, ',');
        let id_field = fields.next().unwrap_or_default();
        let Some(nouns_field) = fields.next() else {
            return Err(ParseError::MalformedLine {
                source_name: source_name.to_string(),
                line: line_no,
                message: "missing noun field".into(),
            });
        };
        let gloss = fields.next().unwrap_or_default();

        let id = parse_id(source_name, line_no, id_field)?;
        let expected = index.synset_count();
        if id != expected {
            return Err(ParseError::NonDenseId {
                source_name: source_name.to_string(),
                line: line_no,
                expected,
                found: id,
            });
        }

        let nouns: Vec<String> = nouns_field.split_whitespace().map(str::to_string).collect();
        if nouns.is_empty() {
            return Err(ParseError::EmptySynset {
                source_name: source_name.to_string(),
                line: line_no,
                id,
            });
        }
        index.push_synset(nouns, gloss);
    }

    tracing::debug!(
        source = source_name,
        synsets = index.synset_count(),
        nouns = index.noun_count(),
        "parsed synsets"
    );
    Ok(index)
}

/// Parse hypernym lines into a digraph over `vertex_count` synsets.
pub fn parse_hypernyms(source_name: &str, text: &str, vertex_count: usize) -> ParseResult<Digraph> {
    let mut graph = Digraph::new(vertex_count);

    for (line_no, line) in numbered_lines(text) {
        let mut fields = line.split(',').map(str::trim).filter(|f| !f.is_empty());
        let Some(first) = fields.next() else {
            return Err(ParseError::MalformedLine {
                source_name: source_name.to_string(),
                line: line_no,
                message: "missing synset id".into(),
            });
        };
        let synset = parse_id(source_name, line_no, first)?;
        let edge_error = |source| ParseError::Edge {
            source_name: source_name.to_string(),
            line: line_no,
            source,
        };
        graph.check_vertex(synset).map_err(edge_error)?;

        for field in fields {
            let hypernym = parse_id(source_name, line_no, field)?;
            graph.add_edge(synset, hypernym).map_err(edge_error)?;
        }
    }

    tracing::debug!(
        source = source_name,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "parsed hypernyms"
    );
    Ok(graph)
}

/// Parse a bare digraph: `V`, `E`, then `E` pairs `v w` meaning `v -> w`.
pub fn parse_digraph(source_name: &str, text: &str) -> ParseResult<Digraph> {
    let last_line = text.lines().count().max(1);
    let mut tokens = numbered_lines(text)
        .flat_map(|(line_no, line)| line.split_whitespace().map(move |tok| (line_no, tok)));
    let mut next = |what: &str| match tokens.next() {
        Some((line_no, tok)) => parse_id(source_name, line_no, tok).map(|id| (line_no, id)),
        None => Err(ParseError::MalformedLine {
            source_name: source_name.to_string(),
            line: last_line,
            message: format!("unexpected end of input, expected {what}"),
        }),
    };

    let (_, vertex_count) = next("vertex count")?;
    let (_, edge_count) = next("edge count")?;
    let mut graph = Digraph::new(vertex_count);
    for _ in 0..edge_count {
        let (line_no, from) = next("edge source")?;
        let (_, to) = next("edge target")?;
        graph
            .add_edge(from, to)
            .map_err(|source| ParseError::Edge {
                source_name: source_name.to_string(),
                line: line_no,
                source,
            })?;
    }

    if let Some((line_no, tok)) = tokens.next() {
        return Err(ParseError::MalformedLine {
            source_name: source_name.to_string(),
            line: line_no,
            message: format!("unexpected `{tok}` after {edge_count} edges"),
        });
    }

    tracing::debug!(
        source = source_name,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "parsed digraph"
    );
    Ok(graph)
}

/// Read and parse a synsets file.
pub fn read_synsets(path: &Path) -> ParseResult<WordIndex> {
    let text = read(path)?;
    parse_synsets(&path.display().to_string(), &text)
}

/// Read and parse a hypernyms file.
pub fn read_hypernyms(path: &Path, vertex_count: usize) -> ParseResult<Digraph> {
    let text = read(path)?;
    parse_hypernyms(&path.display().to_string(), &text, vertex_count)
}

/// Read and parse a bare digraph file.
pub fn read_digraph(path: &Path) -> ParseResult<Digraph> {
    let text = read(path)?;
    parse_digraph(&path.display().to_string(), &text)
}

fn read(path: &Path) -> ParseResult<String> {
    std::fs::read_to_string(path).map_err(|e| ParseError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end()))
        .filter(|(_, line)| !line.is_empty())
}

fn parse_id(source_name: &str, line: usize, field: &str) -> ParseResult<VertexId> {
    field.trim().parse().map_err(|_| ParseError::InvalidId {
        source_name: source_name.to_string(),
        line,
        value: field.trim().to_string(),
    })
}
