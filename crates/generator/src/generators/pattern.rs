//! Pattern-based string generator.
//!
//! The pattern is a regular expression; each call produces a random string
//! the expression matches. Supported constructs:
//! - literals and escapes
//! - character classes (`[A-Z]`, `\d`, `.`, Unicode classes)
//! - groups and alternation (`(a|bc)`)
//! - repetition (`?`, `{n}`, `{n,m}`; `*`, `+` and `{n,}` are capped)
//!
//! Anchors and word boundaries are accepted and emit nothing.

use crate::generator::{Generator, GeneratorError};
use crate::value::{Record, Value};
use rand::{Rng, RngCore};
use regex_syntax::hir::{Class, Hir, HirKind};
use tracing::debug;

/// Extra iterations allowed for repetitions without an upper bound.
pub const MAX_UNBOUNDED_REPEAT: u32 = 8;

/// Generates strings matching a regular expression.
#[derive(Debug, Clone)]
pub struct PatternGenerator {
    pattern: String,
    root: Node,
}

/// Compiled form of the parsed expression.
#[derive(Debug, Clone)]
enum Node {
    Empty,
    Literal(String),
    Class { ranges: Vec<(char, char)>, size: u32 },
    Repeat { node: Box<Node>, min: u32, max: u32 },
    Concat(Vec<Node>),
    Alternation(Vec<Node>),
}

impl PatternGenerator {
    /// Parse `pattern` and prepare it for generation.
    ///
    /// Fails with [`GeneratorError::InvalidPattern`] when the pattern does
    /// not parse or contains a class that matches nothing.
    pub fn new(pattern: impl Into<String>) -> Result<Self, GeneratorError> {
        let pattern = pattern.into();
        let invalid = |message: String| GeneratorError::InvalidPattern {
            pattern: pattern.clone(),
            message,
        };

        let hir = regex_syntax::Parser::new()
            .parse(&pattern)
            .map_err(|e| invalid(e.to_string()))?;
        let root = compile(&hir).map_err(invalid)?;

        debug!(pattern = %pattern, "compiled pattern");
        Ok(Self { pattern, root })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Generate one matching string.
    pub fn generate_string(&self, rng: &mut dyn RngCore) -> String {
        let mut out = String::new();
        expand(&self.root, rng, &mut out);
        out
    }
}

impl Generator for PatternGenerator {
    fn generate(&self, rng: &mut dyn RngCore, _scope: &Record) -> Result<Value, GeneratorError> {
        Ok(Value::Text(self.generate_string(rng)))
    }
}

fn compile(hir: &Hir) -> Result<Node, String> {
    let node = match hir.kind() {
        HirKind::Empty | HirKind::Look(_) => Node::Empty,
        HirKind::Literal(literal) => Node::Literal(String::from_utf8_lossy(&literal.0).into_owned()),
        HirKind::Class(class) => {
            let ranges: Vec<(char, char)> = match class {
                Class::Unicode(unicode) => unicode
                    .ranges()
                    .iter()
                    .map(|r| (r.start(), r.end()))
                    .collect(),
                Class::Bytes(bytes) => bytes
                    .ranges()
                    .iter()
                    .map(|r| (char::from(r.start()), char::from(r.end())))
                    .collect(),
            };
            let ranges = split_surrogates(ranges);
            let size = ranges
                .iter()
                .map(|(start, end)| *end as u32 - *start as u32 + 1)
                .sum();
            if size == 0 {
                return Err("character class matches nothing".to_string());
            }
            Node::Class { ranges, size }
        }
        HirKind::Repetition(repetition) => {
            let max = repetition
                .max
                .unwrap_or_else(|| repetition.min.saturating_add(MAX_UNBOUNDED_REPEAT));
            Node::Repeat {
                node: Box::new(compile(&repetition.sub)?),
                min: repetition.min,
                max,
            }
        }
        HirKind::Capture(capture) => compile(&capture.sub)?,
        HirKind::Concat(subs) => Node::Concat(subs.iter().map(compile).collect::<Result<_, _>>()?),
        HirKind::Alternation(subs) => {
            Node::Alternation(subs.iter().map(compile).collect::<Result<_, _>>()?)
        }
    };
    Ok(node)
}

fn expand(node: &Node, rng: &mut dyn RngCore, out: &mut String) {
    match node {
        Node::Empty => {}
        Node::Literal(text) => out.push_str(text),
        Node::Class { ranges, size } => out.push(pick_from_class(ranges, *size, rng)),
        Node::Repeat { node, min, max } => {
            let count = rng.random_range(*min..=*max);
            for _ in 0..count {
                expand(node, rng, out);
            }
        }
        Node::Concat(nodes) => {
            for node in nodes {
                expand(node, rng, out);
            }
        }
        Node::Alternation(nodes) => {
            // regex-syntax never produces an empty alternation
            if !nodes.is_empty() {
                let branch = &nodes[rng.random_range(0..nodes.len())];
                expand(branch, rng, out);
            }
        }
    }
}

const BEFORE_SURROGATES: char = '\u{D7FF}';
const AFTER_SURROGATES: char = '\u{E000}';

/// Split ranges spanning the surrogate block so that every offset inside a
/// range is a valid `char`.
fn split_surrogates(ranges: Vec<(char, char)>) -> Vec<(char, char)> {
    let mut split = Vec::with_capacity(ranges.len() + 1);
    for (start, end) in ranges {
        if start <= BEFORE_SURROGATES && end >= AFTER_SURROGATES {
            split.push((start, BEFORE_SURROGATES));
            split.push((AFTER_SURROGATES, end));
        } else {
            split.push((start, end));
        }
    }
    split
}

/// Pick a code point uniformly over every code point in the class.
///
/// Ranges never contain surrogates, so every offset maps to a `char`.
fn pick_from_class(ranges: &[(char, char)], size: u32, rng: &mut dyn RngCore) -> char {
    let mut offset = rng.random_range(0..size);
    for (start, end) in ranges {
        let width = *end as u32 - *start as u32 + 1;
        if offset < width {
            return char::from_u32(*start as u32 + offset).unwrap_or(*start);
        }
        offset -= width;
    }
    ranges.first().map_or(' ', |(start, _)| *start)
}
