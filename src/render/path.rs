// Copyright 2024-2026 Teleskope Contributors
// SPDX-License-Identifier: Apache-2.0

//! JSONPath-style extraction over untyped documents.
//!
//! Supported syntax: optional `$` root, dotted members (`a.b`), quoted
//! members (`['app.kubernetes.io/name']`), indices (`[0]`, `[-1]`),
//! wildcards (`[*]`, `.*`), and filters (`[?(@.type=='Ready')]`,
//! `[?(@.ready)]`). Recursive descent (`..`) is rejected.
//!
//! Results follow unwrapped semantics: no match is `None`, a single match is
//! returned as-is, several matches (from a wildcard or filter) are collected
//! into an array.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;
use thiserror::Error;

/// Reasons a path expression failed to parse.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error("Empty segment at offset {0}")]
    EmptySegment(usize),
    #[error("Unterminated bracket in '{0}'")]
    UnterminatedBracket(String),
    #[error("Invalid bracket expression: {0}")]
    InvalidBracket(String),
    #[error("Invalid filter expression: {0}")]
    InvalidFilter(String),
    #[error("Recursive descent is not supported")]
    RecursiveDescent,
}

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Field(String),
    Index(i64),
    Wildcard,
    Filter(Predicate),
}

#[derive(Debug, Clone, PartialEq)]
enum Comparison {
    Eq,
    Ne,
}

#[derive(Debug, Clone, PartialEq)]
struct Predicate {
    path: Vec<String>,
    comparison: Option<(Comparison, Value)>,
}

impl Predicate {
    fn test(&self, candidate: &Value) -> bool {
        let mut current = Some(candidate);
        for key in &self.path {
            current = current.and_then(|v| v.get(key.as_str()));
        }
        match (&self.comparison, current) {
            (None, Some(v)) => is_truthy(v),
            (None, None) => false,
            (Some((Comparison::Eq, want)), Some(v)) => v == want,
            (Some((Comparison::Eq, _)), None) => false,
            (Some((Comparison::Ne, want)), Some(v)) => v != want,
            (Some((Comparison::Ne, _)), None) => true,
        }
    }
}

/// Loose truthiness: null, false, zero, and the empty string are false.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn filter_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^@((?:\.[^.\s=!]+)*)\s*(?:(===?|!==?)\s*(.+?))?\s*$")
            .expect("filter pattern is a valid regex")
    })
}

/// A parsed path expression, reusable across documents.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonPath {
    segments: Vec<Segment>,
}

impl JsonPath {
    /// Parse a path expression.
    ///
    /// # Errors
    /// Returns `PathError` for malformed or unsupported syntax.
    pub fn parse(path: &str) -> Result<Self, PathError> {
        let trimmed = path.trim();
        let mut rest = trimmed.strip_prefix('$').unwrap_or(trimmed);
        let mut segments = Vec::new();
        let mut first = true;

        while !rest.is_empty() {
            let offset = trimmed.len() - rest.len();
            if let Some(inner) = rest.strip_prefix('[') {
                let (segment, remainder) = parse_bracket(inner)?;
                segments.push(segment);
                rest = remainder;
            } else {
                let member = match rest.strip_prefix('.') {
                    Some(r) => r,
                    None if first => rest,
                    None => return Err(PathError::EmptySegment(offset)),
                };
                if member.starts_with('.') {
                    return Err(PathError::RecursiveDescent);
                }
                let end = member.find(|c: char| c == '.' || c == '[').unwrap_or(member.len());
                let name = &member[..end];
                if name.is_empty() {
                    return Err(PathError::EmptySegment(offset));
                }
                segments.push(if name == "*" {
                    Segment::Wildcard
                } else {
                    Segment::Field(name.to_string())
                });
                rest = &member[end..];
            }
            first = false;
        }

        Ok(Self { segments })
    }

    /// Evaluate against a document. Never fails; unresolved paths yield `None`.
    pub fn evaluate(&self, document: &Value) -> Option<Value> {
        let mut current: Vec<&Value> = vec![document];

        for segment in &self.segments {
            let mut next = Vec::new();
            for value in current {
                match segment {
                    Segment::Field(name) => next.extend(value.get(name.as_str())),
                    Segment::Index(index) => next.extend(index_into(value, *index)),
                    Segment::Wildcard => next.extend(children(value)),
                    Segment::Filter(predicate) => {
                        next.extend(children(value).filter(|child| predicate.test(child)))
                    }
                }
            }
            if next.is_empty() {
                return None;
            }
            current = next;
        }

        match current.as_slice() {
            [] => None,
            [single] => Some((*single).clone()),
            many => Some(Value::Array(many.iter().map(|v| (*v).clone()).collect())),
        }
    }
}

impl FromStr for JsonPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Evaluate `path` against `document`.
///
/// Unparseable paths and paths that do not resolve both yield `None`.
pub fn extract(document: &Value, path: &str) -> Option<Value> {
    match JsonPath::parse(path) {
        Ok(compiled) => compiled.evaluate(document),
        Err(e) => {
            tracing::trace!(path, error = %e, "Unparseable path expression");
            None
        }
    }
}

fn children(value: &Value) -> Box<dyn Iterator<Item = &Value> + '_> {
    match value {
        Value::Array(items) => Box::new(items.iter()),
        Value::Object(map) => Box::new(map.values()),
        _ => Box::new(std::iter::empty()),
    }
}

fn index_into(value: &Value, index: i64) -> Option<&Value> {
    let items = value.as_array()?;
    let resolved = if index < 0 {
        items.len().checked_sub(usize::try_from(index.unsigned_abs()).ok()?)?
    } else {
        usize::try_from(index).ok()?
    };
    items.get(resolved)
}

fn parse_bracket(inner: &str) -> Result<(Segment, &str), PathError> {
    if let Some(expr_start) = inner.strip_prefix("?(") {
        let close = expr_start
            .find(")]")
            .ok_or_else(|| PathError::UnterminatedBracket(inner.to_string()))?;
        let predicate = parse_predicate(&expr_start[..close])?;
        return Ok((Segment::Filter(predicate), &expr_start[close + 2..]));
    }

    if let Some(quote) = inner.chars().next().filter(|c| *c == '\'' || *c == '"') {
        let body = &inner[1..];
        let close = body
            .find(quote)
            .ok_or_else(|| PathError::UnterminatedBracket(inner.to_string()))?;
        let after = body[close + 1..]
            .strip_prefix(']')
            .ok_or_else(|| PathError::InvalidBracket(inner.to_string()))?;
        return Ok((Segment::Field(body[..close].to_string()), after));
    }

    let close = inner
        .find(']')
        .ok_or_else(|| PathError::UnterminatedBracket(inner.to_string()))?;
    let token = inner[..close].trim();
    let segment = if token == "*" {
        Segment::Wildcard
    } else {
        token
            .parse::<i64>()
            .map(Segment::Index)
            .map_err(|_| PathError::InvalidBracket(token.to_string()))?
    };
    Ok((segment, &inner[close + 1..]))
}

fn parse_predicate(expr: &str) -> Result<Predicate, PathError> {
    let captures = filter_pattern()
        .captures(expr.trim())
        .ok_or_else(|| PathError::InvalidFilter(expr.to_string()))?;

    let path = captures
        .get(1)
        .map(|m| {
            m.as_str()
                .split('.')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let comparison = match (captures.get(2), captures.get(3)) {
        (Some(op), Some(literal)) => {
            let comparison = if op.as_str().starts_with('!') {
                Comparison::Ne
            } else {
                Comparison::Eq
            };
            Some((comparison, parse_literal(literal.as_str())?))
        }
        _ => None,
    };

    Ok(Predicate { path, comparison })
}

fn parse_literal(literal: &str) -> Result<Value, PathError> {
    let literal = literal.trim();
    for quote in ['\'', '"'] {
        if let Some(body) = literal
            .strip_prefix(quote)
            .and_then(|s| s.strip_suffix(quote))
        {
            return Ok(Value::String(body.to_string()));
        }
    }
    serde_json::from_str(literal).map_err(|_| PathError::InvalidFilter(literal.to_string()))
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
