/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Client-router path patterns.
//!
//! A pattern is a `/`-separated list of segments. Each segment is either
//! static text (`/spotify/callback`) or a named param such as `:id`,
//! `:id(\d+)`, `:tab?`, `:chapters+` or the wildcard capture
//! `:pathMatch(.*)*`.
//!
//! Patterns compile to a single anchored [`Regex`]. Matching ignores case and
//! tolerates a trailing slash.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use regex::{Regex, RegexBuilder};
use thiserror::Error;

const DEFAULT_SEGMENT: &str = "[^/]+";
const WILDCARD: &str = ".*";
const SHADOW_SAMPLES: &[&str] = &["/", "/x", "/Deeply/nested/path", "/with%20escapes/and.dots/"];

/// Params captured by a successful match, keyed by param name.
pub type Params = BTreeMap<String, ParamValue>;

/// Errors raised while parsing a pattern or building a path from one.
#[derive(Debug, Clone, Error)]
pub enum PatternError {
    #[error("pattern `{0}` must start with `/`")]
    MissingLeadingSlash(String),

    #[error("pattern `{0}` contains a param without a name")]
    EmptyParamName(String),

    #[error("pattern `{0}` has an unclosed `(` in a param regex")]
    UnbalancedGroup(String),

    #[error("pattern `{pattern}` has unexpected `{found}` after a param")]
    UnexpectedChar { pattern: String, found: char },

    #[error("pattern `{pattern}` declares param `{name}` more than once")]
    DuplicateParam { pattern: String, name: String },

    #[error("param `{name}` has an invalid regex: {source}")]
    InvalidRegex {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("pattern `{pattern}` failed to compile: {source}")]
    Compile {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("missing required param `{0}`")]
    MissingParam(String),

    #[error("param `{0}` is not repeatable but was given several segments")]
    NotRepeatable(String),
}

/// Value of a captured param.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Single(String),
    /// Produced by `*` and `+` params, one entry per path segment.
    Repeated(Vec<String>),
}

impl ParamValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Single(value) => Some(value),
            ParamValue::Repeated(_) => None,
        }
    }

    pub fn segments(&self) -> Vec<&str> {
        match self {
            ParamValue::Single(value) => vec![value.as_str()],
            ParamValue::Repeated(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Single(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Single(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::Repeated(values)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Modifier {
    One,
    Optional,
    ZeroOrMore,
    OneOrMore,
}

impl Modifier {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '?' => Some(Modifier::Optional),
            '*' => Some(Modifier::ZeroOrMore),
            '+' => Some(Modifier::OneOrMore),
            _ => None,
        }
    }

    fn is_repeatable(self) -> bool {
        matches!(self, Modifier::ZeroOrMore | Modifier::OneOrMore)
    }

    fn is_required(self) -> bool {
        matches!(self, Modifier::One | Modifier::OneOrMore)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Static(String),
    Param {
        name: String,
        regex: Option<String>,
        modifier: Modifier,
    },
}

/// A parsed, compiled path pattern.
#[derive(Debug, Clone)]
pub struct PathPattern {
    source: String,
    tokens: Vec<Token>,
    matcher: Regex,
}

impl PathPattern {
    pub fn parse(source: &str) -> Result<Self, PatternError> {
        let body = source
            .strip_prefix('/')
            .ok_or_else(|| PatternError::MissingLeadingSlash(source.to_string()))?;
        let tokens = tokenize(source, body)?;

        let mut seen = HashSet::new();
        for token in &tokens {
            if let Token::Param { name, regex, .. } = token {
                if !seen.insert(name.as_str()) {
                    return Err(PatternError::DuplicateParam {
                        pattern: source.to_string(),
                        name: name.clone(),
                    });
                }
                if let Some(regex) = regex {
                    Regex::new(regex).map_err(|err| PatternError::InvalidRegex {
                        name: name.clone(),
                        source: err,
                    })?;
                }
            }
        }

        let matcher = RegexBuilder::new(&compile(&tokens))
            .case_insensitive(true)
            .build()
            .map_err(|err| PatternError::Compile {
                pattern: source.to_string(),
                source: err,
            })?;

        Ok(Self {
            source: source.to_string(),
            tokens,
            matcher,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Matches a bare path (no query, no hash) and returns the captured params.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let captures = self.matcher.captures(path)?;
        let mut params = Params::new();
        for (index, token) in self.tokens.iter().enumerate() {
            let Token::Param { name, modifier, .. } = token else {
                continue;
            };
            let Some(raw) = captures.name(&group_name(index)) else {
                continue;
            };
            let value = if modifier.is_repeatable() {
                ParamValue::Repeated(split_segments(raw.as_str()))
            } else {
                ParamValue::Single(decode(raw.as_str()))
            };
            params.insert(name.clone(), value);
        }
        Some(params)
    }

    /// True when the pattern matches every path and therefore shadows anything
    /// declared after it: a lone `.*` param with any modifier, or any pattern
    /// that accepts the root, a single segment and a nested path alike.
    pub fn is_catch_all(&self) -> bool {
        let wildcard_param = matches!(
            self.tokens.as_slice(),
            [Token::Param { regex: Some(regex), .. }] if regex == WILDCARD
        );
        wildcard_param || SHADOW_SAMPLES.iter().all(|path| self.matcher.is_match(path))
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter_map(|token| match token {
            Token::Param { name, .. } => Some(name.as_str()),
            Token::Static(_) => None,
        })
    }

    /// Builds a concrete path from `params`, percent-encoding each segment.
    pub fn build(&self, params: &Params) -> Result<String, PatternError> {
        let mut path = String::new();
        for token in &self.tokens {
            match token {
                Token::Static(text) => {
                    path.push('/');
                    path.push_str(text);
                }
                Token::Param { name, modifier, .. } => {
                    let segments: Vec<&str> = params
                        .get(name)
                        .map(ParamValue::segments)
                        .unwrap_or_default()
                        .into_iter()
                        .filter(|segment| !segment.is_empty())
                        .collect();
                    if segments.len() > 1 && !modifier.is_repeatable() {
                        return Err(PatternError::NotRepeatable(name.clone()));
                    }
                    if segments.is_empty() && modifier.is_required() {
                        return Err(PatternError::MissingParam(name.clone()));
                    }
                    for segment in segments {
                        path.push('/');
                        path.push_str(&urlencoding::encode(segment));
                    }
                }
            }
        }
        if path.is_empty() {
            path.push('/');
        }
        Ok(path)
    }
}

impl PartialEq for PathPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for PathPattern {}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn tokenize(pattern: &str, body: &str) -> Result<Vec<Token>, PatternError> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '/' => flush_literal(&mut literal, &mut tokens),
            ':' if literal.is_empty() => {
                let mut name = String::new();
                while let Some(&next) = chars.peek() {
                    if next.is_ascii_alphanumeric() || next == '_' {
                        name.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                if name.is_empty() {
                    return Err(PatternError::EmptyParamName(pattern.to_string()));
                }

                let regex = if chars.peek() == Some(&'(') {
                    chars.next();
                    Some(read_group(pattern, &mut chars)?)
                } else {
                    None
                };

                let modifier = match chars.peek().copied().and_then(Modifier::from_char) {
                    Some(modifier) => {
                        chars.next();
                        modifier
                    }
                    None => Modifier::One,
                };

                // A param always owns its whole segment.
                match chars.peek() {
                    None | Some('/') => {}
                    Some(&found) => {
                        return Err(PatternError::UnexpectedChar {
                            pattern: pattern.to_string(),
                            found,
                        })
                    }
                }

                tokens.push(Token::Param {
                    name,
                    regex,
                    modifier,
                });
            }
            '\\' => {
                if let Some(escaped) = chars.next() {
                    literal.push(escaped);
                }
            }
            other => literal.push(other),
        }
    }
    flush_literal(&mut literal, &mut tokens);

    Ok(tokens)
}

fn flush_literal(literal: &mut String, tokens: &mut Vec<Token>) {
    if !literal.is_empty() {
        tokens.push(Token::Static(std::mem::take(literal)));
    }
}

fn read_group(pattern: &str, chars: &mut Peekable<Chars<'_>>) -> Result<String, PatternError> {
    let mut depth = 1usize;
    let mut group = String::new();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                group.push(c);
                if let Some(escaped) = chars.next() {
                    group.push(escaped);
                }
            }
            '(' => {
                depth += 1;
                group.push(c);
            }
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(group);
                }
                group.push(c);
            }
            _ => group.push(c),
        }
    }
    Err(PatternError::UnbalancedGroup(pattern.to_string()))
}

fn group_name(index: usize) -> String {
    format!("p{index}")
}

fn compile(tokens: &[Token]) -> String {
    let mut expr = String::from("^");
    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::Static(text) => {
                expr.push('/');
                expr.push_str(&regex::escape(text));
            }
            Token::Param {
                regex: custom,
                modifier,
                ..
            } => {
                let inner = custom.as_deref().unwrap_or(DEFAULT_SEGMENT);
                let group = group_name(index);
                let fragment = match modifier {
                    Modifier::One => format!("/(?P<{group}>{inner})"),
                    Modifier::Optional => format!("(?:/(?P<{group}>{inner}))?"),
                    Modifier::ZeroOrMore => format!("(?P<{group}>(?:/(?:{inner}))*)"),
                    Modifier::OneOrMore => format!("(?P<{group}>(?:/(?:{inner}))+)"),
                };
                expr.push_str(&fragment);
            }
        }
    }
    expr.push_str("/?$");
    expr
}

fn split_segments(raw: &str) -> Vec<String> {
    let trimmed = raw.trim_matches('/');
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('/').map(decode).collect()
}

fn decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, ParamValue)]) -> Params {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn root_matches_with_and_without_slash() {
        let pattern = PathPattern::parse("/").unwrap();
        assert_eq!(pattern.matches("/"), Some(Params::new()));
        assert_eq!(pattern.matches(""), Some(Params::new()));
        assert_eq!(pattern.matches("/home"), None);
    }

    #[test]
    fn static_segments_are_case_insensitive_and_allow_trailing_slash() {
        let pattern = PathPattern::parse("/spotify/callback").unwrap();
        assert!(pattern.matches("/spotify/callback").is_some());
        assert!(pattern.matches("/Spotify/Callback/").is_some());
        assert!(pattern.matches("/spotify").is_none());
        assert!(pattern.matches("/spotify/callback/extra").is_none());
    }

    #[test]
    fn named_param_is_captured_and_decoded() {
        let pattern = PathPattern::parse("/artist/:id").unwrap();
        let captured = pattern.matches("/artist/sigur%20r%C3%B3s").unwrap();
        assert_eq!(captured["id"], ParamValue::Single("sigur rós".to_string()));
        assert!(pattern.matches("/artist").is_none());
    }

    #[test]
    fn custom_regex_restricts_param() {
        let pattern = PathPattern::parse(r"/track/:n(\d+)").unwrap();
        assert!(pattern.matches("/track/42").is_some());
        assert!(pattern.matches("/track/abc").is_none());
    }

    #[test]
    fn optional_param_may_be_absent() {
        let pattern = PathPattern::parse("/playlists/:tab?").unwrap();
        assert_eq!(pattern.matches("/playlists"), Some(Params::new()));
        let captured = pattern.matches("/playlists/recent").unwrap();
        assert_eq!(captured["tab"].as_str(), Some("recent"));
    }

    #[test]
    fn one_or_more_requires_a_segment() {
        let pattern = PathPattern::parse("/files/:parts+").unwrap();
        assert!(pattern.matches("/files").is_none());
        let captured = pattern.matches("/files/a/b").unwrap();
        assert_eq!(
            captured["parts"],
            ParamValue::Repeated(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn wildcard_captures_every_segment() {
        let pattern = PathPattern::parse("/:pathMatch(.*)*").unwrap();
        assert!(pattern.is_catch_all());

        let captured = pattern.matches("/does/not/exist").unwrap();
        assert_eq!(
            captured["pathMatch"].segments(),
            vec!["does", "not", "exist"]
        );

        let root = pattern.matches("/").unwrap();
        assert_eq!(root["pathMatch"], ParamValue::Repeated(Vec::new()));
    }

    #[test]
    fn wildcard_detection() {
        assert!(!PathPattern::parse("/").unwrap().is_catch_all());
        assert!(!PathPattern::parse("/:id").unwrap().is_catch_all());
        assert!(!PathPattern::parse("/:id?").unwrap().is_catch_all());
        assert!(!PathPattern::parse("/docs/:rest(.*)*").unwrap().is_catch_all());
        assert!(PathPattern::parse("/:rest(.*)?").unwrap().is_catch_all());
        assert!(PathPattern::parse("/:rest(.*)+").unwrap().is_catch_all());
    }

    #[test]
    fn bare_wildcard_param_is_catch_all() {
        let pattern = PathPattern::parse("/:pathMatch(.*)").unwrap();
        assert!(pattern.is_catch_all());
        assert!(pattern.matches("/").is_some());
        assert_eq!(
            pattern.matches("/spotify/callback").unwrap()["pathMatch"].as_str(),
            Some("spotify/callback")
        );
    }

    #[test]
    fn patterns_matching_everything_are_catch_all() {
        assert!(PathPattern::parse("/:any([^/]*)*").unwrap().is_catch_all());
    }

    #[test]
    fn malformed_patterns_are_rejected() {
        assert!(matches!(
            PathPattern::parse("spotify"),
            Err(PatternError::MissingLeadingSlash(_))
        ));
        assert!(matches!(
            PathPattern::parse("/:"),
            Err(PatternError::EmptyParamName(_))
        ));
        assert!(matches!(
            PathPattern::parse("/:id(\\d+"),
            Err(PatternError::UnbalancedGroup(_))
        ));
        assert!(matches!(
            PathPattern::parse("/:id-suffix"),
            Err(PatternError::UnexpectedChar { found: '-', .. })
        ));
        assert!(matches!(
            PathPattern::parse("/:id/:id"),
            Err(PatternError::DuplicateParam { .. })
        ));
        assert!(matches!(
            PathPattern::parse("/:id([)"),
            Err(PatternError::InvalidRegex { .. })
        ));
    }

    #[test]
    fn build_reverses_matching() {
        let pattern = PathPattern::parse("/artist/:id/:tab?").unwrap();
        let path = pattern
            .build(&params(&[("id", ParamValue::from("a b"))]))
            .unwrap();
        assert_eq!(path, "/artist/a%20b");
        assert_eq!(
            pattern.matches(&path).unwrap()["id"].as_str(),
            Some("a b")
        );

        assert!(matches!(
            pattern.build(&Params::new()),
            Err(PatternError::MissingParam(name)) if name == "id"
        ));
    }

    #[test]
    fn build_rejects_segments_for_single_param() {
        let pattern = PathPattern::parse("/artist/:id").unwrap();
        let many = params(&[(
            "id",
            ParamValue::from(vec!["a".to_string(), "b".to_string()]),
        )]);
        assert!(matches!(
            pattern.build(&many),
            Err(PatternError::NotRepeatable(_))
        ));
    }

    #[test]
    fn build_root_and_wildcard() {
        assert_eq!(PathPattern::parse("/").unwrap().build(&Params::new()).unwrap(), "/");

        let wildcard = PathPattern::parse("/:pathMatch(.*)*").unwrap();
        assert_eq!(wildcard.build(&Params::new()).unwrap(), "/");
        let nested = params(&[(
            "pathMatch",
            ParamValue::from(vec!["does".to_string(), "not".to_string()]),
        )]);
        assert_eq!(wildcard.build(&nested).unwrap(), "/does/not");
    }

    #[test]
    fn display_round_trips_source() {
        let pattern = PathPattern::parse("/:pathMatch(.*)*").unwrap();
        assert_eq!(pattern.to_string(), "/:pathMatch(.*)*");
        assert_eq!(pattern.param_names().collect::<Vec<_>>(), vec!["pathMatch"]);
    }
}
