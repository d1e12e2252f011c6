//! Bracket-path display strings.
//!
//! Paths render as `$["customer"][0]["name"]`: `$` is the root, indices are
//! bare and keys are JSON string literals. This is the normalized-path form
//! accepted by JSONPath tooling, so a displayed path can be pasted straight
//! into a query.

use std::fmt;

use serde_json::Value;

use crate::types::{Path, PathStep};
use crate::validate::{validate_path, MAX_PATH_LENGTH};
use crate::PathError;

/// Format a path as a bracket-path string.
///
/// An absent or empty path is the root, `$`.
///
/// # Example
///
/// ```
/// use json_graph_path::{path_to_string, PathStep};
///
/// assert_eq!(path_to_string(None), "$");
/// assert_eq!(path_to_string(Some(&[])), "$");
/// let path = vec![PathStep::from("a"), PathStep::Index(0), PathStep::from("b")];
/// assert_eq!(path_to_string(Some(&path)), r#"$["a"][0]["b"]"#);
/// ```
pub fn path_to_string(path: Option<&[PathStep]>) -> String {
    BracketPath(path.unwrap_or_default()).to_string()
}

struct BracketPath<'a>(&'a [PathStep]);

impl fmt::Display for BracketPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for step in self.0 {
            match step {
                PathStep::Index(i) => write!(f, "[{i}]")?,
                // Value's Display is JSON text, so quotes and control chars come out escaped.
                PathStep::Key(k) => write!(f, "[{}]", Value::String(k.clone()))?,
            }
        }
        Ok(())
    }
}

/// Parse a bracket-path string back into a path.
///
/// # Errors
///
/// Fails when the text does not start with `$`, a bracket is malformed, an
/// index is not canonical, a key is not a valid JSON string literal, or the
/// path is deeper than the supported maximum.
///
/// # Example
///
/// ```
/// use json_graph_path::{parse_path_string, PathStep};
///
/// assert_eq!(parse_path_string("$").unwrap(), Vec::<PathStep>::new());
/// assert_eq!(
///     parse_path_string(r#"$["a"][0]"#).unwrap(),
///     vec![PathStep::from("a"), PathStep::Index(0)]
/// );
/// ```
pub fn parse_path_string(input: &str) -> Result<Path, PathError> {
    let path = PathStringParser { input, pos: 0 }.parse()?;
    validate_path(&path)?;
    Ok(path)
}

struct PathStringParser<'a> {
    input: &'a str,
    pos: usize,
}

impl PathStringParser<'_> {
    fn parse(mut self) -> Result<Path, PathError> {
        self.skip_whitespace();
        if self.peek() != Some('$') {
            return Err(PathError::ExpectedRoot);
        }
        self.advance();

        let mut path = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => break,
                Some('[') => {
                    self.advance();
                    self.skip_whitespace();
                    path.push(self.parse_step()?);
                    self.skip_whitespace();
                    self.expect(']')?;
                }
                Some(c) => return Err(PathError::UnexpectedChar(c)),
            }
            if path.len() > MAX_PATH_LENGTH {
                return Err(PathError::PathTooLong);
            }
        }
        Ok(path)
    }

    fn parse_step(&mut self) -> Result<PathStep, PathError> {
        match self.peek() {
            Some('"') => self.parse_key(),
            Some(c) if c.is_ascii_digit() => self.parse_index(),
            Some(c) => Err(PathError::UnexpectedChar(c)),
            None => Err(PathError::UnexpectedEnd),
        }
    }

    fn parse_index(&mut self) -> Result<PathStep, PathError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
        let digits = &self.input[start..self.pos];
        if !crate::is_valid_index(digits) {
            return Err(PathError::InvalidIndex);
        }
        digits.parse().map(PathStep::Index).map_err(|_| PathError::InvalidIndex)
    }

    fn parse_key(&mut self) -> Result<PathStep, PathError> {
        let start = self.pos;
        self.advance();
        let mut escaped = false;
        loop {
            let c = self.peek().ok_or(PathError::UnexpectedEnd)?;
            self.advance();
            match c {
                '\\' if !escaped => escaped = true,
                '"' if !escaped => break,
                _ => escaped = false,
            }
        }
        serde_json::from_str::<String>(&self.input[start..self.pos])
            .map(PathStep::Key)
            .map_err(|_| PathError::InvalidKey)
    }

    fn expect(&mut self, expected: char) -> Result<(), PathError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.advance();
                Ok(())
            }
            Some(c) => Err(PathError::UnexpectedChar(c)),
            None => Err(PathError::UnexpectedEnd),
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_root() {
        assert_eq!(path_to_string(None), "$");
        assert_eq!(path_to_string(Some(&[])), "$");
    }

    #[test]
    fn formats_mixed_steps() {
        let path: Path = vec!["a".into(), 0.into(), "b".into()];
        assert_eq!(path_to_string(Some(&path)), r#"$["a"][0]["b"]"#);
    }

    #[test]
    fn formats_numeric_looking_key_quoted() {
        let path: Path = vec!["0".into()];
        assert_eq!(path_to_string(Some(&path)), r#"$["0"]"#);
    }

    #[test]
    fn escapes_quotes_in_keys() {
        let path: Path = vec![r#"say "hi""#.into()];
        assert_eq!(path_to_string(Some(&path)), r#"$["say \"hi\""]"#);
    }

    #[test]
    fn parses_with_whitespace() {
        let path = parse_path_string(r#" $[ "a" ][ 2 ]"#).unwrap();
        assert_eq!(path, vec![PathStep::from("a"), PathStep::Index(2)]);
    }

    #[test]
    fn parses_escaped_key() {
        let path = parse_path_string(r#"$["a\"b\\c"]"#).unwrap();
        assert_eq!(path, vec![PathStep::from(r#"a"b\c"#)]);
    }

    #[test]
    fn rejects_malformed() {
        assert_eq!(parse_path_string(""), Err(PathError::ExpectedRoot));
        assert_eq!(parse_path_string(r#"["a"]"#), Err(PathError::ExpectedRoot));
        assert_eq!(parse_path_string("$[01]"), Err(PathError::InvalidIndex));
        assert_eq!(parse_path_string("$[-1]"), Err(PathError::UnexpectedChar('-')));
        assert_eq!(parse_path_string(r#"$["a""#), Err(PathError::UnexpectedEnd));
        assert_eq!(parse_path_string("$[0"), Err(PathError::UnexpectedEnd));
        assert_eq!(parse_path_string("$.a"), Err(PathError::UnexpectedChar('.')));
        assert_eq!(parse_path_string("$['a']"), Err(PathError::UnexpectedChar('\'')));
    }

    #[test]
    fn rejects_multibyte_garbage_without_panicking() {
        assert_eq!(parse_path_string("éa"), Err(PathError::ExpectedRoot));
        assert_eq!(parse_path_string("$é"), Err(PathError::UnexpectedChar('é')));
        assert_eq!(parse_path_string("$[é]"), Err(PathError::UnexpectedChar('é')));
        assert_eq!(parse_path_string("$[0é]"), Err(PathError::UnexpectedChar('é')));
    }

    #[test]
    fn rejects_bad_escape() {
        assert_eq!(parse_path_string(r#"$["\q"]"#), Err(PathError::InvalidKey));
    }
}
