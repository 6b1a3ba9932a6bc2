//! Path expressions.
//!
//! ```text
//! path  := "/"? step ("/" step)*
//! step  := "."          current node
//!        | "*"          every child
//!        | digits       array index
//!        | "$" name     bound variable
//!        | name         object field
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// One step of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    Current,
    Wildcard,
    Index(usize),
    Field(String),
    /// Resolved through [`Bindings`](super::Bindings) to a field or an index.
    Variable(String),
}

impl Step {
    fn parse(raw: &str) -> Result<Self> {
        match raw {
            "" => Err(Error::invalid("path", "contains an empty step")),
            "." => Ok(Step::Current),
            "*" => Ok(Step::Wildcard),
            _ => {
                if let Some(name) = raw.strip_prefix('$') {
                    if !is_variable_name(name) {
                        return Err(Error::invalid(
                            "path",
                            format!("has an invalid variable `{raw}`"),
                        ));
                    }
                    return Ok(Step::Variable(name.to_owned()));
                }
                if raw.bytes().all(|b| b.is_ascii_digit()) {
                    return raw
                        .parse()
                        .map(Step::Index)
                        .map_err(|_| Error::invalid("path", format!("index `{raw}` is out of range")));
                }
                Ok(Step::Field(raw.to_owned()))
            }
        }
    }
}

fn is_variable_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Current => f.write_str("."),
            Step::Wildcard => f.write_str("*"),
            Step::Index(index) => write!(f, "{index}"),
            Step::Field(name) => f.write_str(name),
            Step::Variable(name) => write!(f, "${name}"),
        }
    }
}

/// A parsed path expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    steps: Vec<Step>,
}

impl Path {
    /// Parse a path expression.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for an empty expression, an empty step or
    /// a malformed variable.
    pub fn parse(expression: &str) -> Result<Self> {
        let trimmed = expression.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid("path", "expression is required"));
        }
        let body = trimmed.strip_prefix('/').unwrap_or(trimmed);
        if body.is_empty() {
            return Ok(Path {
                steps: vec![Step::Current],
            });
        }
        let steps = body.split('/').map(Step::parse).collect::<Result<_>>()?;
        Ok(Path { steps })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Names of the variables this path references, in order of appearance.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().filter_map(|step| match step {
            Step::Variable(name) => Some(name.as_str()),
            _ => None,
        })
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Path::parse(s)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            write!(f, "/{step}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        let path = Path::parse("/items/*/name").unwrap();
        assert_eq!(
            path.steps(),
            &[
                Step::Field("items".into()),
                Step::Wildcard,
                Step::Field("name".into()),
            ]
        );
    }

    #[test]
    fn test_leading_slash_is_optional() {
        assert_eq!(Path::parse("a/0").unwrap(), Path::parse("/a/0").unwrap());
        assert_eq!(Path::parse("a/0").unwrap().steps()[1], Step::Index(0));
    }

    #[test]
    fn test_root_is_current() {
        assert_eq!(Path::parse("/").unwrap().steps(), &[Step::Current]);
        assert_eq!(Path::parse(".").unwrap().steps(), &[Step::Current]);
    }

    #[test]
    fn test_variables() {
        let path = Path::parse("$section/entries/$n").unwrap();
        assert_eq!(path.variables().collect::<Vec<_>>(), vec!["section", "n"]);
    }

    #[test]
    fn test_rejections() {
        let err = Path::parse("").unwrap_err();
        assert_eq!(err.to_string(), "path expression is required");
        assert_eq!(Path::parse("   ").unwrap_err().argument(), "path");
        assert!(Path::parse("a//b").is_err());
        assert!(Path::parse("a/").is_err());
        assert!(Path::parse("$").is_err());
        assert!(Path::parse("$1x").is_err());
    }

    #[test]
    fn test_display_is_canonical() {
        let path: Path = "a/*/$v/3/.".parse().unwrap();
        assert_eq!(path.to_string(), "/a/*/$v/3/.");
    }
}
