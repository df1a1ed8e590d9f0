//! Terminal media queries for responsive column visibility.
//!
//! Expressions use the familiar query syntax with sizes in terminal cells
//! instead of pixels: `(min-width: 80)`, `(max-width: 120) and (min-height: 24)`.
//! Evaluation is a pure function of the expression and the current
//! [`Viewport`]; nothing is cached, so hosts get reactivity for free by
//! re-rendering on resize.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use crate::theme::Theme;
use crate::viewport::Viewport;

/// Errors produced when parsing a media query expression.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MediaQueryError {
    #[error("empty media query")]
    Empty,
    #[error("malformed condition '{0}', expected '(feature: cells)'")]
    Malformed(String),
    #[error("unknown media feature '{0}'")]
    UnknownFeature(String),
    #[error("invalid cell count '{0}'")]
    InvalidValue(String),
}

/// A single dimensional constraint, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    MinWidth(u16),
    MaxWidth(u16),
    MinHeight(u16),
    MaxHeight(u16),
}

impl Condition {
    fn matches(&self, viewport: Viewport) -> bool {
        match *self {
            Self::MinWidth(cells) => viewport.width >= cells,
            Self::MaxWidth(cells) => viewport.width <= cells,
            Self::MinHeight(cells) => viewport.height >= cells,
            Self::MaxHeight(cells) => viewport.height <= cells,
        }
    }
}

/// A parsed media query: one or more conditions joined with `and`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaQuery {
    conditions: Vec<Condition>,
}

impl MediaQuery {
    /// Parse an expression like `(min-width: 80) and (max-height: 40)`.
    pub fn parse(input: &str) -> Result<Self, MediaQueryError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(MediaQueryError::Empty);
        }

        let mut conditions = Vec::new();
        for part in trimmed.split(" and ") {
            let part = part.trim();
            let inner = part
                .strip_prefix('(')
                .and_then(|p| p.strip_suffix(')'))
                .ok_or_else(|| MediaQueryError::Malformed(part.to_string()))?;
            let (feature, value) = inner
                .split_once(':')
                .ok_or_else(|| MediaQueryError::Malformed(part.to_string()))?;
            let cells: u16 = value
                .trim()
                .parse()
                .map_err(|_| MediaQueryError::InvalidValue(value.trim().to_string()))?;
            let condition = match feature.trim() {
                "min-width" => Condition::MinWidth(cells),
                "max-width" => Condition::MaxWidth(cells),
                "min-height" => Condition::MinHeight(cells),
                "max-height" => Condition::MaxHeight(cells),
                other => return Err(MediaQueryError::UnknownFeature(other.to_string())),
            };
            conditions.push(condition);
        }

        Ok(Self { conditions })
    }

    /// Check whether all conditions hold for the given viewport.
    pub fn matches(&self, viewport: Viewport) -> bool {
        self.conditions.iter().all(|c| c.matches(viewport))
    }
}

impl FromStr for MediaQuery {
    type Err = MediaQueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Column visibility predicate, resolved at render time.
///
/// Either a literal media query expression, or a function of the theme so
/// themes can carry their own breakpoints. Re-evaluated on every render
/// against the live viewport.
#[derive(Clone)]
pub enum Visibility {
    /// A literal media query expression.
    Expression(String),
    /// An expression derived from the active theme.
    Themed(Arc<dyn Fn(&dyn Theme) -> String + Send + Sync>),
}

impl Visibility {
    /// Create a theme-derived visibility predicate.
    pub fn themed(f: impl Fn(&dyn Theme) -> String + Send + Sync + 'static) -> Self {
        Self::Themed(Arc::new(f))
    }

    /// Resolve the expression string for the given theme.
    pub fn expression(&self, theme: &dyn Theme) -> String {
        match self {
            Self::Expression(expr) => expr.clone(),
            Self::Themed(f) => f(theme),
        }
    }

    /// Evaluate against the current viewport.
    ///
    /// A malformed expression logs a warning and leaves the column visible.
    pub fn eval(&self, theme: &dyn Theme, viewport: Viewport) -> bool {
        let expr = self.expression(theme);
        match MediaQuery::parse(&expr) {
            Ok(query) => query.matches(viewport),
            Err(err) => {
                log::warn!("Ignoring media query '{}': {}", expr, err);
                true
            }
        }
    }
}

impl fmt::Debug for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expression(expr) => f.debug_tuple("Expression").field(expr).finish(),
            Self::Themed(_) => f.debug_tuple("Themed").field(&"<fn>").finish(),
        }
    }
}

impl From<&str> for Visibility {
    fn from(s: &str) -> Self {
        Self::Expression(s.to_string())
    }
}

impl From<String> for Visibility {
    fn from(s: String) -> Self {
        Self::Expression(s)
    }
}
