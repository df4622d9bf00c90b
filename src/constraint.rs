//! Positional comparison constraints on building heights.
//!
//! A constraint such as "the building at position 1 is taller than 2" is
//! written `1>2`. Positions are one-based in every user-facing form and
//! stored zero-based.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::PuzzleError;
use crate::permutation::{BlockCount, Height};
use crate::solution::Criterion;

/// Characters that may appear in an operator symbol.
const OPERATOR_CHARS: &[char] = &['<', '>', '=', '!'];

/// Comparison applied between the height at a position and a fixed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "==")]
    Equal,
    #[serde(rename = "!=")]
    NotEqual,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Greater => ">",
            Operator::Less => "<",
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
        }
    }

    /// Applies the comparison as `lhs <op> rhs`.
    #[inline]
    pub fn compare(self, lhs: i64, rhs: i64) -> bool {
        match self {
            Operator::Greater => lhs > rhs,
            Operator::Less => lhs < rhs,
            Operator::Equal => lhs == rhs,
            Operator::NotEqual => lhs != rhs,
        }
    }
}

impl FromStr for Operator {
    type Err = PuzzleError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        match symbol {
            ">" => Ok(Operator::Greater),
            "<" => Ok(Operator::Less),
            "==" => Ok(Operator::Equal),
            "!=" => Ok(Operator::NotEqual),
            other => Err(PuzzleError::InvalidOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A validated positional comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint {
    /// Zero-based index into an ordering.
    position: usize,
    operator: Operator,
    value: i64,
}

impl Constraint {
    /// Builds a constraint from caller input, checking position, operator
    /// and value in that order.
    pub fn new(
        position: usize,
        operator: &str,
        value: i64,
        blocks: BlockCount,
    ) -> Result<Self, PuzzleError> {
        check_position(position, blocks)?;
        let operator = operator.parse()?;
        Self::with_operator(position, operator, value, blocks)
    }

    /// Same as [`Constraint::new`] for an already parsed operator.
    pub fn with_operator(
        position: usize,
        operator: Operator,
        value: i64,
        blocks: BlockCount,
    ) -> Result<Self, PuzzleError> {
        check_position(position, blocks)?;
        if value < 1 {
            return Err(PuzzleError::InvalidValue(value.to_string()));
        }
        Ok(Self {
            position: position - 1,
            operator,
            value,
        })
    }

    /// Zero-based position this constraint inspects.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Tests the height at this constraint's position.
    ///
    /// Orderings too short to have that position never satisfy it.
    pub fn satisfies(&self, heights: &[Height]) -> bool {
        heights
            .get(self.position)
            .is_some_and(|&height| self.operator.compare(i64::from(height), self.value))
    }
}

impl Criterion for Constraint {
    fn accepts(&self, heights: &[Height]) -> bool {
        self.satisfies(heights)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "position {} {} {}",
            self.position + 1,
            self.operator,
            self.value
        )
    }
}

fn check_position(position: usize, blocks: BlockCount) -> Result<(), PuzzleError> {
    if position < 1 || position > blocks.get() {
        return Err(PuzzleError::InvalidPosition {
            position,
            blocks: blocks.get(),
        });
    }
    Ok(())
}

/// Unvalidated textual constraint, `POSITION OPERATOR VALUE`.
///
/// Parsing only splits the text; range checks against a row length happen
/// when it is turned into a [`Constraint`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintSpec {
    /// One-based position.
    pub position: usize,
    pub operator: String,
    pub value: i64,
}

impl ConstraintSpec {
    pub fn resolve(&self, blocks: BlockCount) -> Result<Constraint, PuzzleError> {
        Constraint::new(self.position, &self.operator, self.value, blocks)
    }
}

impl FromStr for ConstraintSpec {
    type Err = PuzzleError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let malformed = || PuzzleError::MalformedConstraint(text.to_string());

        let operator_start = text.find(OPERATOR_CHARS).ok_or_else(malformed)?;
        let (position_text, rest) = text.split_at(operator_start);
        let operator_len = rest
            .find(|c: char| !OPERATOR_CHARS.contains(&c))
            .unwrap_or(rest.len());
        let (operator, value_text) = rest.split_at(operator_len);

        let position = position_text.trim().parse().map_err(|_| malformed())?;
        let value_text = value_text.trim();
        if value_text.is_empty() {
            return Err(malformed());
        }
        let value = value_text
            .parse()
            .map_err(|_| PuzzleError::InvalidValue(value_text.to_string()))?;

        Ok(Self {
            position,
            operator: operator.to_string(),
            value,
        })
    }
}

impl fmt::Display for ConstraintSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.position, self.operator, self.value)
    }
}
