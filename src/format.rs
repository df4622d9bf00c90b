//! Text and JSON rendering of a configuration and its solutions.

use serde::Serialize;

use crate::constraint::{Constraint, Operator};
use crate::permutation::{Height, Permutation};
use crate::view::Configuration;

/// Formats an ordering as `[2, 3, 1]`.
pub fn format_permutation(heights: &[Height]) -> String {
    let joined = heights
        .iter()
        .map(Height::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

/// Formats the criteria and every current solution, one per line.
pub fn format_report(view: &Configuration) -> String {
    let solutions = view.solutions();

    let mut output = format!("Blocks: {}\n", view.blocks());
    match view.desired_visible() {
        Some(visible) => output.push_str(&format!("Desired visible: {visible}\n")),
        None => output.push_str("Desired visible: any\n"),
    }
    if view.constraints().is_empty() {
        output.push_str("Constraints: none\n");
    } else {
        output.push_str("Constraints:\n");
        for constraint in view.constraints() {
            output.push_str(&format!("  {constraint}\n"));
        }
    }

    output.push_str(&format!("\nFound {} solutions:\n", solutions.len()));
    for (i, solution) in solutions.iter().enumerate() {
        output.push_str(&format!("{:>3}. {}\n", i + 1, format_permutation(solution)));
    }

    output
}

/// Formats the heights still possible at each position.
///
/// Positions with no remaining height show as `-`.
pub fn format_hints(view: &Configuration) -> String {
    let mut output = String::new();
    for (i, heights) in view.solution_set().possible_heights().iter().enumerate() {
        let listed = if heights.is_empty() {
            "-".to_string()
        } else {
            heights
                .iter()
                .map(Height::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        };
        output.push_str(&format!("position {}: {listed}\n", i + 1));
    }
    output
}

#[derive(Debug, Serialize)]
struct ConstraintOutput {
    /// One-based, matching how constraints are entered.
    position: usize,
    operator: Operator,
    value: i64,
}

impl From<&Constraint> for ConstraintOutput {
    fn from(constraint: &Constraint) -> Self {
        Self {
            position: constraint.position() + 1,
            operator: constraint.operator(),
            value: constraint.value(),
        }
    }
}

/// Serializable snapshot of a configuration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<'a> {
    blocks: usize,
    desired_visible: Option<usize>,
    constraints: Vec<ConstraintOutput>,
    count: usize,
    solutions: &'a [Permutation],
}

impl<'a> Report<'a> {
    pub fn new(view: &'a Configuration) -> Self {
        Self {
            blocks: view.blocks(),
            desired_visible: view.desired_visible(),
            constraints: view.constraints().iter().map(ConstraintOutput::from).collect(),
            count: view.solutions().len(),
            solutions: view.solutions(),
        }
    }
}

/// Renders the configuration as pretty-printed JSON.
pub fn format_json(view: &Configuration) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report::new(view))
}
