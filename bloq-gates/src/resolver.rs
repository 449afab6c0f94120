//! Gate resolution: selector + optional custom text → validated gate

use crate::literal::{parse_literal, Literal};
use crate::matrices;
use bloq_core::{Complex64, Gate, InvalidGateError, Matrix2, Result};
use std::fmt;

/// Unitarity tolerance applied to custom gates
pub const UNITARITY_TOLERANCE: f64 = 1e-6;

/// Gate selector
///
/// Unknown gate names are unrepresentable: anything that is not one of the
/// five named gates must come in as [`Selector::Custom`] with matrix text.
/// String-to-selector conversion happens at the UI boundary via
/// [`Selector::from_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Identity
    I,
    /// Pauli-X
    X,
    /// Pauli-Y
    Y,
    /// Pauli-Z
    Z,
    /// Hadamard
    H,
    /// User-supplied matrix literal
    Custom,
}

impl Selector {
    /// The five named selectors, in display order
    pub const NAMED: [Selector; 5] = [
        Selector::I,
        Selector::X,
        Selector::Y,
        Selector::Z,
        Selector::H,
    ];

    /// Selector name as shown in the UI
    pub const fn name(&self) -> &'static str {
        match self {
            Selector::I => "I",
            Selector::X => "X",
            Selector::Y => "Y",
            Selector::Z => "Z",
            Selector::H => "H",
            Selector::Custom => "custom",
        }
    }

    /// Look up a selector by name (case-insensitive)
    ///
    /// Returns `None` for unknown names; callers at the input boundary
    /// decide how to report that.
    pub fn from_name(name: &str) -> Option<Selector> {
        match name.to_ascii_lowercase().as_str() {
            "i" => Some(Selector::I),
            "x" => Some(Selector::X),
            "y" => Some(Selector::Y),
            "z" => Some(Selector::Z),
            "h" => Some(Selector::H),
            "custom" => Some(Selector::Custom),
            _ => None,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Resolve a selector into a validated gate
///
/// Named selectors resolve against the constant tables in [`matrices`],
/// which are correct by construction. [`Selector::Custom`] parses
/// `custom_text` as a literal nested numeric array, requires the result to
/// be exactly 2×2, and validates unitarity within
/// [`UNITARITY_TOLERANCE`]. A matrix that fails any of these checks never
/// reaches the caller.
///
/// # Errors
/// Any [`InvalidGateError`] variant, all from the custom path.
///
/// # Example
/// ```
/// use bloq_gates::{resolve, Selector};
///
/// let y = resolve(Selector::Y, "").unwrap();
/// assert!(y.is_hermitian());
///
/// assert!(resolve(Selector::Custom, "[[1,2],[3,4]]").is_err());
/// ```
pub fn resolve(selector: Selector, custom_text: &str) -> Result<Gate> {
    let table = match selector {
        Selector::I => &matrices::IDENTITY,
        Selector::X => &matrices::PAULI_X,
        Selector::Y => &matrices::PAULI_Y,
        Selector::Z => &matrices::PAULI_Z,
        Selector::H => &matrices::HADAMARD,
        Selector::Custom => {
            let value = parse_literal(custom_text)?;
            let matrix = matrix_from_literal(&value)?;
            return Gate::new(Selector::Custom.name(), matrix, UNITARITY_TOLERANCE);
        }
    };
    Ok(Gate::from_matrix_unchecked(selector.name(), *table))
}

/// Extract a 2×2 matrix from a parsed literal, or describe what was found
fn matrix_from_literal(value: &Literal) -> Result<Matrix2> {
    let rows = match value {
        Literal::List(rows) => rows,
        Literal::Number(_) => return Err(InvalidGateError::shape("a scalar")),
    };
    if rows.len() != 2 {
        return Err(InvalidGateError::shape(format!(
            "{} row(s) where 2 were expected",
            rows.len()
        )));
    }

    let mut matrix = [[Complex64::new(0.0, 0.0); 2]; 2];
    for (i, row) in rows.iter().enumerate() {
        let entries = match row {
            Literal::List(entries) => entries,
            Literal::Number(_) => {
                return Err(InvalidGateError::shape("a flat list where rows were expected"))
            }
        };
        if entries.len() != 2 {
            return Err(InvalidGateError::shape(format!(
                "a {}-element row where 2 entries were expected",
                entries.len()
            )));
        }
        for (j, entry) in entries.iter().enumerate() {
            match entry {
                Literal::Number(v) => matrix[i][j] = *v,
                Literal::List(_) => {
                    return Err(InvalidGateError::shape(
                        "a nested list where a number was expected",
                    ))
                }
            }
        }
    }

    Ok(matrix)
}
