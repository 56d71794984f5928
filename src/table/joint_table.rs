//! table::joint_table: the raw joint probability table.
//!
//! Purpose
//! -------
//! Represent the grid handed over by the table editor exactly as typed:
//! a header row of Y values, a header column of X values, and joint
//! probabilities in the interior. Cells may be numbers or text (the corner
//! label, placeholders, half-typed input).
//!
//! Key behaviors
//! -------------
//! - [`JointTable`] is a plain value: constructors never validate, so an
//!   editor may hold an unfinished table. Validation happens when the table
//!   is resolved into a [`JointDistribution`](crate::table::JointDistribution).
//! - [`Cell::coerce`] implements both numeric policies: strict (reject
//!   anything that is not a finite number) and lenient (treat it as 0).
//! - [`Variable`] names the axis (X = header column, Y = header row).
//!
//! Invariants & assumptions
//! ------------------------
//! - Cell `[0][0]` is a label and is never read numerically.
//! - Axis order is table order; nothing in the crate sorts header values.

use std::{fmt, str::FromStr};

/// Variable: which axis of the joint table a computation refers to.
///
/// - `X`: values in column 0 (rows 1..n), marginals are row sums.
/// - `Y`: values in row 0 (columns 1..m), marginals are column sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    X,
    Y,
}

impl Variable {
    /// Symbol used in expressions and messages.
    pub fn symbol(self) -> char {
        match self {
            Variable::X => 'X',
            Variable::Y => 'Y',
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Variable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Variable::X),
            "Y" | "y" => Ok(Variable::Y),
            other => Err(format!("invalid variable {other:?} (expected 'X' or 'Y')")),
        }
    }
}

/// Cell: one entry of the editor grid.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl Cell {
    /// Resolve the cell to a number under the given policy.
    ///
    /// Parameters
    /// ----------
    /// - `strict`: `bool`
    ///   When `true`, only finite numbers (or text that parses as one) are
    ///   accepted. When `false`, anything else becomes `0.0`.
    ///
    /// Returns
    /// -------
    /// `Result<f64, String>`
    ///   - `Ok(value)` for finite numeric content, or `Ok(0.0)` for
    ///     unusable content in lenient mode.
    ///   - `Err(reason)` in strict mode for non-numeric or non-finite
    ///     content. The caller attaches the grid coordinates.
    ///
    /// Notes
    /// -----
    /// - Numeric text (`" 0.25 "`) is parsed in both modes.
    /// - Empty text is an error in strict mode and 0 in lenient mode.
    pub fn coerce(&self, strict: bool) -> Result<f64, String> {
        let parsed = match self {
            Cell::Number(value) if value.is_finite() => Ok(*value),
            Cell::Number(value) => Err(format!("non-finite number {value}")),
            Cell::Text(text) => match text.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(value),
                _ => Err(format!("non-numeric content {text:?}")),
            },
        };

        match parsed {
            Ok(value) => Ok(value),
            Err(_) if !strict => Ok(0.0),
            Err(reason) => Err(reason),
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

/// JointTable: headered grid of joint probabilities for (X, Y).
///
/// Fields
/// ------
/// - `rows`: `Vec<Vec<Cell>>`
///   Row 0 holds the label and the Y values; column 0 of rows 1..n holds
///   the X values; the interior holds P(X = xᵢ, Y = yⱼ).
///
/// Notes
/// -----
/// - The table is never mutated by the engine. Derived values own their
///   data, so a rendered result stays valid after the editor replaces the
///   table.
#[derive(Debug, Clone, PartialEq)]
pub struct JointTable {
    rows: Vec<Vec<Cell>>,
}

impl JointTable {
    /// Wrap a grid of cells without validating it.
    pub fn new(rows: Vec<Vec<Cell>>) -> JointTable {
        JointTable { rows }
    }

    /// Build a table from a numeric grid; the corner value is kept as a
    /// number but never read.
    ///
    /// ```rust
    /// use joint_stats::table::JointTable;
    ///
    /// let table = JointTable::from_numeric(vec![
    ///     vec![0.0, -4.0, 0.0, 2.0, 3.0],
    ///     vec![-1.0, 0.22, 0.2, 0.15, 0.08],
    ///     vec![5.0, 0.15, 0.05, 0.05, 0.1],
    /// ]);
    /// assert_eq!(table.n_rows(), 3);
    /// ```
    pub fn from_numeric(rows: Vec<Vec<f64>>) -> JointTable {
        let rows: Vec<Vec<Cell>> =
            rows.into_iter().map(|row| row.into_iter().map(Cell::from).collect()).collect();
        JointTable::new(rows)
    }

    /// Build a table from its three parts: a corner label, Y values, and
    /// rows of `(x, probabilities)`.
    pub fn from_parts(label: &str, y_values: &[f64], rows: &[(f64, Vec<f64>)]) -> JointTable {
        let mut grid = Vec::with_capacity(rows.len() + 1);

        let mut header = Vec::with_capacity(y_values.len() + 1);
        header.push(Cell::from(label));
        header.extend(y_values.iter().copied().map(Cell::from));
        grid.push(header);

        for (x, probabilities) in rows {
            let mut row = Vec::with_capacity(probabilities.len() + 1);
            row.push(Cell::Number(*x));
            row.extend(probabilities.iter().copied().map(Cell::from));
            grid.push(row);
        }

        JointTable::new(grid)
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of grid rows, header included.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of cells in the header row.
    pub fn n_columns(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Cell at `(row, column)` in grid coordinates, if present.
    pub fn get(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Return a copy with `cell` written at `(row, column)`.
    ///
    /// Returns `None` when the coordinates fall outside the grid. The
    /// receiver is left untouched, so snapshots already handed to the
    /// engine keep their values.
    pub fn with_cell(&self, row: usize, column: usize, cell: Cell) -> Option<JointTable> {
        let mut rows = self.rows.clone();
        let slot = rows.get_mut(row)?.get_mut(column)?;
        *slot = cell;
        Some(JointTable { rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Strict coercion accepts finite numbers and numeric text only.
    fn coerce_strict_accepts_only_finite_numeric_content() {
        assert_eq!(Cell::Number(0.25).coerce(true), Ok(0.25));
        assert_eq!(Cell::from(" 0.5 ").coerce(true), Ok(0.5));

        assert!(Cell::from("").coerce(true).is_err());
        assert!(Cell::from("abc").coerce(true).is_err());
        assert!(Cell::Number(f64::NAN).coerce(true).is_err());
        assert!(Cell::Number(f64::INFINITY).coerce(true).is_err());
    }

    #[test]
    // Purpose
    // -------
    // Lenient coercion maps every unusable cell to 0 and still parses
    // numeric text.
    fn coerce_lenient_maps_unusable_content_to_zero() {
        assert_eq!(Cell::from("").coerce(false), Ok(0.0));
        assert_eq!(Cell::from("X / Y").coerce(false), Ok(0.0));
        assert_eq!(Cell::Number(f64::NAN).coerce(false), Ok(0.0));
        assert_eq!(Cell::from("0.15").coerce(false), Ok(0.15));
    }

    #[test]
    fn variable_parses_and_displays() {
        assert_eq!("x".parse::<Variable>(), Ok(Variable::X));
        assert_eq!(" Y ".parse::<Variable>(), Ok(Variable::Y));
        assert!("Z".parse::<Variable>().is_err());
        assert_eq!(Variable::X.to_string(), "X");
    }

    #[test]
    // Purpose
    // -------
    // `with_cell` returns an edited copy and leaves the original intact.
    //
    // Given
    // -----
    // - A 2×2 numeric table.
    //
    // Expect
    // ------
    // - The copy carries the new cell; the original keeps the old value.
    // - Out-of-range coordinates yield `None`.
    fn with_cell_does_not_mutate_original() {
        // Arrange
        let table = JointTable::from_numeric(vec![vec![0.0, 1.0], vec![2.0, 1.0]]);

        // Act
        let edited = table.with_cell(1, 1, Cell::Number(0.5)).expect("in range");

        // Assert
        assert_eq!(table.get(1, 1), Some(&Cell::Number(1.0)));
        assert_eq!(edited.get(1, 1), Some(&Cell::Number(0.5)));
        assert!(table.with_cell(5, 0, Cell::Number(0.0)).is_none());
    }

    #[test]
    fn from_parts_lays_out_headers() {
        let table = JointTable::from_parts("X / Y", &[1.0, 2.0], &[(0.0, vec![0.5, 0.5])]);

        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.n_columns(), 3);
        assert_eq!(table.get(0, 0), Some(&Cell::from("X / Y")));
        assert_eq!(table.get(0, 2), Some(&Cell::Number(2.0)));
        assert_eq!(table.get(1, 0), Some(&Cell::Number(0.0)));
    }
}
