//! # Table Formatter
//!
//! Lays tabular receipt lines out on fixed character-cell columns.
//!
//! ## Column Geometry
//!
//! ```text
//! ┌─────┬──────────────────────┬─────┬─────┬────────┐
//! │ No. │ Item                 │ Qty │Rate │  Total │
//! │  5  │          22          │  5  │  5  │    8   │
//! └─────┴──────────────────────┴─────┴─────┴────────┘
//!   left        left            right right   right      = 45 cells
//! ```
//!
//! Truncation always wins over justification: a value is cut to its column
//! width first and only then padded. Values never spill into a neighbour.
//!
//! Amount lines (discount, subtotal) reuse the same geometry: the label takes
//! every column but the last, the amount is right-justified in the last.

use super::number;

/// Global column widths: number, name, quantity, rate, total.
pub const COLUMN_WIDTHS: [usize; 5] = [5, 22, 5, 5, 8];

/// Index of the free-text name column, never numerically coerced.
pub const NAME_COLUMN: usize = 1;

/// Item line geometry: `{name:<27}x{qty:>5}  {price:>5}  {total:>8}`.
pub const ITEM_NAME_WIDTH: usize = 27;
pub const ITEM_QUANTITY_WIDTH: usize = 5;
pub const ITEM_PRICE_WIDTH: usize = 5;
pub const ITEM_TOTAL_WIDTH: usize = 8;

/// Horizontal justification within a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    Left,
    Right,
}

/// Fixed column layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub widths: [usize; 5],
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl ColumnLayout {
    /// The `[5, 22, 5, 5, 8]` receipt layout.
    pub const STANDARD: Self = Self {
        widths: COLUMN_WIDTHS,
    };

    pub const fn new(widths: [usize; 5]) -> Self {
        Self { widths }
    }

    /// Sum of all column widths; also the rule length.
    pub fn total_width(&self) -> usize {
        self.widths.iter().sum()
    }

    /// Width left of the last column, used for amount line labels.
    pub fn label_width(&self) -> usize {
        self.total_width() - self.widths[4]
    }

    /// Columns 0 and 1 are left-justified, the rest right-justified.
    pub fn justify(column: usize) -> Justify {
        if column <= NAME_COLUMN {
            Justify::Left
        } else {
            Justify::Right
        }
    }

    /// Format a row of cells verbatim.
    ///
    /// Cells beyond the fifth are dropped; fewer cells produce a shorter line.
    ///
    /// ```
    /// use comanda::layout::ColumnLayout;
    ///
    /// let line = ColumnLayout::STANDARD.format_row(&["1", "Rice", "2", "60", "120"]);
    /// assert_eq!(line, "1    Rice                      2   60     120");
    /// ```
    pub fn format_row<S: AsRef<str>>(&self, columns: &[S]) -> String {
        columns
            .iter()
            .zip(self.widths)
            .enumerate()
            .map(|(i, (value, width))| fit(value.as_ref(), width, Self::justify(i)))
            .collect()
    }

    /// Format a table body row.
    ///
    /// Any cell except the name column that is a plain decimal is shown as its
    /// truncated integer before fitting, so `"12.9"` becomes `12`.
    pub fn format_table_row<S: AsRef<str>>(&self, columns: &[S]) -> String {
        let coerced: Vec<String> = columns
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let value = value.as_ref();
                if i != NAME_COLUMN && number::is_plain_decimal(value) {
                    number::truncated(value).unwrap_or_else(|| value.to_string())
                } else {
                    value.to_string()
                }
            })
            .collect();
        self.format_row(&coerced)
    }

    /// A rule spanning the full table width.
    pub fn separator(&self, rule: char) -> String {
        std::iter::repeat_n(rule, self.total_width()).collect()
    }

    /// Label left, amount right, neither truncated.
    pub fn format_amount_line(&self, label: &str, amount: &str) -> String {
        format!(
            "{:<label_w$}{:>amount_w$}",
            label,
            amount,
            label_w = self.label_width(),
            amount_w = self.widths[4]
        )
    }
}

/// Format one item line. The name is padded but never truncated.
///
/// ```
/// use comanda::layout::table::format_item_line;
///
/// assert_eq!(
///     format_item_line("Cola", "2", "5", "10"),
///     "Cola                       x    2      5        10"
/// );
/// ```
pub fn format_item_line(name: &str, quantity: &str, price: &str, total: &str) -> String {
    format!(
        "{:<nw$}x{:>qw$}  {:>pw$}  {:>tw$}",
        name,
        quantity,
        price,
        total,
        nw = ITEM_NAME_WIDTH,
        qw = ITEM_QUANTITY_WIDTH,
        pw = ITEM_PRICE_WIDTH,
        tw = ITEM_TOTAL_WIDTH
    )
}

/// Cut `value` to `width` characters, then pad to exactly `width`.
fn fit(value: &str, width: usize, justify: Justify) -> String {
    let cut: String = value.chars().take(width).collect();
    match justify {
        Justify::Left => format!("{:<width$}", cut),
        Justify::Right => format!("{:>width$}", cut),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_width() {
        assert_eq!(ColumnLayout::STANDARD.total_width(), 45);
        assert_eq!(ColumnLayout::STANDARD.label_width(), 37);
    }

    #[test]
    fn test_header_row() {
        let line = ColumnLayout::STANDARD.format_row(&["SL", "Item", "Qty", "Rate", "Total"]);
        assert_eq!(line, "SL   Item                    Qty Rate   Total");
        assert_eq!(line.chars().count(), 45);
    }

    #[test]
    fn test_truncation_before_justification() {
        let line = ColumnLayout::STANDARD.format_row(&[
            "123456",
            "A very long item name that overflows",
            "100000",
            "1",
            "123456789",
        ]);
        assert_eq!(line, "12345A very long item name 10000    112345678");
    }

    #[test]
    fn test_table_row_coerces_numeric_cells() {
        let line = ColumnLayout::STANDARD.format_table_row(&["1", "12.9", "2.0", "12.9", "25.8"]);
        assert_eq!(line, "1    12.9                      2   12      25");
    }

    #[test]
    fn test_table_row_leaves_non_decimal_cells() {
        let line = ColumnLayout::STANDARD.format_table_row(&["#1", "Tea", "-1", "1e3", "n/a"]);
        assert_eq!(line, "#1   Tea                      -1  1e3     n/a");
    }

    #[test]
    fn test_short_and_long_rows() {
        assert_eq!(ColumnLayout::STANDARD.format_row(&["1", "Tea"]).len(), 27);
        let six = ColumnLayout::STANDARD.format_row(&["1", "a", "b", "c", "d", "extra"]);
        assert_eq!(six.len(), 45);
        assert!(!six.contains("extra"));
    }

    #[test]
    fn test_unicode_counts_characters() {
        let line = ColumnLayout::STANDARD.format_row(&["১", "চা"]);
        assert_eq!(line.chars().count(), 27);
    }

    #[test]
    fn test_separator() {
        assert_eq!(ColumnLayout::STANDARD.separator('-'), "-".repeat(45));
    }

    #[test]
    fn test_amount_line() {
        let line = ColumnLayout::STANDARD.format_amount_line("Promo", "-5");
        assert_eq!(line, format!("Promo{}-5", " ".repeat(38)));
        assert_eq!(line.len(), 45);
    }

    #[test]
    fn test_amount_line_does_not_truncate() {
        let label = "L".repeat(40);
        let line = ColumnLayout::STANDARD.format_amount_line(&label, "123456789");
        assert_eq!(line, format!("{}123456789", label));
    }

    #[test]
    fn test_item_line_width() {
        assert_eq!(format_item_line("Tea", "1", "20", "20").len(), 50);
    }
}
