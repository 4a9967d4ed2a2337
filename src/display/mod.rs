// Read-only inspection helpers: materialised views and table rendering.
use std::fmt::{self, Debug, Display, Formatter};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::*;

use crate::matrix::Matrix;
use crate::scalar::Scalar;
use crate::sequence::Sequence;
use crate::sparse::SparseArray;

/// Inspection view over any [`Sequence`].
///
/// Holds a shared borrow, so the source cannot change while the view exists.
pub struct DebugView<'a, S: Sequence + ?Sized> {
    source: &'a S,
}

impl<'a, S: Sequence + ?Sized> DebugView<'a, S> {
    /// Wraps `source` for inspection.
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Every element, defaults included, in sequence order.
    pub fn items(&self) -> Vec<S::Item> {
        (0..self.source.len())
            .filter_map(|index| self.source.element(index).ok())
            .collect()
    }
}

fn styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

impl<S> Display for DebugView<'_, S>
where
    S: Sequence + ?Sized,
    S::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut table = styled_table();
        table.set_header(vec![
            Cell::new("Index").set_alignment(CellAlignment::Center),
            Cell::new("Value").set_alignment(CellAlignment::Center),
        ]);
        for (index, item) in self.items().iter().enumerate() {
            table.add_row(vec![
                Cell::new(index).set_alignment(CellAlignment::Right),
                Cell::new(format!("{item:?}")).set_alignment(CellAlignment::Right),
            ]);
        }
        write!(f, "{table}")
    }
}

impl<T: Clone + Default + Debug> SparseArray<T> {
    /// Stored entries only, one row per explicit index.
    pub fn display(&self) -> String {
        let mut title = styled_table();
        title.add_row(vec![
            Cell::new(format!(
                "Sparse array: capacity {}, {} stored ({:.1}%)",
                self.capacity(),
                self.sparsity(),
                self.sparsity_percent() * 100.0
            ))
            .set_alignment(CellAlignment::Center),
        ]);

        let mut table = styled_table();
        table.set_header(vec![
            Cell::new("Index").set_alignment(CellAlignment::Center),
            Cell::new("Value").set_alignment(CellAlignment::Center),
        ]);
        for (index, value) in self.entries() {
            table.add_row(vec![
                Cell::new(index).set_alignment(CellAlignment::Right),
                Cell::new(format!("{value:?}")).set_alignment(CellAlignment::Right),
            ]);
        }

        format!("{title}\n{table}")
    }
}

impl<T: Clone + Default + Debug> Display for SparseArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl<T: Scalar> Display for Matrix<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut table = styled_table();
        let mut header = vec![Cell::new(self.dimension()).set_alignment(CellAlignment::Center)];
        header.extend((0..self.columns()).map(|c| Cell::new(c).set_alignment(CellAlignment::Center)));
        table.set_header(header);

        let columns = self.columns();
        let cells = self.to_vec();
        for (r, row) in cells.chunks(columns).enumerate() {
            let mut line = vec![Cell::new(r).set_alignment(CellAlignment::Center)];
            line.extend(
                row.iter()
                    .map(|v| Cell::new(format!("{v:?}")).set_alignment(CellAlignment::Right)),
            );
            table.add_row(line);
        }
        write!(f, "{table}")
    }
}
