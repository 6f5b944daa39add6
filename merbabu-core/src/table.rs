use crate::Item;

pub const COLUMNS: [&str; 3] = ["Nama Barang", "Kategori", "Jumlah"];

/// One displayed row: name, category, quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub name: String,
    pub category: String,
    pub quantity: i32,
}

impl From<&Item> for TableRow {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name().to_string(),
            category: item.category().to_string(),
            quantity: item.quantity(),
        }
    }
}

impl TableRow {
    pub fn cells(&self) -> [String; 3] {
        [
            self.name.clone(),
            self.category.clone(),
            self.quantity.to_string(),
        ]
    }
}

/// Rows currently on screen. Rebuilt wholesale on every refresh; no diffing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableView {
    rows: Vec<TableRow>,
}

impl TableView {
    pub fn refresh(&mut self, items: &[Item]) {
        self.rows.clear();
        self.rows.extend(items.iter().map(TableRow::from));
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn last_row(&self) -> Option<&TableRow> {
        self.rows.last()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
