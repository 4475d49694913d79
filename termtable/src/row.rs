use hashbrown::HashMap;

/// Single row of a [crate::ReportTable], mapping column names to display strings.
///
/// Column names are matched case-insensitively, so `"Name"` and `"name"` address the same cell.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Row(HashMap<String, String>);

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of a cell, replacing any existing value for the column.
    pub fn insert<V>(&mut self, column: &str, value: V)
    where
        V: Into<String>,
    {
        self.0.insert(column.to_lowercase(), value.into());
    }

    /// Builder form of [Row::insert].
    pub fn with<V>(mut self, column: &str, value: V) -> Self
    where
        V: Into<String>,
    {
        self.insert(column, value);
        self
    }

    /// Returns the value of the cell for the column, if present.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.0.get(&column.to_lowercase()).map(String::as_str)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.0.contains_key(&column.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut row = Row::new();
        for (column, value) in iter {
            row.insert(column.as_ref(), value);
        }
        row
    }
}
