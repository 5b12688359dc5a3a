use crate::domain::order::OrderItem;
use crate::error::{OrderError, Result};
use std::io::Read;

/// Reads order line items from a CSV source with a `sku,qty,unit_price` header.
///
/// Whitespace around fields is trimmed and rows are deserialized lazily.
pub struct ItemReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ItemReader<R> {
    /// Creates a new `ItemReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes line items.
    pub fn items(self) -> impl Iterator<Item = Result<OrderItem>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(OrderError::from))
    }

    /// Reads every row, stopping at the first malformed one.
    pub fn read_all(self) -> Result<Vec<OrderItem>> {
        self.items().collect()
    }
}
