pub mod item_reader;

pub use item_reader::ItemReader;
