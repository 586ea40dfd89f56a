// crates/infra/src/persistence/mod.rs
mod file_reader;

pub use file_reader::FileReader;
