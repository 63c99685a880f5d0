mod package;
mod table;

pub use package::ZipPackager;
pub use table::{read_table, read_table_file};
