use std::collections::HashMap;

/// One line of the source table, keyed by column name.
pub type RawRow = HashMap<String, String>;
