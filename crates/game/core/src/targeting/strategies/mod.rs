mod column_only;
mod column_or_row;

pub use column_only::ColumnOnlyStrategy;
pub use column_or_row::ColumnOrRowStrategy;
