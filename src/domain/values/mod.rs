pub mod category;
pub mod merge;
pub mod quote_key;
