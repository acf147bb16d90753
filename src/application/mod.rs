pub mod add_quote;
pub mod browse;
pub mod sync;
pub mod transfer;
