pub mod quote_store;
pub mod remote_source;
pub mod settings_store;
