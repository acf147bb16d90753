pub mod remote;
pub mod sqlite;
pub mod transfer;
