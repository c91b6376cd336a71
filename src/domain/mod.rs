pub mod account;
pub mod ledger;
pub mod seed;
pub mod session;
pub mod statement;
pub mod store;
pub mod transaction;
