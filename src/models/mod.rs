pub mod contact;
pub mod currency;
pub mod transaction;
pub mod user;
