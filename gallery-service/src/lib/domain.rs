pub mod errors;
pub mod like;
pub mod token;
pub mod user;
