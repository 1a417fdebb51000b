pub mod migrate;
pub mod post;
pub mod threads;
pub mod token;
