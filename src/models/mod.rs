pub mod template;
pub mod token;
pub mod weather;
