pub mod chat;
pub mod price;
pub mod product;

pub use chat::*;
pub use price::*;
pub use product::*;
