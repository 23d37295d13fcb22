mod order;
mod product;
mod user;

pub use order::*;
pub use product::*;
pub use user::*;
