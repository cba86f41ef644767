mod account;
mod secret;

pub use account::*;
pub use secret::*;
