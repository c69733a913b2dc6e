mod login;
pub use login::*;

pub mod admin;

mod elsewhere;
pub use elsewhere::*;
