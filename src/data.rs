mod table;
pub use table::*;

mod user;
pub use user::*;

mod store;
pub use store::*;

mod dashboard;
pub use dashboard::*;
