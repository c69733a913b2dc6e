mod guard;
pub use guard::*;

mod modal;
pub use modal::*;

mod stars;
pub use stars::*;

mod toaster;
pub use toaster::*;
