pub mod extractor;
pub mod guard;
pub mod password;

pub use extractor::AuthenticatedUser;
pub use guard::{AccessGuard, Accessibility};
