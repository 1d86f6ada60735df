pub mod err;
pub mod monoid;

pub use err::{ConfigError, LawViolation};
pub use monoid::{Monoid, MonoidAdapter, MonoidBuilder};
