pub mod caller;

pub use caller::{CurrentUser, USER_ID_HEADER};
