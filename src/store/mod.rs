pub mod client;
pub mod users;

pub use users::{NewUser, UpdateReport, User, UserPatch, UserStore};
