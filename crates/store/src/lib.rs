pub mod models;
pub mod store;

pub use models::profile::{Profile, ProfileData, ProfileError};
pub use store::ProfileStore;
