pub mod barangays;
pub mod items;
pub mod pool;
pub mod profiles;

pub use barangays::{BarangayWriter, ServiceRoleBarangays};
pub use items::{ItemStore, ItemWriter, PgItems, ServiceRoleItems};
pub use pool::{create_pool, create_service_pool};
pub use profiles::{PgProfiles, ProfileStore};
