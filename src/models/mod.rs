pub mod barangay;
pub mod item;
pub mod profile;

pub use barangay::*;
pub use item::*;
pub use profile::*;
