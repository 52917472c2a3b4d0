/// Batch entity module
pub mod batch;
/// Record entity module
pub mod record;

pub use batch::Entity as Batch;
pub use record::Entity as Record;
