mod traits;

pub use traits::{ReadRepository, Repository};
