mod error;
mod keys;
mod options;
mod traits;

pub use error::{ApiError, Result};
pub use keys::{collection_post_url, item_url};
pub use options::CacheOptions;
pub use traits::ApiClient;
