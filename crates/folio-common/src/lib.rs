pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, FolioError};
pub use events::{Event, EventBus};
pub use id::{new_correlation_id, new_id, SessionId};
pub use types::MessageSource;

pub type Result<T> = std::result::Result<T, FolioError>;
