mod snapshot;

pub use snapshot::{ServerContextInner, ServerContextSnapshot};
