pub use crate::error::Error;
pub use crate::reporter::{Case, Progress, Reporter, NR};
pub use crate::Result;
