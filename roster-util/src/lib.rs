//! Ambient stack shared by every other crate in the workspace: structured
//! logging bootstrap and the process-wide log-level knob the `LOG` command
//! mutates.

pub mod level;
pub mod logging;
pub mod shutdown;

pub use level::{LogLevel, ParseLogLevelError};
pub use logging::{init_logging, LoggingHandle};
pub use shutdown::Shutdown;
