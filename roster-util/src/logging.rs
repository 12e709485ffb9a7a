use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::reload;
use tracing_subscriber::util::SubscriberInitExt;

use crate::level::LogLevel;

/// A live handle onto the installed subscriber's filter, letting the `LOG`
/// command change verbosity at runtime without restarting the process.
#[derive(Clone)]
pub struct LoggingHandle {
    reload: reload::Handle<EnvFilter, tracing_subscriber::Registry>,
}

impl LoggingHandle {
    /// Apply a new level immediately.
    pub fn set_level(&self, level: LogLevel) -> Result<(), reload::Error> {
        self.reload
            .modify(|filter| *filter = EnvFilter::new(level.as_filter_str()))
    }

    /// Builds a handle that isn't wired into any installed subscriber.
    /// `set_level` still works (it just has no global effect); useful for
    /// exercising the `LOG` command in tests without requiring a
    /// process-wide `tracing` subscriber.
    pub fn detached(initial: LogLevel) -> Self {
        let (_layer, reload) = reload::Layer::new(EnvFilter::new(initial.as_filter_str()));
        LoggingHandle { reload }
    }
}

/// Install the global `tracing` subscriber with `initial` as its starting
/// level, returning a handle that can change the level later. Called once
/// from each binary's `main`.
pub fn init_logging(initial: LogLevel) -> LoggingHandle {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(initial.as_filter_str()));
    let (filter, reload) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    LoggingHandle { reload }
}
