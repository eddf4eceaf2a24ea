use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Level used by the binaries unless they ask for something else.
pub const DEFAULT_LEVEL: Level = Level::WARN;

/// Install a global `fmt` subscriber that writes to stderr through a non-blocking writer.
/// Stdout is left alone since it carries the rendered maze.
///
/// The returned guard flushes buffered events when dropped, so keep it alive until exit.
/// If a global subscriber is already installed this is a no-op apart from the writer thread.
pub fn init(level: Level) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let installed = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(%level, "Logging initialised");
    }
    guard
}
