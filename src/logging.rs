use slog::{o, Drain};

/// Logs to stderr, with level filters taken from `RUST_LOG`.
/// Defaults to `info`.
#[allow(clippy::module_name_repetitions)]
pub fn setup_logging() -> slog_scope::GlobalLoggerGuard {
    let stderr = slog_term::CompactFormat::new(slog_term::TermDecorator::new().stderr().build())
        .build()
        .ignore_res();

    let envlogger = slog_envlogger::LogBuilder::new(stderr)
        .parse(&std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .build()
        .ignore_res();

    let logger = slog::Logger::root(slog_async::Async::default(envlogger).ignore_res(), o!());

    slog_stdlog::init().unwrap_or_else(|err| {
        eprintln!("failed to setup logging: {}", err);
    });

    slog_scope::set_global_logger(logger)
}
