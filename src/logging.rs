use crate::config::Config;
use tracing_appender::rolling;

/// Route tracing output to a daily rolling file under `config.log_dir`.
///
/// Stdout carries the menu, so nothing is logged there. Writes go straight to
/// the file on the calling thread; the process stays single-threaded.
pub fn init(config: &Config) {
    let file_appender = rolling::daily(&config.log_dir, config.log_file_name());

    tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();
}
