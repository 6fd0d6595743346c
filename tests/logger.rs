use log::{Level, LevelFilter};
use todocat::config::LoggingConfig;
use todocat::logger::Logger;

fn emit(log: &dyn log::Log, level: Level, message: &str) {
    log.log(
        &log::Record::builder()
            .args(format_args!("{}", message))
            .level(level)
            .target("todocat::test")
            .build(),
    );
    log.flush();
}

#[test]
fn test_config_based_logging_disabled() {
    let logger = Logger::from_config(&LoggingConfig::default()).unwrap();
    assert!(!logger.is_enabled());
    assert!(logger.log_file_path().is_none());

    let (_, log) = logger.dispatch().unwrap().into_log();
    emit(log.as_ref(), Level::Info, "Test message");

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message"));
    assert!(logs[0].contains("INFO"));
}

#[test]
fn test_config_based_logging_enabled() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("logs").join("todocat.log");
    let config = LoggingConfig {
        enabled: true,
        level: "debug".to_string(),
        file: Some(log_path.clone()),
    };

    let logger = Logger::from_config(&config).unwrap();
    assert!(logger.is_enabled());
    assert_eq!(logger.level(), LevelFilter::Debug);
    assert_eq!(logger.log_file_path(), Some(log_path.as_path()));

    let (_, log) = logger.dispatch().unwrap().into_log();
    emit(log.as_ref(), Level::Debug, "Test message with file");

    // In-memory buffer
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message with file"));

    // Log file
    let file_content = std::fs::read_to_string(&log_path).unwrap();
    assert!(file_content.contains("Test message with file"));
}

#[test]
fn test_level_filter_drops_lower_levels() {
    let config = LoggingConfig {
        level: "warn".to_string(),
        ..LoggingConfig::default()
    };
    let logger = Logger::from_config(&config).unwrap();
    let (_, log) = logger.dispatch().unwrap().into_log();

    emit(log.as_ref(), Level::Info, "quiet");
    emit(log.as_ref(), Level::Warn, "loud");

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("loud"));
}

#[test]
fn test_logs_are_newest_first_and_clearable() {
    let logger = Logger::from_config(&LoggingConfig::default()).unwrap();
    let (_, log) = logger.dispatch().unwrap().into_log();

    emit(log.as_ref(), Level::Info, "first");
    emit(log.as_ref(), Level::Info, "second");

    let logs = logger.get_logs();
    assert!(logs[0].contains("second"));
    assert!(logs[1].contains("first"));

    logger.clear();
    assert!(logger.get_logs().is_empty());
}

#[test]
fn test_invalid_level_is_rejected() {
    let config = LoggingConfig {
        level: "verbose".to_string(),
        ..LoggingConfig::default()
    };
    assert!(Logger::from_config(&config).is_err());
}

#[test]
fn test_init_installs_global_logger_once() {
    let logger = Logger::from_config(&LoggingConfig::default()).unwrap();
    assert_eq!(logger.level(), LevelFilter::Info);

    logger.init().unwrap();
    log::info!("through the global logger");
    log::debug!("below the configured level");

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("through the global logger"));

    // Only one global logger per process
    let second = Logger::from_config(&LoggingConfig::default()).unwrap();
    assert!(second.init().is_err());
}
