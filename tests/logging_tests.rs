//! 日志配置功能测试

use shakespeare::infrastructure::config::{parse_config, Logging};

#[test]
fn test_log_level_parsing() {
    for (level, expected) in [
        ("DEBUG", "debug"),
        ("INFO", "info"),
        ("WARN", "warn"),
        ("ERROR", "error"),
        ("TRACE", "warn"),
    ] {
        let logging = Logging {
            level: level.to_string(),
            ..Logging::default()
        };
        assert_eq!(logging.filter_directive(), expected);
    }
}

#[test]
fn test_logging_can_be_disabled() {
    let config = parse_config("[logging]\nenable = false\n").unwrap();
    assert!(!config.logging.enable);
    assert!(config.logging.path.is_none());
    assert_eq!(config.logging.level, "WARN");
}
