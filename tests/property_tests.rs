//! Property-based tests using proptest

use proptest::prelude::*;
use structured_logger_system::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Trace),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

proptest! {
    /// LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let as_str = level.to_str();
        let parsed: LogLevel = as_str.parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// LogLevel ordering is consistent with the numeric encoding
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
        prop_assert_eq!(level1 >= level2, val1 >= val2);
        prop_assert_eq!(level1 > level2, val1 > val2);
    }

    /// A record line is produced iff the emit level reaches the threshold
    #[test]
    fn test_filtering_monotonicity(threshold in any_level(), emit_level in any_level()) {
        let registry = LoggerRegistry::new();
        let sink = BufferSink::new();
        let logger = registry
            .get_or_create_with("prop", LoggerConfig::new(threshold).sink(sink.clone()))
            .unwrap();

        logger.emit(emit_level, "x", LogFields::new()).unwrap();

        let expected = usize::from(emit_level >= threshold);
        prop_assert_eq!(sink.lines().len(), expected);
    }

    /// Duplicate keys: last write wins, and field count never exceeds
    /// the number of distinct keys
    #[test]
    fn test_fields_last_write_wins(
        writes in prop::collection::vec((0u8..4, -1000i64..1000), 1..20)
    ) {
        let keys = ["a", "b", "c", "d"];
        let mut fields = LogFields::new();
        let mut expected: std::collections::HashMap<&str, i64> = Default::default();

        for (key_idx, value) in &writes {
            let key = keys[*key_idx as usize];
            fields.insert(key, *value);
            expected.insert(key, *value);
        }

        prop_assert_eq!(fields.len(), expected.len());
        for (key, value) in &expected {
            prop_assert_eq!(fields.get(key), Some(&FieldValue::Int(*value)));
        }
    }

    /// Any message survives serialization as a single parseable line
    #[test]
    fn test_any_message_roundtrips(message in ".*") {
        let registry = LoggerRegistry::new();
        let sink = BufferSink::new();
        let logger = registry
            .get_or_create_with("msgs", LoggerConfig::new(LogLevel::Trace).sink(sink.clone()))
            .unwrap();

        logger.info(message.clone()).unwrap();

        let lines = sink.lines();
        prop_assert_eq!(lines.len(), 1);
        prop_assert!(!lines[0].contains('\n'));

        let parsed: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        prop_assert_eq!(parsed["message"].as_str().unwrap(), message.as_str());
    }

    /// Non-empty names always create; the created logger carries the name
    #[test]
    fn test_any_nonempty_name_creates(name in "[a-zA-Z0-9._-]{1,32}") {
        let registry = LoggerRegistry::new();
        let logger = registry.get_or_create(&name, LogLevel::Info).unwrap();
        prop_assert_eq!(logger.name(), name.as_str());
        prop_assert!(registry.get(&name).is_some());
    }
}
