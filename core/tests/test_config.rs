// Stream configuration: defaults, overrides and JSON loading.

#[cfg(test)]
mod tests {
    use rlp_core::{
        constants::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_SIZE},
        ConfigError, StreamConfig,
    };

    #[test]
    fn defaults_are_bounded() {
        let cfg = StreamConfig::default();
        assert_eq!(cfg.max_size, 32 * 1024 * 1024);
        assert_eq!(cfg.max_depth, 128);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let cfg = StreamConfig::new(None, Some(16));
        assert_eq!(cfg.max_size, DEFAULT_MAX_SIZE);
        assert_eq!(cfg.max_depth, 16);

        let cfg = StreamConfig::new(Some(1 << 10), None);
        assert_eq!(cfg.max_size, 1024);
        assert_eq!(cfg.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn builder_overrides() {
        let cfg = StreamConfig::default().with_max_size(64).with_max_depth(3);
        assert_eq!(cfg, StreamConfig::new(Some(64), Some(3)));
    }

    #[test]
    fn from_json_partial_document() {
        let cfg = StreamConfig::from_json(r#"{ "max_depth": 8 }"#).unwrap();
        assert_eq!(cfg.max_depth, 8);
        assert_eq!(cfg.max_size, DEFAULT_MAX_SIZE);

        let cfg = StreamConfig::from_json("{}").unwrap();
        assert_eq!(cfg, StreamConfig::default());
    }

    #[test]
    fn from_json_rejects_zero_limits() {
        assert!(matches!(
            StreamConfig::from_json(r#"{ "max_size": 0 }"#),
            Err(ConfigError::ZeroLimit { field: "max_size" })
        ));
        assert!(matches!(
            StreamConfig::from_json(r#"{ "max_depth": 0 }"#),
            Err(ConfigError::ZeroLimit { field: "max_depth" })
        ));
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(matches!(StreamConfig::from_json("not json"), Err(ConfigError::Parse(_))));
        assert!(matches!(
            StreamConfig::from_json(r#"{ "max_size": -1 }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn serializes_back_to_json() {
        let cfg = StreamConfig::new(Some(512), Some(4));
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(StreamConfig::from_json(&json).unwrap(), cfg);
    }
}
