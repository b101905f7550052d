//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_config;
use crate::config::schema::*;
use crate::dataset::DigitDraw;
use proptest::prelude::*;

fn arb_valid_config() -> impl Strategy<Value = ArithmeticConfig> {
    (
        1usize..4096,                     // seq_len
        1usize..=18,                      // max_digits
        1usize..256,                      // batch_size
        1usize..128,                      // n_tests
        proptest::bool::ANY,              // decimal digits
        proptest::option::of(any::<u64>()), // seed
    )
        .prop_map(
            |(seq_len, max_digits, batch_size, n_tests, decimal, seed)| ArithmeticConfig {
                seq_len,
                max_digits,
                batch_size,
                n_tests,
                digit_draw: if decimal {
                    DigitDraw::Decimal
                } else {
                    DigitDraw::Legacy
                },
                seed,
                ..Default::default()
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_config_passes(config in arb_valid_config()) {
        prop_assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn prop_too_many_digits_fails(config in arb_valid_config(), extra in 1usize..100) {
        let mut config = config;
        config.max_digits = 18 + extra;
        prop_assert!(matches!(
            validate_config(&config),
            Err(ValidationError::InvalidMaxDigits(_))
        ));
    }

    #[test]
    fn prop_zero_batch_size_fails(config in arb_valid_config()) {
        let mut config = config;
        config.batch_size = 0;
        prop_assert_eq!(
            validate_config(&config),
            Err(ValidationError::InvalidBatchSize(0))
        );
    }

    #[test]
    fn prop_yaml_roundtrip_stays_valid(config in arb_valid_config()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: ArithmeticConfig = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(&back, &config);
        prop_assert!(validate_config(&back).is_ok());
    }
}
