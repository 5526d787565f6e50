// Configuration type definitions

use serde::Deserialize;

/// Upper bound on the options shown for one query
pub const DEFAULT_MAX_RESULTS: usize = 100;

/// Matching used by fuzzy-mode filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FuzzyAlgorithm {
    /// Query characters must appear in order, gaps allowed (fzf-style)
    #[default]
    Subsequence,
    /// Query must appear as a contiguous substring
    Substring,
}

/// Candidate filter configuration section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub struct FilterConfig {
    #[serde(default)]
    pub fuzzy: FuzzyAlgorithm,
    #[serde(default)]
    pub case_sensitive: bool,
}

/// Option list configuration section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct OptionsConfig {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

impl Default for OptionsConfig {
    fn default() -> Self {
        OptionsConfig {
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub options: OptionsConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Every accepted fuzzy algorithm name parses to its variant.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_fuzzy_parsing(
            fuzzy in prop::sample::select(vec!["subsequence", "substring"]),
            case_sensitive in prop::bool::ANY
        ) {
            let toml_content = format!(r#"
[filter]
fuzzy = "{}"
case_sensitive = {}
"#, fuzzy, case_sensitive);

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse valid fuzzy algorithm: {}", fuzzy);

            let config = config.unwrap();
            let expected = match fuzzy {
                "subsequence" => FuzzyAlgorithm::Subsequence,
                "substring" => FuzzyAlgorithm::Substring,
                _ => unreachable!(),
            };

            prop_assert_eq!(config.filter.fuzzy, expected);
            prop_assert_eq!(config.filter.case_sensitive, case_sensitive);
        }
    }

    // Sections and fields left out of the file fall back to defaults.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_filter_section in prop::bool::ANY,
            include_options_section in prop::bool::ANY
        ) {
            let mut toml_content = String::new();
            if include_filter_section {
                toml_content.push_str("[filter]\n");
            }
            if include_options_section {
                toml_content.push_str("[options]\n");
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config with missing fields");
            prop_assert_eq!(config.unwrap(), Config::default());
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.filter.fuzzy, FuzzyAlgorithm::Subsequence);
        assert!(!config.filter.case_sensitive);
        assert_eq!(config.options.max_results, 100);
    }

    #[test]
    fn test_unknown_fuzzy_algorithm_is_rejected() {
        let config: Result<Config, _> = toml::from_str("[filter]\nfuzzy = \"levenshtein\"\n");
        assert!(config.is_err());
    }
}
