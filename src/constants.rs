use crate::models::AnalyzerConfig;

pub const DEFAULT_ANALYZER_CONFIG: AnalyzerConfig = AnalyzerConfig {
    ignore_case: false,
    use_regex: false,
};
