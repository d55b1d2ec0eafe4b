/// Output mode for the rendered dependency tree
///
/// This enum belongs in the application layer because both the CLI
/// (inbound adapter) and the renderers (outbound adapters) need it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Box-drawing text tree (default)
    #[default]
    Tree,
    /// Pretty-printed JSON object
    Json,
}

impl std::str::FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tree" => Ok(OutputMode::Tree),
            "json" => Ok(OutputMode::Json),
            _ => Err(format!(
                "Invalid output mode: {}. Please specify 'tree' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputMode::Tree => write!(f, "tree"),
            OutputMode::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_mode_from_str() {
        assert_eq!(OutputMode::from_str("tree").unwrap(), OutputMode::Tree);
        assert_eq!(OutputMode::from_str("json").unwrap(), OutputMode::Json);
    }

    #[test]
    fn test_output_mode_from_str_case_insensitive() {
        assert_eq!(OutputMode::from_str("TREE").unwrap(), OutputMode::Tree);
        assert_eq!(OutputMode::from_str("Json").unwrap(), OutputMode::Json);
    }

    #[test]
    fn test_output_mode_from_str_invalid() {
        let error = OutputMode::from_str("yaml").unwrap_err();
        assert!(error.contains("Invalid output mode"));
        assert!(error.contains("yaml"));
        assert!(OutputMode::from_str("").is_err());
    }

    #[test]
    fn test_output_mode_display_and_default() {
        assert_eq!(OutputMode::Tree.to_string(), "tree");
        assert_eq!(OutputMode::Json.to_string(), "json");
        assert_eq!(OutputMode::default(), OutputMode::Tree);
    }
}
