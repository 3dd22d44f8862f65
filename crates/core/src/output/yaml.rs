//! YAML output formatter

use crate::output::FormatError;
use serde::Serialize;

/// Format any serializable value as YAML
pub fn format_yaml<T: Serialize + ?Sized>(data: &T) -> Result<String, FormatError> {
    serde_yaml::to_string(data).map_err(FormatError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Trail;
    use crate::output::tests::create_test_report;

    #[test]
    fn test_format_yaml() {
        let report = create_test_report(vec![Trail::from_path(&["Apparel", "Tees"], "Tee")]);
        let yaml = format_yaml(&report).unwrap();
        assert!(yaml.contains("productId: p1"));
        assert!(yaml.contains("trails:"));
        assert!(yaml.contains("- Apparel"));
    }
}
