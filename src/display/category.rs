//! Category display formatting

use crate::models::CategoryList;

/// Format categories as a numbered list, the numbers being valid menu choices
pub fn format_category_list(categories: &CategoryList) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    format!("Categories:\n{}", categories)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_list() {
        let output = format_category_list(&CategoryList::default());
        assert!(output.starts_with("Categories:\n1. Food\n2. Transportation\n"));
        assert!(output.ends_with("6. Other\n"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            format_category_list(&CategoryList::empty()),
            "No categories found.\n"
        );
    }
}
