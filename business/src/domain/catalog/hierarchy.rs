use std::collections::{HashMap, HashSet};

use super::errors::CatalogError;
use super::model::Category;
use crate::domain::shared::value_objects::CategoryId;

/// Ancestors of `leaf` ordered root first, `leaf` included.
///
/// Parents missing from `categories` end the trail early; a parent chain that
/// loops back on itself is rejected.
pub fn category_trail<'a>(
    categories: &'a [Category],
    leaf: &CategoryId,
) -> Result<Vec<&'a Category>, CatalogError> {
    let by_id: HashMap<&CategoryId, &Category> = categories.iter().map(|c| (&c.id, c)).collect();

    let mut trail = Vec::new();
    let mut seen = HashSet::new();
    let mut cursor = by_id.get(leaf).copied();

    while let Some(category) = cursor {
        if !seen.insert(&category.id) {
            return Err(CatalogError::CategoryCycle);
        }
        trail.push(category);
        cursor = category
            .parent_id
            .as_ref()
            .and_then(|parent| by_id.get(parent).copied());
    }

    trail.reverse();
    Ok(trail)
}

/// Checks that no category is its own ancestor.
pub fn validate_hierarchy(categories: &[Category]) -> Result<(), CatalogError> {
    for category in categories {
        category_trail(categories, &category.id)?;
    }
    Ok(())
}

/// Direct children of `parent`, ordered by `display_order` then name.
pub fn children_of<'a>(categories: &'a [Category], parent: &CategoryId) -> Vec<&'a Category> {
    let mut children: Vec<&Category> = categories
        .iter()
        .filter(|c| c.parent_id.as_ref() == Some(parent))
        .collect();
    children.sort_by(|a, b| {
        a.display_order
            .cmp(&b.display_order)
            .then_with(|| a.name.cmp(&b.name))
    });
    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::fixtures::category;

    #[test]
    fn should_build_trail_from_root_to_leaf() {
        let categories = vec![
            category("leaf", "oled-tvs", Some("mid")),
            category("root", "electronics", None),
            category("mid", "televisions", Some("root")),
        ];

        let trail = category_trail(&categories, &CategoryId::new("leaf")).unwrap();
        let slugs: Vec<&str> = trail.iter().map(|c| c.slug.as_str()).collect();

        assert_eq!(slugs, vec!["electronics", "televisions", "oled-tvs"]);
    }

    #[test]
    fn should_stop_at_missing_parent() {
        let categories = vec![category("leaf", "sofas", Some("gone"))];

        let trail = category_trail(&categories, &CategoryId::new("leaf")).unwrap();

        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn should_return_empty_trail_for_unknown_category() {
        let trail = category_trail(&[], &CategoryId::new("nope")).unwrap();
        assert!(trail.is_empty());
    }

    #[test]
    fn should_reject_cyclic_parent_chain() {
        let categories = vec![
            category("a", "a", Some("b")),
            category("b", "b", Some("a")),
        ];

        let result = category_trail(&categories, &CategoryId::new("a"));

        assert!(matches!(result.unwrap_err(), CatalogError::CategoryCycle));
        assert!(validate_hierarchy(&categories).is_err());
    }

    #[test]
    fn should_accept_acyclic_hierarchy() {
        let categories = vec![
            category("root", "furniture", None),
            category("a", "sofas", Some("root")),
            category("b", "beds", Some("root")),
        ];

        assert!(validate_hierarchy(&categories).is_ok());
    }

    #[test]
    fn should_order_children_by_display_order() {
        let mut beds = category("b", "beds", Some("root"));
        beds.display_order = 1;
        let mut sofas = category("a", "sofas", Some("root"));
        sofas.display_order = 2;
        let categories = vec![category("root", "furniture", None), sofas, beds];

        let children = children_of(&categories, &CategoryId::new("root"));
        let slugs: Vec<&str> = children.iter().map(|c| c.slug.as_str()).collect();

        assert_eq!(slugs, vec!["beds", "sofas"]);
    }
}
