use crate::error::MapError;
use crate::models::{Category, Entity, Links};
use crate::services::coerce::{to_id, to_integer};
use crate::services::xtream::types::XtreamCategory;

use super::identity;

/// Category with an optional parent
///
/// The provider uses `0` for "no parent", so a zero parent id (numeric or
/// `"0"`) produces no link.
pub fn map_category(category: XtreamCategory) -> Result<Entity<Category>, MapError> {
    let id = identity("category", "category_id", category.category_id.as_ref())?;

    let parent_id = match to_integer(category.parent_id.as_ref()) {
        Some(0) => None,
        _ => to_id(category.parent_id.as_ref()),
    };

    let attributes = Category {
        name: category.category_name.unwrap_or_default(),
    };

    Ok(Entity::new(id, attributes).with_links(Links {
        parent_id,
        ..Default::default()
    }))
}
