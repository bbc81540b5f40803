//! Listing filters

/// Category filter and 1-based pagination for listing calls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub category_id: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl Filter {
    pub fn category(category_id: impl Into<String>) -> Self {
        Self {
            category_id: Some(category_id.into()),
            ..Default::default()
        }
    }

    pub fn page(mut self, page: usize, limit: usize) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }

    /// `&category_id=..` suffix for the action, if filtered
    pub fn category_param(&self) -> String {
        match self.category_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => format!("&category_id={}", urlencoding::encode(id)),
            _ => String::new(),
        }
    }

    /// Keep the requested page; everything when page or limit is unset
    ///
    /// Page 0 is treated as page 1.
    pub fn paginate<T>(&self, items: Vec<T>) -> Vec<T> {
        match (self.page, self.limit) {
            (Some(page), Some(limit)) => {
                let start = page.saturating_sub(1).saturating_mul(limit);
                items.into_iter().skip(start).take(limit).collect()
            }
            _ => items,
        }
    }
}
