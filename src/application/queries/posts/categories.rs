use super::{DEFAULT_POPULAR_LIMIT, PostQueryService};
use crate::{application::error::ApplicationResult, domain::post::ALL_CATEGORIES};

pub struct ListPopularCategoriesQuery {
    pub limit: u32,
}

impl PostQueryService {
    /// The `All` sentinel first, then each stored category once in store order.
    pub async fn list_categories(&self) -> ApplicationResult<Vec<String>> {
        let stored = self.read_repo.distinct_categories().await?;

        let mut categories = Vec::with_capacity(stored.len() + 1);
        categories.push(ALL_CATEGORIES.to_string());
        for category in stored {
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        Ok(categories)
    }

    pub async fn list_popular_categories(
        &self,
        query: ListPopularCategoriesQuery,
    ) -> ApplicationResult<Vec<String>> {
        let limit = Self::normalize_limit(query.limit, DEFAULT_POPULAR_LIMIT);
        let categories = self.read_repo.popular_categories(limit).await?;
        Ok(categories)
    }
}
