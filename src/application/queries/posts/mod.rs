mod categories;
mod get_by_id;
mod list;
mod related;
mod search;
mod service;

pub use categories::ListPopularCategoriesQuery;
pub use get_by_id::GetPostByIdQuery;
pub use list::{ListPostsByCategoryQuery, ListRecentPostsQuery};
pub use related::ListRelatedPostsQuery;
pub use search::SearchPostsQuery;
pub use service::{
    DEFAULT_POPULAR_LIMIT, DEFAULT_RECENT_LIMIT, DEFAULT_RELATED_LIMIT, PostQueryService,
};
