// src/infrastructure/repositories/mongo_post.rs
use super::map_mongo;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{CategoryFilter, NewPost, Post, PostId, PostRepository};
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc, oid::ObjectId},
};
use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub struct MongoPostRepository {
    collection: Collection<PostDocument>,
}

impl MongoPostRepository {
    pub fn new(database: &Database, collection_name: &str) -> Self {
        Self {
            collection: database.collection(collection_name),
        }
    }

    async fn find_many(&self, filter: Document) -> DomainResult<Vec<Post>> {
        let cursor = self.collection.find(filter).await.map_err(map_mongo)?;
        collect(cursor).await
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    #[serde(default)]
    title: String,
    #[serde(default)]
    excerpt: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    author_image: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    read_time: String,
    #[serde(default)]
    category: String,
    // Older records carry `null` here.
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default)]
    image: String,
    #[serde(default)]
    featured: bool,
}

impl From<&Post> for PostDocument {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            author: post.author.clone(),
            author_image: post.author_image.clone(),
            date: post.date.clone(),
            read_time: post.read_time.clone(),
            category: post.category.clone(),
            tags: Some(post.tags.clone()),
            image: post.image.clone(),
            featured: post.featured,
        }
    }
}

impl From<PostDocument> for Post {
    fn from(document: PostDocument) -> Self {
        Self {
            id: document.id.into(),
            title: document.title,
            excerpt: document.excerpt,
            content: document.content,
            author: document.author,
            author_image: document.author_image,
            date: document.date,
            read_time: document.read_time,
            category: document.category,
            tags: document.tags.unwrap_or_default(),
            image: document.image,
            featured: document.featured,
        }
    }
}

async fn collect(cursor: mongodb::Cursor<PostDocument>) -> DomainResult<Vec<Post>> {
    let documents: Vec<PostDocument> = cursor.try_collect().await.map_err(map_mongo)?;
    Ok(documents.into_iter().map(Post::from).collect())
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn create(&self, post: NewPost) -> DomainResult<Post> {
        let post = Post::with_id(PostId::generate(), post);
        self.collection
            .insert_one(PostDocument::from(&post))
            .await
            .map_err(map_mongo)?;
        Ok(post)
    }

    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let document = self
            .collection
            .find_one(filters::by_id(id))
            .await
            .map_err(map_mongo)?;
        Ok(document.map(Post::from))
    }

    async fn update(&self, id: PostId, post: NewPost) -> DomainResult<Option<Post>> {
        let post = Post::with_id(id, post);
        let result = self
            .collection
            .replace_one(filters::by_id(id), PostDocument::from(&post))
            .await
            .map_err(map_mongo)?;

        if result.matched_count == 0 {
            return Ok(None);
        }
        Ok(Some(post))
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        self.collection
            .delete_one(filters::by_id(id))
            .await
            .map_err(map_mongo)?;
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<Post>> {
        self.find_many(doc! {}).await
    }

    async fn find_featured(&self) -> DomainResult<Vec<Post>> {
        self.find_many(filters::featured()).await
    }

    async fn find_recent(&self, limit: u32) -> DomainResult<Vec<Post>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(filters::newest_first())
            .limit(i64::from(limit))
            .await
            .map_err(map_mongo)?;
        collect(cursor).await
    }

    async fn find_by_category(&self, filter: &CategoryFilter) -> DomainResult<Vec<Post>> {
        self.find_many(filters::category(filter)).await
    }

    async fn search(&self, query: &str) -> DomainResult<Vec<Post>> {
        self.find_many(filters::search(query)).await
    }

    async fn find_related(&self, id: PostId, limit: u32) -> DomainResult<Vec<Post>> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(DomainError::post_not_found)?;

        let cursor = self
            .collection
            .find(filters::related(&current))
            .limit(i64::from(limit))
            .await
            .map_err(map_mongo)?;
        collect(cursor).await
    }

    async fn distinct_categories(&self) -> DomainResult<Vec<String>> {
        let values = self
            .collection
            .distinct("category", doc! {})
            .await
            .map_err(map_mongo)?;

        Ok(values
            .into_iter()
            .filter_map(|value| value.as_str().map(str::to_string))
            .collect())
    }

    async fn popular_categories(&self, limit: u32) -> DomainResult<Vec<String>> {
        let cursor = self
            .collection
            .aggregate(filters::popular_categories(limit))
            .await
            .map_err(map_mongo)?;
        let groups: Vec<Document> = cursor.try_collect().await.map_err(map_mongo)?;

        Ok(groups
            .iter()
            .filter_map(|group| group.get_str("_id").ok().map(str::to_string))
            .collect())
    }
}

/// Query documents for the blog collection.
mod filters {
    use crate::domain::post::{CategoryFilter, Post, PostId};
    use mongodb::bson::{Document, doc, oid::ObjectId};

    const SEARCH_FIELDS: [&str; 4] = ["title", "excerpt", "content", "tags"];

    pub fn by_id(id: PostId) -> Document {
        doc! { "_id": ObjectId::from(id) }
    }

    pub fn featured() -> Document {
        doc! { "featured": true }
    }

    pub fn newest_first() -> Document {
        doc! { "date": -1 }
    }

    pub fn category(filter: &CategoryFilter) -> Document {
        match filter {
            CategoryFilter::All => doc! {},
            CategoryFilter::Exact(category) => doc! { "category": category.as_str() },
        }
    }

    pub fn search(query: &str) -> Document {
        let pattern = escape_regex(query);
        let clauses: Vec<Document> = SEARCH_FIELDS
            .iter()
            .map(|field| {
                let mut clause = Document::new();
                clause.insert(*field, doc! { "$regex": pattern.as_str(), "$options": "i" });
                clause
            })
            .collect();
        doc! { "$or": clauses }
    }

    pub fn related(post: &Post) -> Document {
        doc! {
            "_id": { "$ne": ObjectId::from(post.id) },
            "$or": [
                { "category": post.category.as_str() },
                { "tags": { "$in": post.tags.clone() } },
            ],
        }
    }

    pub fn popular_categories(limit: u32) -> Vec<Document> {
        vec![
            // Legacy records may lack a category; they must not take a ranking slot.
            doc! { "$match": { "category": { "$type": "string" } } },
            doc! { "$group": { "_id": "$category", "count": { "$sum": 1 } } },
            doc! { "$sort": { "count": -1, "_id": 1 } },
            doc! { "$limit": i64::from(limit) },
        ]
    }

    /// Queries are matched literally.
    pub fn escape_regex(input: &str) -> String {
        let mut escaped = String::with_capacity(input.len());
        for ch in input.chars() {
            if matches!(
                ch,
                '\\' | '.' | '^' | '$' | '|' | '?' | '*' | '+' | '(' | ')' | '[' | ']' | '{' | '}'
            ) {
                escaped.push('\\');
            }
            escaped.push(ch);
        }
        escaped
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::domain::post::NewPost;
        use mongodb::bson::Bson;

        fn post(category: &str, tags: &[&str]) -> Post {
            Post::with_id(
                PostId::generate(),
                NewPost {
                    category: category.into(),
                    tags: tags.iter().map(|t| (*t).to_string()).collect(),
                    ..NewPost::default()
                },
            )
        }

        #[test]
        fn all_category_is_an_empty_filter() {
            assert!(category(&CategoryFilter::All).is_empty());
            assert_eq!(
                category(&CategoryFilter::new("Tech")),
                doc! { "category": "Tech" }
            );
        }

        #[test]
        fn search_covers_every_text_field_case_insensitively() {
            let filter = search("rust");
            let clauses = filter.get_array("$or").unwrap();
            assert_eq!(clauses.len(), SEARCH_FIELDS.len());
            for (clause, field) in clauses.iter().zip(SEARCH_FIELDS) {
                let clause = clause.as_document().unwrap();
                let condition = clause.get_document(field).unwrap();
                assert_eq!(condition.get_str("$regex").unwrap(), "rust");
                assert_eq!(condition.get_str("$options").unwrap(), "i");
            }
        }

        #[test]
        fn search_escapes_regex_metacharacters() {
            assert_eq!(escape_regex("c++ (intro)"), r"c\+\+ \(intro\)");
            assert_eq!(escape_regex("a.b"), r"a\.b");
            assert_eq!(escape_regex("plain"), "plain");
        }

        #[test]
        fn related_excludes_self_and_matches_category_or_tags() {
            let current = post("Tech", &["go", "web"]);
            let filter = related(&current);

            let id_clause = filter.get_document("_id").unwrap();
            assert_eq!(
                id_clause.get("$ne"),
                Some(&Bson::ObjectId(ObjectId::from(current.id)))
            );

            let any = filter.get_array("$or").unwrap();
            assert_eq!(any.len(), 2);
            assert_eq!(any[0].as_document().unwrap(), &doc! { "category": "Tech" });
            let tags = any[1]
                .as_document()
                .unwrap()
                .get_document("tags")
                .unwrap()
                .get_array("$in")
                .unwrap();
            assert_eq!(tags, &vec![Bson::from("go"), Bson::from("web")]);
        }

        #[test]
        fn popular_pipeline_groups_sorts_with_tie_break_and_limits() {
            let pipeline = popular_categories(5);
            assert_eq!(pipeline.len(), 4);
            assert_eq!(
                pipeline[0],
                doc! { "$match": { "category": { "$type": "string" } } }
            );
            assert_eq!(
                pipeline[1],
                doc! { "$group": { "_id": "$category", "count": { "$sum": 1 } } }
            );

            let sort = pipeline[2].get_document("$sort").unwrap();
            let keys: Vec<&String> = sort.keys().collect();
            assert_eq!(keys, vec!["count", "_id"]);
            assert_eq!(sort.get_i32("count").unwrap(), -1);
            assert_eq!(sort.get_i32("_id").unwrap(), 1);

            assert_eq!(pipeline[3].get_i64("$limit").unwrap(), 5);
        }

        #[test]
        fn recent_sorts_by_date_descending() {
            assert_eq!(newest_first(), doc! { "date": -1 });
        }
    }
}
