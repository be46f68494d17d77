use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::Course};

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>>;
    /// Newest first.
    async fn list_by_instructor(&self, instructor_id: &str) -> AppResult<Vec<Course>>;
    /// Newest first.
    async fn list_all(&self) -> AppResult<Vec<Course>>;
    async fn create(&self, course: Course) -> AppResult<Course>;
    async fn update(&self, course: Course) -> AppResult<Course>;
    /// Returns `false` when nothing was deleted.
    async fn delete(&self, id: &str) -> AppResult<bool>;
}

pub struct MongoCourseRepository {
    collection: Collection<Course>,
}

impl MongoCourseRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("courses");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for courses collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let instructor_index = IndexModel::builder()
            .keys(doc! { "instructorId": 1, "createdAt": -1 })
            .options(
                IndexOptions::builder()
                    .name("instructor_created_at".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(instructor_index).await?;

        log::info!("Successfully created indexes for courses collection");
        Ok(())
    }
}

#[async_trait]
impl CourseRepository for MongoCourseRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>> {
        let course = self.collection.find_one(doc! { "id": id }).await?;
        Ok(course)
    }

    async fn list_by_instructor(&self, instructor_id: &str) -> AppResult<Vec<Course>> {
        let cursor = self
            .collection
            .find(doc! { "instructorId": instructor_id })
            .sort(doc! { "createdAt": -1 })
            .await?;
        let items: Vec<Course> = cursor.try_collect().await?;
        Ok(items)
    }

    async fn list_all(&self) -> AppResult<Vec<Course>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .await?;
        let items: Vec<Course> = cursor.try_collect().await?;
        Ok(items)
    }

    async fn create(&self, course: Course) -> AppResult<Course> {
        self.collection.insert_one(&course).await?;
        Ok(course)
    }

    async fn update(&self, course: Course) -> AppResult<Course> {
        self.collection
            .replace_one(doc! { "id": &course.id }, &course)
            .await?;
        Ok(course)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
