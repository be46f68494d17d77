use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::Progress};

#[async_trait]
pub trait ProgressRepository: Send + Sync {
    async fn find_by_user_and_course(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> AppResult<Option<Progress>>;
    /// Inserts or replaces the record for the progress' user and course.
    async fn save(&self, progress: Progress) -> AppResult<Progress>;
}

pub struct MongoProgressRepository {
    collection: Collection<Progress>,
}

impl MongoProgressRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("progress");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for progress collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        // One record per learner and course.
        let user_course_index = IndexModel::builder()
            .keys(doc! { "userId": 1, "courseId": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("user_course_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(user_course_index).await?;

        log::info!("Successfully created indexes for progress collection");
        Ok(())
    }
}

#[async_trait]
impl ProgressRepository for MongoProgressRepository {
    async fn find_by_user_and_course(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> AppResult<Option<Progress>> {
        let progress = self
            .collection
            .find_one(doc! { "userId": user_id, "courseId": course_id })
            .await?;
        Ok(progress)
    }

    async fn save(&self, progress: Progress) -> AppResult<Progress> {
        self.collection
            .replace_one(
                doc! { "userId": &progress.user_id, "courseId": &progress.course_id },
                &progress,
            )
            .upsert(true)
            .await?;
        Ok(progress)
    }
}
