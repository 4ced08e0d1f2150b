use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::errors::errors::{ServiceError, ServiceResult};

/// Name of the collection holding user documents
pub const USERS_COLLECTION: &str = "users";

/// A user document as stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// A user document about to be inserted; the store assigns the `_id`
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// Fields settable by an update; absent fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
}

impl UserPatch {
    /// Build the `$set` document from the fields that are present
    fn to_set_document(&self) -> Document {
        let mut set = Document::new();
        if let Some(ref name) = self.name {
            set.insert("name", name.as_str());
        }
        if let Some(ref age) = self.age {
            set.insert("age", age.as_str());
        }
        if let Some(ref gender) = self.gender {
            set.insert("gender", gender.as_str());
        }
        set
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.gender.is_none()
    }
}

/// Match/modify counts reported by an update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateReport {
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Data access layer for the users collection
///
/// Holds a typed collection handle; the underlying `mongodb::Client` is pooled and
/// cheaply clonable, so `UserStore` is safe to clone into every request handler.
#[derive(Clone)]
pub struct UserStore {
    collection: Collection<User>,
}

impl UserStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<User>(USERS_COLLECTION),
        }
    }

    /// Fetch a single user by its hex id
    ///
    /// Rejects malformed ids before any round-trip to the database.
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: &str) -> ServiceResult<User> {
        let oid = parse_object_id(id)?;

        self.collection
            .find_one(doc! { "_id": oid })
            .await?
            .ok_or_else(|| ServiceError::UserNotFound(id.to_string()))
    }

    /// Fetch every user in the collection
    #[instrument(skip(self))]
    pub async fn find_all(&self) -> ServiceResult<Vec<User>> {
        let cursor = self.collection.find(doc! {}).await?;

        // A decode failure mid-cursor surfaces as a DatabaseError response
        let users = cursor.try_collect().await?;
        Ok(users)
    }

    /// Insert a new user and return the generated id
    #[instrument(skip(self, user))]
    pub async fn insert(&self, user: &NewUser) -> ServiceResult<ObjectId> {
        let result = self
            .collection
            .clone_with_type::<NewUser>()
            .insert_one(user)
            .await?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            ServiceError::InternalServerError("insert did not return an object id".to_string())
        })
    }

    /// Apply a partial update to the user with the given hex id
    ///
    /// A valid id that matches no document is not an error; the caller sees
    /// `matched_count == 0` in the report.
    #[instrument(skip(self, patch))]
    pub async fn update_by_id(&self, id: &str, patch: &UserPatch) -> ServiceResult<UpdateReport> {
        let oid = parse_object_id(id)?;

        if patch.is_empty() {
            return Err(ServiceError::ValidationError(
                "no updatable fields provided".to_string(),
            ));
        }

        let result = self
            .collection
            .update_one(doc! { "_id": oid }, doc! { "$set": patch.to_set_document() })
            .await?;

        Ok(UpdateReport {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    /// Delete the user with the given hex id, returning the delete count
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: &str) -> ServiceResult<u64> {
        let oid = parse_object_id(id)?;

        let result = self.collection.delete_one(doc! { "_id": oid }).await?;

        if result.deleted_count == 0 {
            return Err(ServiceError::UserNotFound(id.to_string()));
        }

        Ok(result.deleted_count)
    }
}

/// Parse a path id into an ObjectId, mapping failures to InvalidUserId
fn parse_object_id(id: &str) -> ServiceResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| ServiceError::InvalidUserId(id.to_string()))
}
