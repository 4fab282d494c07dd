//! Content store access.
//!
//! # Responsibilities
//! - Define the read/write contract the site uses against its backing
//!   store
//! - Provide the in-memory implementation used by default and in tests
//!
//! # Design Decisions
//! - All keys go through `CollectionId`; locale never appears as a raw
//!   string in a query
//! - Listings are ordered newest-first, matching the original's
//!   `order('created_at', ascending: false)`
//! - Slugs are unique per collection; ids are unique globally

use chrono::Utc;
use dashmap::DashMap;
use std::collections::HashMap;
use uuid::Uuid;

use crate::content::model::{Post, PostDraft, PostSummary};
use crate::i18n::locale::{CollectionId, Locale};

/// Store failure taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("post not found")]
    NotFound,
    #[error("slug already exists in collection: {0}")]
    DuplicateSlug(String),
}

/// Read/write contract against the content backend.
///
/// Reads are the public surface; writes are used only by the admin
/// surface. Implementations must be safe to share across request tasks.
pub trait ContentStore: Send + Sync {
    /// Fetch one post by its public key.
    fn get(&self, locale: Locale, slug: &str) -> Result<Post, StoreError>;

    /// List summaries for a locale, newest first.
    fn list(&self, locale: Locale) -> Vec<PostSummary>;

    /// Fetch one post by its admin key.
    fn fetch(&self, locale: Locale, id: Uuid) -> Result<Post, StoreError>;

    /// Create a post from a draft; assigns id and timestamps.
    fn create(&self, locale: Locale, draft: PostDraft) -> Result<Post, StoreError>;

    /// Replace a post's draft fields; bumps `updated_at`.
    fn update(&self, locale: Locale, id: Uuid, draft: PostDraft) -> Result<Post, StoreError>;

    /// Delete a post.
    fn delete(&self, locale: Locale, id: Uuid) -> Result<(), StoreError>;
}

/// In-memory store, one map per locale collection.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: DashMap<CollectionId, HashMap<Uuid, Post>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContentStore for MemoryStore {
    fn get(&self, locale: Locale, slug: &str) -> Result<Post, StoreError> {
        let collection = self
            .collections
            .get(&locale.collection())
            .ok_or(StoreError::NotFound)?;
        collection
            .values()
            .find(|p| p.slug == slug)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    fn list(&self, locale: Locale) -> Vec<PostSummary> {
        let Some(collection) = self.collections.get(&locale.collection()) else {
            return Vec::new();
        };
        let mut summaries: Vec<PostSummary> = collection.values().map(PostSummary::from).collect();
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        summaries
    }

    fn fetch(&self, locale: Locale, id: Uuid) -> Result<Post, StoreError> {
        self.collections
            .get(&locale.collection())
            .and_then(|c| c.get(&id).cloned())
            .ok_or(StoreError::NotFound)
    }

    fn create(&self, locale: Locale, draft: PostDraft) -> Result<Post, StoreError> {
        let mut collection = self.collections.entry(locale.collection()).or_default();

        if collection.values().any(|p| p.slug == draft.slug) {
            return Err(StoreError::DuplicateSlug(draft.slug));
        }

        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4(),
            slug: draft.slug,
            title: draft.title,
            excerpt: draft.excerpt,
            main_image: draft.main_image,
            content_blocks: draft.content_blocks,
            categories: draft.categories,
            tags: draft.tags,
            sources: draft.sources,
            created_at: now,
            updated_at: now,
        };
        collection.insert(post.id, post.clone());
        Ok(post)
    }

    fn update(&self, locale: Locale, id: Uuid, draft: PostDraft) -> Result<Post, StoreError> {
        let mut collection = self
            .collections
            .get_mut(&locale.collection())
            .ok_or(StoreError::NotFound)?;

        // The new slug must not collide with a different post
        if collection
            .values()
            .any(|p| p.id != id && p.slug == draft.slug)
        {
            return Err(StoreError::DuplicateSlug(draft.slug));
        }

        let post = collection.get_mut(&id).ok_or(StoreError::NotFound)?;
        post.slug = draft.slug;
        post.title = draft.title;
        post.excerpt = draft.excerpt;
        post.main_image = draft.main_image;
        post.content_blocks = draft.content_blocks;
        post.categories = draft.categories;
        post.tags = draft.tags;
        post.sources = draft.sources;
        post.updated_at = Utc::now();
        Ok(post.clone())
    }

    fn delete(&self, locale: Locale, id: Uuid) -> Result<(), StoreError> {
        let mut collection = self
            .collections
            .get_mut(&locale.collection())
            .ok_or(StoreError::NotFound)?;
        collection.remove(&id).map(|_| ()).ok_or(StoreError::NotFound)
    }
}
