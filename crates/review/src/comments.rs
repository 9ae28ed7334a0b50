//! Reviewer comments.
//!
//! Comments are kept behind [`ReviewCommentRepository`] so callers choose the
//! backing store (browser storage, a hosted table, memory in tests) and pass it
//! in explicitly.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rtcatalog_core::{CatalogError, CatalogResult, Clock, CommentId, ProductId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewComment {
    pub id: CommentId,
    pub product_id: ProductId,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Input for a new comment; id and timestamp are assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub product_id: ProductId,
    pub author: String,
    pub body: String,
}

impl NewComment {
    fn into_comment(self, id: CommentId, created_at: DateTime<Utc>) -> CatalogResult<ReviewComment> {
        if self.body.trim().is_empty() {
            return Err(CatalogError::validation("comment body cannot be empty"));
        }
        Ok(ReviewComment {
            id,
            product_id: self.product_id,
            author: self.author.trim().to_string(),
            body: self.body.trim().to_string(),
            created_at,
        })
    }
}

/// Storage for review comments, keyed by product.
pub trait ReviewCommentRepository: Send + Sync {
    fn add(&self, comment: NewComment) -> CatalogResult<ReviewComment>;
    /// Comments for a product, oldest first.
    fn list_for_product(&self, product_id: &ProductId) -> Vec<ReviewComment>;
    fn remove(&self, comment_id: CommentId) -> CatalogResult<ReviewComment>;
    /// Drop every comment for a product.
    fn clear(&self, product_id: &ProductId);
}

impl<R> ReviewCommentRepository for Arc<R>
where
    R: ReviewCommentRepository + ?Sized,
{
    fn add(&self, comment: NewComment) -> CatalogResult<ReviewComment> {
        (**self).add(comment)
    }

    fn list_for_product(&self, product_id: &ProductId) -> Vec<ReviewComment> {
        (**self).list_for_product(product_id)
    }

    fn remove(&self, comment_id: CommentId) -> CatalogResult<ReviewComment> {
        (**self).remove(comment_id)
    }

    fn clear(&self, product_id: &ProductId) {
        (**self).clear(product_id)
    }
}

/// In-memory comment store for tests/dev.
pub struct InMemoryCommentRepository<C = rtcatalog_core::SystemClock> {
    inner: RwLock<HashMap<ProductId, Vec<ReviewComment>>>,
    clock: C,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self::with_clock(rtcatalog_core::SystemClock)
    }
}

impl Default for InMemoryCommentRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> InMemoryCommentRepository<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            clock,
        }
    }
}

impl<C: Clock> ReviewCommentRepository for InMemoryCommentRepository<C> {
    fn add(&self, comment: NewComment) -> CatalogResult<ReviewComment> {
        let comment = comment.into_comment(CommentId::new(), self.clock.now())?;
        let mut map = self
            .inner
            .write()
            .map_err(|_| CatalogError::storage("comment store lock poisoned"))?;
        map.entry(comment.product_id.clone())
            .or_default()
            .push(comment.clone());

        tracing::debug!(product_id = %comment.product_id, comment_id = %comment.id, "review comment added");
        Ok(comment)
    }

    fn list_for_product(&self, product_id: &ProductId) -> Vec<ReviewComment> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };
        map.get(product_id).cloned().unwrap_or_default()
    }

    fn remove(&self, comment_id: CommentId) -> CatalogResult<ReviewComment> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| CatalogError::storage("comment store lock poisoned"))?;

        for comments in map.values_mut() {
            if let Some(position) = comments.iter().position(|c| c.id == comment_id) {
                return Ok(comments.remove(position));
            }
        }
        Err(CatalogError::not_found())
    }

    fn clear(&self, product_id: &ProductId) {
        if let Ok(mut map) = self.inner.write() {
            map.remove(product_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rtcatalog_core::FixedClock;

    fn product(id: &str) -> ProductId {
        ProductId::new(id).unwrap()
    }

    fn repo() -> InMemoryCommentRepository<FixedClock> {
        InMemoryCommentRepository::with_clock(FixedClock::at_date(
            NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
        ))
    }

    fn new_comment(product_id: &str, body: &str) -> NewComment {
        NewComment {
            product_id: product(product_id),
            author: " reviewer ".into(),
            body: body.into(),
        }
    }

    #[test]
    fn add_and_list_in_insertion_order() {
        let repo = repo();
        let first = repo.add(new_comment("a", "check CE status")).unwrap();
        repo.add(new_comment("a", "evidence link broken")).unwrap();
        repo.add(new_comment("b", "ok")).unwrap();

        let comments = repo.list_for_product(&product("a"));
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0], first);
        assert_eq!(comments[0].author, "reviewer");
        assert_eq!(comments[0].created_at.to_rfc3339(), "2025-01-02T00:00:00+00:00");
        assert!(repo.list_for_product(&product("zzz")).is_empty());
    }

    #[test]
    fn blank_body_is_rejected() {
        let err = repo().add(new_comment("a", "  ")).unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[test]
    fn remove_unknown_comment_is_not_found() {
        let repo = repo();
        let added = repo.add(new_comment("a", "x")).unwrap();
        assert_eq!(repo.remove(added.id).unwrap(), added);
        assert_eq!(repo.remove(added.id).unwrap_err(), CatalogError::NotFound);
    }

    #[test]
    fn poisoned_store_reports_storage_error() {
        let repo = Arc::new(repo());
        repo.add(new_comment("a", "x")).unwrap();

        let poisoner = Arc::clone(&repo);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.inner.write().unwrap();
            panic!("poison the comment store");
        })
        .join();

        let err = repo.add(new_comment("a", "y")).unwrap_err();
        assert!(matches!(err, CatalogError::Storage(_)));
        assert!(matches!(repo.remove(CommentId::new()), Err(CatalogError::Storage(_))));
        assert!(repo.list_for_product(&product("a")).is_empty());
    }

    #[test]
    fn clear_only_touches_one_product() {
        let repo = Arc::new(repo());
        repo.add(new_comment("a", "x")).unwrap();
        repo.add(new_comment("b", "y")).unwrap();

        let shared: Arc<dyn ReviewCommentRepository> = repo.clone();
        shared.clear(&product("a"));
        assert!(repo.list_for_product(&product("a")).is_empty());
        assert_eq!(repo.list_for_product(&product("b")).len(), 1);
    }
}
