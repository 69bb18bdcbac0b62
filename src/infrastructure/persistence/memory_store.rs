//! In-process implementation of the publisher and domain repositories.

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::entities::{Domain, NewDomain, Publisher, UpdateDomain};
use crate::domain::repositories::{DomainRepository, PublisherRepository};
use crate::error::AppError;

/// Process-memory store holding every publisher and its domains.
///
/// State lives for the lifetime of the value and is lost on restart. Each
/// operation takes the lock once for its full check-and-mutate sequence and
/// never awaits while holding it.
#[derive(Debug, Default)]
pub struct MemoryStore {
    publishers: RwLock<Vec<Publisher>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given publishers.
    pub fn from_publishers(publishers: Vec<Publisher>) -> Self {
        Self {
            publishers: RwLock::new(publishers),
        }
    }

    /// Creates a store holding two sample publishers with two domains each.
    pub fn with_sample_data() -> Self {
        let samples: [(&str, [(&str, i64, i64); 2]); 2] = [
            ("publisher 1", [("bla.com", 5, 3), ("bla1.com", 2, 30)]),
            ("publisher 2", [("walla.com", 0, 4), ("gar.com", 5, 3)]),
        ];

        let publishers = samples
            .into_iter()
            .map(|(name, domains)| {
                let mut publisher = Publisher::new(name.to_string());
                for (domain, desktop_ads, mobile_ads) in domains {
                    publisher.push_domain(NewDomain {
                        domain: domain.to_string(),
                        desktop_ads,
                        mobile_ads,
                    });
                }
                publisher
            })
            .collect();

        Self::from_publishers(publishers)
    }
}

fn publisher_not_found(name: &str) -> AppError {
    AppError::not_found("Publisher not found", json!({ "publisher": name }))
}

fn position_of(publishers: &[Publisher], name: &str) -> Result<usize, AppError> {
    publishers
        .iter()
        .position(|p| p.name == name)
        .ok_or_else(|| publisher_not_found(name))
}

/// True if any publisher other than the one at `skip` owns `domain`.
fn owned_elsewhere(publishers: &[Publisher], skip: usize, domain: &str) -> bool {
    publishers
        .iter()
        .enumerate()
        .any(|(i, p)| i != skip && p.has_domain(domain))
}

#[async_trait]
impl PublisherRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<Publisher>, AppError> {
        Ok(self.publishers.read().await.clone())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Publisher>, AppError> {
        let publishers = self.publishers.read().await;
        Ok(publishers.iter().find(|p| p.name == name).cloned())
    }

    async fn create(&self, name: String) -> Result<Publisher, AppError> {
        let mut publishers = self.publishers.write().await;

        if publishers.iter().any(|p| p.name == name) {
            return Err(AppError::duplicate(
                "Publisher already exists",
                json!({ "publisher": name }),
            ));
        }

        let publisher = Publisher::new(name);
        publishers.push(publisher.clone());
        Ok(publisher)
    }

    async fn rename(&self, old_name: &str, new_name: String) -> Result<Publisher, AppError> {
        let mut publishers = self.publishers.write().await;

        let index = position_of(&publishers, old_name)?;

        let taken = publishers
            .iter()
            .enumerate()
            .any(|(i, p)| i != index && p.name == new_name);
        if taken {
            return Err(AppError::duplicate(
                "Publisher with this name already exists",
                json!({ "publisher": new_name }),
            ));
        }

        publishers[index].name = new_name;
        Ok(publishers[index].clone())
    }

    async fn delete(&self, name: &str) -> Result<Publisher, AppError> {
        let mut publishers = self.publishers.write().await;

        let index = position_of(&publishers, name)?;
        Ok(publishers.remove(index))
    }
}

#[async_trait]
impl DomainRepository for MemoryStore {
    async fn create_domain(
        &self,
        publisher: &str,
        new_domain: NewDomain,
    ) -> Result<Domain, AppError> {
        let mut publishers = self.publishers.write().await;

        let index = position_of(&publishers, publisher)?;

        if publishers[index].has_domain(&new_domain.domain) {
            return Err(AppError::conflict(
                "Domain already exists for this publisher",
                json!({ "publisher": publisher, "domain": new_domain.domain }),
            ));
        }

        if owned_elsewhere(&publishers, index, &new_domain.domain) {
            return Err(AppError::conflict(
                "Domain already exists in another publisher",
                json!({ "domain": new_domain.domain }),
            ));
        }

        Ok(publishers[index].push_domain(new_domain))
    }

    async fn update_domain(
        &self,
        publisher: &str,
        domain: &str,
        update: UpdateDomain,
    ) -> Result<Domain, AppError> {
        let mut publishers = self.publishers.write().await;

        let index = position_of(&publishers, publisher)?;

        if let Some(new_name) = update.domain.as_deref() {
            if new_name != domain && publishers[index].has_domain(new_name) {
                return Err(AppError::duplicate(
                    "Domain already exists in the same publisher",
                    json!({ "publisher": publisher, "domain": new_name }),
                ));
            }

            if owned_elsewhere(&publishers, index, new_name) {
                return Err(AppError::duplicate(
                    "Domain already exists in another publisher",
                    json!({ "domain": new_name }),
                ));
            }
        }

        let owner = &mut publishers[index];
        let position = owner.domain_position(domain).ok_or_else(|| {
            AppError::not_found(
                "Domain not found",
                json!({ "publisher": publisher, "domain": domain }),
            )
        })?;

        let target = &mut owner.domains[position];
        target.apply(update);
        Ok(target.clone())
    }

    async fn delete_domain(&self, publisher: &str, domain: &str) -> Result<Domain, AppError> {
        let mut publishers = self.publishers.write().await;

        let index = position_of(&publishers, publisher)?;
        let owner = &mut publishers[index];

        let position = owner.domain_position(domain).ok_or_else(|| {
            AppError::not_found(
                "Domain not found",
                json!({ "publisher": publisher, "domain": domain }),
            )
        })?;

        Ok(owner.domains.remove(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_domain(name: &str, desktop_ads: i64, mobile_ads: i64) -> NewDomain {
        NewDomain {
            domain: name.to_string(),
            desktop_ads,
            mobile_ads,
        }
    }

    async fn store_with(publishers: &[&str]) -> MemoryStore {
        let store = MemoryStore::new();
        for name in publishers {
            store.create(name.to_string()).await.unwrap();
        }
        store
    }

    #[tokio::test]
    async fn test_sample_data() {
        let store = MemoryStore::with_sample_data();

        let publishers = store.list().await.unwrap();
        assert_eq!(publishers.len(), 2);
        assert_eq!(publishers[0].name, "publisher 1");
        assert_eq!(publishers[0].domains[0].domain, "bla.com");
        assert_eq!(publishers[0].domains[1].id, 2);
        assert_eq!(publishers[1].domains[0].desktop_ads, 0);
        assert_eq!(publishers[1].domains[0].mobile_ads, 4);
    }

    #[tokio::test]
    async fn test_create_publisher_appends_in_order() {
        let store = store_with(&["p1", "p2"]).await;

        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["p1", "p2"]);
    }

    #[tokio::test]
    async fn test_create_publisher_duplicate() {
        let store = store_with(&["p1"]).await;

        let err = store.create("p1".to_string()).await.unwrap_err();

        assert!(err.is_conflict());
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_rename_keeps_domains() {
        let store = store_with(&["old"]).await;
        store
            .create_domain("old", new_domain("x.com", 1, 2))
            .await
            .unwrap();

        let renamed = store.rename("old", "new".to_string()).await.unwrap();

        assert_eq!(renamed.name, "new");
        assert_eq!(renamed.domains.len(), 1);
        assert!(store.find_by_name("old").await.unwrap().is_none());
        assert!(store.find_by_name("new").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_rename_to_taken_name_leaves_state() {
        let store = store_with(&["a", "b"]).await;
        let before = store.list().await.unwrap();

        let err = store.rename("a", "b".to_string()).await.unwrap_err();

        assert!(err.is_conflict());
        assert_eq!(store.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_rename_to_same_name() {
        let store = store_with(&["a"]).await;

        let renamed = store.rename("a", "a".to_string()).await.unwrap();

        assert_eq!(renamed.name, "a");
    }

    #[tokio::test]
    async fn test_rename_missing() {
        let store = MemoryStore::new();

        let err = store.rename("ghost", "x".to_string()).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_publisher_cascades() {
        let store = store_with(&["p"]).await;
        store
            .create_domain("p", new_domain("x.com", 1, 2))
            .await
            .unwrap();

        let removed = store.delete("p").await.unwrap();
        assert_eq!(removed.domains.len(), 1);

        let err = store.delete_domain("p", "x.com").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));

        // The domain name is free again once its owner is gone.
        store.create("q".to_string()).await.unwrap();
        store
            .create_domain("q", new_domain("x.com", 0, 0))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_domain_missing_publisher() {
        let store = MemoryStore::new();

        let err = store
            .create_domain("ghost", new_domain("x.com", 1, 2))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_create_domain_duplicate_same_publisher() {
        let store = store_with(&["p"]).await;
        store
            .create_domain("p", new_domain("x.com", 1, 2))
            .await
            .unwrap();

        let err = store
            .create_domain("p", new_domain("x.com", 3, 4))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_create_domain_duplicate_other_publisher() {
        let store = store_with(&["p", "q"]).await;
        store
            .create_domain("p", new_domain("x.com", 1, 2))
            .await
            .unwrap();

        let err = store
            .create_domain("q", new_domain("x.com", 1, 2))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_domain_ids_never_reused() {
        let store = store_with(&["p"]).await;
        for name in ["a.com", "b.com", "c.com"] {
            store.create_domain("p", new_domain(name, 0, 0)).await.unwrap();
        }

        store.delete_domain("p", "c.com").await.unwrap();
        let d = store
            .create_domain("p", new_domain("d.com", 0, 0))
            .await
            .unwrap();

        assert_eq!(d.id, 4);
    }

    #[tokio::test]
    async fn test_domain_ids_are_per_publisher() {
        let store = store_with(&["p", "q"]).await;

        let a = store.create_domain("p", new_domain("a.com", 0, 0)).await.unwrap();
        let b = store.create_domain("q", new_domain("b.com", 0, 0)).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 1);
    }

    #[tokio::test]
    async fn test_update_domain_merges_fields() {
        let store = store_with(&["p"]).await;
        store
            .create_domain("p", new_domain("x.com", 1, 2))
            .await
            .unwrap();

        let updated = store
            .update_domain(
                "p",
                "x.com",
                UpdateDomain {
                    desktop_ads: Some(10),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated, Domain::new(1, "x.com".to_string(), 10, 2));
    }

    #[tokio::test]
    async fn test_update_domain_rename() {
        let store = store_with(&["p"]).await;
        store
            .create_domain("p", new_domain("x.com", 1, 2))
            .await
            .unwrap();

        let updated = store
            .update_domain(
                "p",
                "x.com",
                UpdateDomain {
                    domain: Some("y.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.domain, "y.com");
        let publisher = store.find_by_name("p").await.unwrap().unwrap();
        assert!(publisher.has_domain("y.com"));
        assert!(!publisher.has_domain("x.com"));
    }

    #[tokio::test]
    async fn test_update_domain_keeping_own_name() {
        let store = store_with(&["p"]).await;
        store
            .create_domain("p", new_domain("x.com", 1, 2))
            .await
            .unwrap();

        let updated = store
            .update_domain(
                "p",
                "x.com",
                UpdateDomain {
                    domain: Some("x.com".to_string()),
                    mobile_ads: Some(9),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.mobile_ads, 9);
    }

    #[tokio::test]
    async fn test_update_domain_collides_same_publisher() {
        let store = store_with(&["p"]).await;
        store.create_domain("p", new_domain("x.com", 1, 2)).await.unwrap();
        store.create_domain("p", new_domain("y.com", 1, 2)).await.unwrap();

        let err = store
            .update_domain(
                "p",
                "x.com",
                UpdateDomain {
                    domain: Some("y.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Duplicate { .. }));
    }

    #[tokio::test]
    async fn test_update_domain_collides_other_publisher() {
        let store = store_with(&["p", "q"]).await;
        store.create_domain("p", new_domain("x.com", 1, 2)).await.unwrap();
        store.create_domain("q", new_domain("y.com", 1, 2)).await.unwrap();

        let err = store
            .update_domain(
                "p",
                "x.com",
                UpdateDomain {
                    domain: Some("y.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Duplicate { .. }));
    }

    #[tokio::test]
    async fn test_update_domain_missing() {
        let store = store_with(&["p"]).await;

        let err = store
            .update_domain("p", "ghost.com", UpdateDomain::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_domain() {
        let store = store_with(&["p"]).await;
        store.create_domain("p", new_domain("x.com", 1, 2)).await.unwrap();

        let removed = store.delete_domain("p", "x.com").await.unwrap();

        assert_eq!(removed.domain, "x.com");
        let publisher = store.find_by_name("p").await.unwrap().unwrap();
        assert!(publisher.domains.is_empty());
    }
}
