//! In-memory `WorkOfArtRepository`.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{WorkOfArtPersistenceError, WorkOfArtRepository};
use crate::domain::{Medium, UserId, WorkOfArt, WorkOfArtId};

/// Process-local work of art store. Writes are last-write-wins.
#[derive(Default)]
pub struct InMemoryWorkOfArtRepository {
    works: RwLock<HashMap<WorkOfArtId, WorkOfArt>>,
}

impl InMemoryWorkOfArtRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn collect<F>(&self, keep: F) -> Result<Vec<WorkOfArt>, WorkOfArtPersistenceError>
    where
        F: Fn(&WorkOfArt) -> bool,
    {
        let works = self.works.read().map_err(|_| poisoned())?;
        Ok(works.values().filter(|work| keep(work)).cloned().collect())
    }
}

fn poisoned() -> WorkOfArtPersistenceError {
    WorkOfArtPersistenceError::query("work of art store lock poisoned")
}

#[async_trait]
impl WorkOfArtRepository for InMemoryWorkOfArtRepository {
    async fn find_by_id(
        &self,
        id: &WorkOfArtId,
    ) -> Result<Option<WorkOfArt>, WorkOfArtPersistenceError> {
        let works = self.works.read().map_err(|_| poisoned())?;
        Ok(works.get(id).cloned())
    }

    async fn find_all(
        &self,
        mediums: &[Medium],
    ) -> Result<Vec<WorkOfArt>, WorkOfArtPersistenceError> {
        self.collect(|work| mediums.is_empty() || mediums.contains(&work.medium))
    }

    async fn find_by_owner(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<WorkOfArt>, WorkOfArtPersistenceError> {
        self.collect(|work| &work.user_id == user_id)
    }

    async fn save(&self, work: &WorkOfArt) -> Result<(), WorkOfArtPersistenceError> {
        let mut works = self.works.write().map_err(|_| poisoned())?;
        works.insert(work.id, work.clone());
        Ok(())
    }

    async fn delete(&self, id: &WorkOfArtId) -> Result<bool, WorkOfArtPersistenceError> {
        let mut works = self.works.write().map_err(|_| poisoned())?;
        Ok(works.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{User, UserName, WorkOfArtContent};
    use chrono::Utc;
    use rstest::rstest;

    fn work(owner: &User, medium: Medium) -> WorkOfArt {
        let content = WorkOfArtContent {
            challenge_id: None,
            title: format!("{medium} study"),
            description: None,
            image_url: "https://img.example/study.png".to_owned(),
            medium,
            materials: Vec::new(),
        };
        WorkOfArt::new(WorkOfArtId::random(), owner, content, Utc::now())
    }

    fn artist(name: &str) -> User {
        User::new(UserId::random(), UserName::new(name).expect("name"))
    }

    #[rstest]
    #[case(vec![], 3)]
    #[case(vec![Medium::Oil], 2)]
    #[case(vec![Medium::Oil, Medium::Ink], 3)]
    #[case(vec![Medium::Digital], 0)]
    #[tokio::test]
    async fn find_all_filters_by_medium(#[case] filter: Vec<Medium>, #[case] expected: usize) {
        let repo = InMemoryWorkOfArtRepository::new();
        let owner = artist("octocat");
        for medium in [Medium::Oil, Medium::Oil, Medium::Ink] {
            repo.save(&work(&owner, medium)).await.expect("save");
        }

        let found = repo.find_all(&filter).await.expect("listing");
        assert_eq!(found.len(), expected);
    }

    #[tokio::test]
    async fn find_by_owner_ignores_other_users() {
        let repo = InMemoryWorkOfArtRepository::new();
        let octocat = artist("octocat");
        let hubot = artist("hubot");
        repo.save(&work(&octocat, Medium::Oil)).await.expect("save");
        repo.save(&work(&hubot, Medium::Ink)).await.expect("save");

        let found = repo.find_by_owner(octocat.id()).await.expect("listing");
        assert_eq!(found.len(), 1);
        assert!(found.iter().all(|w| &w.user_id == octocat.id()));
    }

    #[tokio::test]
    async fn save_overwrites_and_delete_reports_presence() {
        let repo = InMemoryWorkOfArtRepository::new();
        let mut stored = work(&artist("octocat"), Medium::Oil);
        repo.save(&stored).await.expect("save");
        stored.title = "renamed".to_owned();
        repo.save(&stored).await.expect("overwrite");

        let fetched = repo
            .find_by_id(&stored.id)
            .await
            .expect("lookup")
            .expect("present");
        assert_eq!(fetched.title, "renamed");

        assert!(repo.delete(&stored.id).await.expect("delete"));
        assert!(!repo.delete(&stored.id).await.expect("second delete"));
    }
}
