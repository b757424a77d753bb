use crate::prelude::*;

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);
pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// Debounced front of an [`IdentitySearch`]: only the latest query reaches
/// the provider.
#[derive(Debug, Builder)]
pub struct UserSearch<S> {
    provider: S,

    #[builder(default = DEFAULT_SEARCH_DEBOUNCE)]
    debounce: Duration,

    #[builder(default = DEFAULT_SEARCH_LIMIT)]
    limit: usize,

    #[builder(skip)]
    generation: AtomicU64,
}

impl<S> UserSearch<S>
where
    S: IdentitySearch,
{
    pub fn new(provider: S) -> Self {
        Self::builder().provider(provider).build()
    }

    fn is_latest(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Searches for `query` once it has been stable for the debounce delay.
    ///
    /// Returns `None` when a newer query superseded this one. An empty query
    /// clears the results right away. Provider errors are logged and give an
    /// empty result.
    pub async fn search(&self, query: &str) -> Option<Vec<SearchedUser>> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let query = query.trim();
        if query.is_empty() {
            return Some(Vec::new());
        }

        tokio::time::sleep(self.debounce).await;
        if !self.is_latest(generation) {
            trace!("Search for `{query}` superseded");
            return None;
        }

        let users = match self.provider.search_users(query, self.limit).await {
            Ok(users) => users,
            Err(e) => {
                error!("Error searching users: {e}");
                Vec::new()
            }
        };
        self.is_latest(generation).then_some(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    const ALICE: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";
    const BOB: &str = "0x742D35cC6634c0532925a3B844BC9E7595F0beBB";

    struct FakeDirectory {
        users: Vec<SearchedUser>,
        queries: Mutex<Vec<String>>,
        fail: bool,
    }

    impl FakeDirectory {
        fn new(fail: bool) -> Self {
            let user = |fid: u64, username: &str, custody: Option<&str>| {
                SearchedUser::builder()
                    .fid(fid)
                    .username(username)
                    .maybe_custody_address(custody.map(|a| a.parse().unwrap()))
                    .build()
            };
            Self {
                users: vec![
                    user(1, "alice", Some(ALICE)),
                    user(2, "alicia", None),
                    user(3, "bob", Some(BOB)),
                ],
                queries: Mutex::new(Vec::new()),
                fail,
            }
        }

        fn queries(&self) -> Vec<String> {
            self.queries.lock().unwrap().clone()
        }
    }

    impl IdentitySearch for FakeDirectory {
        fn search_users<'a>(
            &'a self,
            query: &'a str,
            limit: usize,
        ) -> BoxFuture<'a, Result<Vec<SearchedUser>, SearchError>> {
            self.queries.lock().unwrap().push(query.to_owned());
            let result = if self.fail {
                Err(SearchError::RequestFailed {
                    underlying: "401".to_owned(),
                })
            } else {
                Ok(self
                    .users
                    .iter()
                    .filter(|u| u.username().contains(query))
                    .take(limit)
                    .cloned()
                    .collect())
            };
            Box::pin(async move { result })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn finds_users_after_debounce() {
        let search = UserSearch::new(FakeDirectory::new(false));
        let users = search.search("ali").await.unwrap();
        let names = users
            .iter()
            .map(|u| u.username().as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["alice", "alicia"]);
        assert!(users[0].custody_address().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn newer_query_wins() {
        let search = UserSearch::new(FakeDirectory::new(false));
        let (first, second) = tokio::join!(search.search("a"), async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            search.search("bob").await
        });
        assert_eq!(first, None);
        assert_eq!(second.unwrap().len(), 1);
        assert_eq!(search.provider.queries(), vec!["bob".to_owned()]);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_query_clears_without_lookup() {
        let search = UserSearch::new(FakeDirectory::new(false));
        assert_eq!(search.search("  ").await, Some(Vec::new()));
        assert!(search.provider.queries().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn provider_errors_give_empty_results() {
        let search = UserSearch::builder()
            .provider(FakeDirectory::new(true))
            .limit(2)
            .build();
        assert_eq!(search.search("alice").await, Some(Vec::new()));
    }
}
