use crate::prelude::*;

/// Finds accounts by user name, see [`UserSearch`] for the debounced wrapper.
pub trait IdentitySearch: Send + Sync {
    fn search_users<'a>(
        &'a self,
        query: &'a str,
        limit: usize,
    ) -> BoxFuture<'a, Result<Vec<SearchedUser>, SearchError>>;
}
