use crate::domain::catalog::Page;
use serde::Deserialize;

/// Some listing endpoints answer with a paginated envelope and some with a
/// bare array, depending on backend version. Accept either.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Paged(Page<T>),
    Bare(Vec<T>),
}

impl<T> Listing<T> {
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Paged(page) => page.results,
            Self::Bare(items) => items,
        }
    }
}
