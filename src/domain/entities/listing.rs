use serde::Serialize;

/// Where a listing's items came from. `Sample` means the store read failed
/// and the fixed placeholder content was substituted; callers can surface a
/// "showing sample content" notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    Live,
    Sample,
}

/// An ordered result set plus its provenance. An empty `Live` listing means
/// "no matches", which is a valid terminal state, not an error.
#[derive(Debug, Serialize)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub source: ContentSource,
}

impl<T> Listing<T> {
    pub fn live(items: Vec<T>) -> Self {
        Listing { items, source: ContentSource::Live }
    }

    pub fn sample(items: Vec<T>) -> Self {
        Listing { items, source: ContentSource::Sample }
    }

    pub fn is_sample(&self) -> bool {
        self.source == ContentSource::Sample
    }
}
