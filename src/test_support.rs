//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::api::{FetchError, ImageLink, ImageRecord, ImageSource};

/// Builds `count` records with ids like `earth-2-0`, `earth-2-1`, ...
pub fn records(prefix: &str, page: u32, count: usize) -> Vec<ImageRecord> {
    (0..count)
        .map(|i| ImageRecord {
            id: format!("{prefix}-{page}-{i}"),
            title: format!("{prefix} image {i}"),
            links: vec![ImageLink {
                href: format!("https://images.test/{prefix}/{page}/{i}.jpg"),
            }],
            description: None,
            photographer: None,
        })
        .collect()
}

/// A single record, with or without a preview link.
pub fn record(id: &str, with_link: bool) -> ImageRecord {
    ImageRecord {
        id: id.to_string(),
        title: format!("Title of {id}"),
        links: if with_link {
            vec![ImageLink {
                href: format!("https://images.test/{id}.jpg"),
            }]
        } else {
            Vec::new()
        },
        description: Some("A description".to_string()),
        photographer: Some("NASA/JPL".to_string()),
    }
}

/// An image source that answers every page with ten generated records.
pub struct FakeSource;

#[async_trait]
impl ImageSource for FakeSource {
    fn name(&self) -> &str {
        "fake"
    }

    async fn search(&self, category: &str, page: u32) -> Result<Vec<ImageRecord>, FetchError> {
        Ok(records(category, page, 10))
    }
}
