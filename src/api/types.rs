//! # Image Archive Types
//!
//! Two layers live here:
//!
//! - The wire shape of the search endpoint (`SearchResponse` and friends),
//!   kept private to the crate and shaped exactly like the JSON body.
//! - The domain record (`ImageRecord`) that the rest of the app works with.
//!
//! ```text
//! { collection: { items: [ { data: [ {nasa_id, title, ...} ], links: [ {href} ] } ] } }
//!                               │                                │
//!                               └──── data[0] ───┐   ┌─ links ───┘
//!                                                ▼   ▼
//!                                             ImageRecord
//! ```

use serde::{Deserialize, Deserializer, Serialize};

/// A single link attached to an archive item (usually a thumbnail URL).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ImageLink {
    pub href: String,
}

/// A normalized image from the archive. Immutable once fetched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    pub id: String,
    pub title: String,
    pub links: Vec<ImageLink>,
    pub description: Option<String>,
    pub photographer: Option<String>,
}

impl ImageRecord {
    /// The first link, which the archive uses as the preview image.
    pub fn preview_href(&self) -> Option<&str> {
        self.links.first().map(|link| link.href.as_str())
    }
}

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Deserialize, Debug)]
pub(crate) struct SearchResponse {
    pub collection: Collection,
}

#[derive(Deserialize, Debug)]
pub(crate) struct Collection {
    pub items: Vec<RawItem>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct RawItem {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<RawData>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub links: Vec<ImageLink>,
}

/// Every field is optional on the wire; one sparse item must not sink the page.
#[derive(Deserialize, Debug)]
pub(crate) struct RawData {
    #[serde(default)]
    pub nasa_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub photographer: Option<String>,
}

/// `null` arrays read as empty ones.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl RawItem {
    /// Builds a record from `data[0]` and `links`. Items without metadata or
    /// without a `nasa_id` have no identifier and are dropped.
    pub(crate) fn into_record(self) -> Option<ImageRecord> {
        let RawItem { data, links } = self;
        let meta = data.into_iter().next()?;
        let id = meta.nasa_id.filter(|id| !id.trim().is_empty())?;
        Some(ImageRecord {
            id,
            title: meta.title.unwrap_or_default(),
            links,
            description: meta.description,
            photographer: meta.photographer,
        })
    }
}

impl SearchResponse {
    pub(crate) fn into_records(self) -> Vec<ImageRecord> {
        let total = self.collection.items.len();
        let records: Vec<ImageRecord> = self
            .collection
            .items
            .into_iter()
            .filter_map(RawItem::into_record)
            .collect();
        if records.len() < total {
            log::debug!(
                "Skipped {} archive items without metadata",
                total - records.len()
            );
        }
        records
    }
}
