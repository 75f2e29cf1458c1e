//! HAL hypermedia envelopes.
//!
//! Single resources serialize as their own fields plus `_links`; collections
//! as `_embedded.<rel>` plus a `self` link echoing the request URI.

use std::collections::BTreeMap;

use axum::{
    http::{header, HeaderValue, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

pub const HAL_JSON: &str = "application/hal+json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Link {
    pub href: String,
}

pub type Links = BTreeMap<&'static str, Link>;

/// A record that can be addressed under a collection path.
pub trait HalResource: Serialize {
    /// Relation name of the collection, also the `_embedded` key.
    const REL: &'static str;
    /// Collection path, without the public base URL.
    const PATH: &'static str;

    fn id(&self) -> i64;

    /// Extra `(rel, path)` pairs, e.g. the owning user.
    fn related(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

#[derive(Debug, Serialize)]
pub struct EntityModel<T> {
    #[serde(flatten)]
    pub content: T,
    #[serde(rename = "_links")]
    pub links: Links,
}

#[derive(Debug, Serialize)]
pub struct CollectionModel<T> {
    #[serde(rename = "_embedded")]
    pub embedded: BTreeMap<&'static str, Vec<EntityModel<T>>>,
    #[serde(rename = "_links")]
    pub links: Links,
}

#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base: String,
}

impl LinkBuilder {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn link(&self, path: &str) -> Link {
        Link {
            href: format!("{}{}", self.base, path),
        }
    }

    pub fn self_link(&self, uri: &Uri) -> Link {
        let path = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
        self.link(path)
    }

    pub fn item_path<T: HalResource>(id: i64) -> String {
        format!("{}/{}", T::PATH, id)
    }

    pub fn entity<T: HalResource>(&self, content: T) -> EntityModel<T> {
        let mut links = Links::new();
        links.insert("self", self.link(&Self::item_path::<T>(content.id())));
        links.insert(T::REL, self.link(T::PATH));
        for (rel, path) in content.related() {
            links.insert(rel, self.link(&path));
        }
        EntityModel { content, links }
    }

    pub fn collection<T: HalResource>(&self, items: Vec<T>, uri: &Uri) -> CollectionModel<T> {
        let items = items.into_iter().map(|i| self.entity(i)).collect();
        let mut links = Links::new();
        links.insert("self", self.self_link(uri));
        CollectionModel {
            embedded: BTreeMap::from([(T::REL, items)]),
            links,
        }
    }
}

/// JSON response tagged `application/hal+json`.
#[derive(Debug)]
pub struct Hal<T>(pub T);

impl<T: Serialize> IntoResponse for Hal<T> {
    fn into_response(self) -> Response {
        let mut res = Json(self.0).into_response();
        if res.status().is_success() {
            res.headers_mut()
                .insert(header::CONTENT_TYPE, HeaderValue::from_static(HAL_JSON));
        }
        res
    }
}
