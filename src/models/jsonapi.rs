//! JSON:API documents
//!
//! `{"data": ..., "included": [...]}` with typed resources. Relationships
//! carry resource identifiers only; a resource with no relationships has no
//! `relationships` member at all.

use std::collections::BTreeMap;

use serde::Serialize;

use super::entity::{Episode, Season};

/// Resource type names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceType {
    UserProfile,
    ServerInfo,
    ChannelCategory,
    MovieCategory,
    ShowCategory,
    Channel,
    Movie,
    Show,
    Season,
    Episode,
    EpgListing,
}

/// `{type, id}` pointer to a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub id: String,
}

impl ResourceIdentifier {
    pub fn new(kind: ResourceType, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RelationshipData {
    One(ResourceIdentifier),
    Many(Vec<ResourceIdentifier>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relationship {
    pub data: RelationshipData,
}

impl Relationship {
    pub fn one(kind: ResourceType, id: impl Into<String>) -> Self {
        Self {
            data: RelationshipData::One(ResourceIdentifier::new(kind, id)),
        }
    }

    pub fn many<I, S>(kind: ResourceType, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            data: RelationshipData::Many(
                ids.into_iter()
                    .map(|id| ResourceIdentifier::new(kind, id))
                    .collect(),
            ),
        }
    }

    /// Ids referenced by this relationship, in order
    pub fn ids(&self) -> Vec<&str> {
        match &self.data {
            RelationshipData::One(identifier) => vec![identifier.id.as_str()],
            RelationshipData::Many(identifiers) => {
                identifiers.iter().map(|i| i.id.as_str()).collect()
            }
        }
    }
}

pub type Relationships = BTreeMap<&'static str, Relationship>;

/// A typed resource object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource<A> {
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub id: String,
    pub attributes: A,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub relationships: Relationships,
}

impl<A> Resource<A> {
    pub fn new(kind: ResourceType, id: impl Into<String>, attributes: A) -> Self {
        Self {
            kind,
            id: id.into(),
            attributes,
            relationships: Relationships::new(),
        }
    }

    /// Add a relationship; `None` leaves the resource unchanged
    pub fn relate(mut self, name: &'static str, relationship: Option<Relationship>) -> Self {
        if let Some(relationship) = relationship {
            self.relationships.insert(name, relationship);
        }
        self
    }

    pub fn relationship(&self, name: &str) -> Option<&Relationship> {
        self.relationships.get(name)
    }

    pub fn identifier(&self) -> ResourceIdentifier {
        ResourceIdentifier::new(self.kind, self.id.clone())
    }
}

/// Resources that can appear in `included`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum IncludedResource {
    Season(Resource<Season>),
    Episode(Resource<Episode>),
}

impl IncludedResource {
    pub fn identifier(&self) -> ResourceIdentifier {
        match self {
            IncludedResource::Season(resource) => resource.identifier(),
            IncludedResource::Episode(resource) => resource.identifier(),
        }
    }
}

/// Top-level document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document<D> {
    pub data: D,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included: Option<Vec<IncludedResource>>,
}

impl<D> Document<D> {
    pub fn new(data: D) -> Self {
        Self {
            data,
            included: None,
        }
    }

    pub fn with_included(data: D, included: Vec<IncludedResource>) -> Self {
        Self {
            data,
            included: Some(included),
        }
    }
}
