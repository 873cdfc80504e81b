//! Entity names shared between web UI routes and the REST API.

use serde::{Deserialize, Serialize};

/// Web UI path name → API entity type.
///
/// The two naming schemes currently coincide for every mapped entity.
const ENTITY_TABLE: &[(&str, &str)] = &[
    ("leads", "leads"),
    ("contacts", "contacts"),
    ("companies", "companies"),
    ("customers", "customers"),
    ("catalogs", "catalogs"),
    ("tasks", "tasks"),
];

/// Map a web UI path name to its API entity type.
///
/// Names missing from the table are returned unchanged.
pub fn canonical_entity(name: &str) -> &str {
    ENTITY_TABLE
        .iter()
        .find(|(ui, _)| *ui == name)
        .map(|(_, api)| *api)
        .unwrap_or(name)
}

/// A CRM entity with a web UI list page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Entity {
    Leads,
    Contacts,
    Companies,
    Customers,
    Catalogs,
    Tasks,
}

impl Entity {
    /// All entities, in table order.
    pub const ALL: [Entity; 6] = [
        Entity::Leads,
        Entity::Contacts,
        Entity::Companies,
        Entity::Customers,
        Entity::Catalogs,
        Entity::Tasks,
    ];

    /// API entity type, e.g. `"leads"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Entity::Leads => "leads",
            Entity::Contacts => "contacts",
            Entity::Companies => "companies",
            Entity::Customers => "customers",
            Entity::Catalogs => "catalogs",
            Entity::Tasks => "tasks",
        }
    }

    /// Path segment of the web UI list route, e.g. `"leads"` in `/leads/list/`.
    pub fn path_segment(&self) -> &'static str {
        self.as_str()
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Entity {
    type Err = String;

    /// Accepts the plural API name and the singular form (`lead`, `contact`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let entity = match normalized.as_str() {
            "leads" | "lead" => Entity::Leads,
            "contacts" | "contact" => Entity::Contacts,
            "companies" | "company" => Entity::Companies,
            "customers" | "customer" => Entity::Customers,
            "catalogs" | "catalog" => Entity::Catalogs,
            "tasks" | "task" => Entity::Tasks,
            _ => return Err(format!("unknown entity '{}'", s)),
        };
        Ok(entity)
    }
}
