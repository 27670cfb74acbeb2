use crate::args::{DEFAULT_NAMESERVERS, DEFAULT_ZONE_KIND};

const ZONE_DELIMITER: char = '.';
const SOA_EDIT_MODE: &str = "INCEPTION-INCREMENT";

/// Appends the trailing `.` the API expects, if missing.
#[must_use]
pub fn normalize_zone_name(name: &str) -> String {
    if name.ends_with(ZONE_DELIMITER) {
        name.to_owned()
    } else {
        format!("{}{}", name, ZONE_DELIMITER)
    }
}

/// Settings shared by every zone a create batch submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneTemplate {
    pub kind: String,
    pub nameservers: Vec<String>,
}

impl Default for ZoneTemplate {
    fn default() -> Self {
        Self {
            kind: DEFAULT_ZONE_KIND.to_owned(),
            nameservers: DEFAULT_NAMESERVERS
                .iter()
                .map(|ns| (*ns).to_owned())
                .collect(),
        }
    }
}

impl ZoneTemplate {
    /// Request body for creating `name`.
    #[must_use]
    pub fn payload(&self, name: &str) -> serde_json::Value {
        serde_json::json!({
            "name": normalize_zone_name(name),
            "kind": self.kind,
            "nameservers": self.nameservers,
            "soa_edit_api": SOA_EDIT_MODE,
            "soa_edit": SOA_EDIT_MODE,
        })
    }
}
