//! Page accounts administered by the authenticated user.

use crate::decode::{FieldView, GraphObject};
use crate::error::Error;
use crate::fields::{FieldKind, FieldMapping, FieldSpec};

/// A page the authenticated user administers, as returned by the
/// `me/accounts` connection. Carries the page-scoped access token and
/// the permissions granted on it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub category: String,
    pub access_token: String,
    pub perms: Vec<String>,
}

pub static ACCOUNT_MAPPING: FieldMapping = FieldMapping {
    object_type: "account",
    fields: &[
        FieldSpec { wire: "id", attr: "id", kind: FieldKind::Text },
        FieldSpec { wire: "name", attr: "name", kind: FieldKind::Text },
        FieldSpec { wire: "category", attr: "category", kind: FieldKind::Text },
        FieldSpec { wire: "access_token", attr: "access_token", kind: FieldKind::Text },
        FieldSpec { wire: "perms", attr: "perms", kind: FieldKind::TextList },
    ],
};

impl GraphObject for Account {
    fn mapping() -> &'static FieldMapping {
        &ACCOUNT_MAPPING
    }

    fn from_fields(f: &FieldView<'_>) -> Result<Self, Error> {
        Ok(Account {
            id: f.text("id")?,
            name: f.text("name")?,
            category: f.text("category")?,
            access_token: f.text("access_token")?,
            perms: f.text_list("perms")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_object;
    use serde_json::json;

    #[test]
    fn perms_list_decodes() {
        let raw = json!({
            "id": "987654321",
            "name": "Espresso Hut",
            "category": "Coffee shop",
            "access_token": "page-scoped-token",
            "perms": ["ADMINISTER", "EDIT_PROFILE", "CREATE_CONTENT"]
        });
        let account: Account = decode_object(&raw).unwrap();
        assert_eq!(account.perms.len(), 3);
        assert_eq!(account.perms[0], "ADMINISTER");
    }
}
