use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type CompanyId = String;
pub type CustomerId = String;
pub type UserId = String;

/// Legal entity that owns customers, suppliers and invoices.
///
/// `row_version` is an opaque concurrency token issued by the backend on
/// read and echoed back verbatim on update. The client never inspects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(default)]
    pub id: CompanyId,
    pub name: String,
    #[serde(default)]
    pub trade_name: String,
    #[serde(default)]
    pub tax_id: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_version: Option<String>,
}

impl Default for Company {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            trade_name: String::new(),
            tax_id: String::new(),
            active: true,
            row_version: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default)]
    pub id: CustomerId,
    pub company_id: CompanyId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_version: Option<String>,
}

impl Customer {
    pub fn draft_for(company_id: CompanyId) -> Self {
        Self {
            id: String::new(),
            company_id,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            row_version: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    #[serde(default)]
    pub id: String,
    pub company_id: CompanyId,
    pub name: String,
    #[serde(default)]
    pub tax_id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_version: Option<String>,
}

/// The signed-in operator, as returned by the auth module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub company_id: CompanyId,
    pub number: String,
    pub amount_cents: i64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub issued_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_version: Option<String>,
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_round_trips_camel_case_wire_names() {
        let json = r#"{
            "id": "c-1",
            "name": "Acme Ltd",
            "tradeName": "Acme",
            "taxId": "12.345.678/0001-00",
            "active": true,
            "rowVersion": "AAAAAAAAB9E="
        }"#;

        let company: Company = serde_json::from_str(json).expect("company should parse");
        assert_eq!(company.trade_name, "Acme");
        assert_eq!(company.row_version.as_deref(), Some("AAAAAAAAB9E="));

        let out = serde_json::to_value(&company).unwrap();
        assert_eq!(out["rowVersion"], "AAAAAAAAB9E=");
        assert_eq!(out["taxId"], "12.345.678/0001-00");
    }

    #[test]
    fn missing_row_version_is_omitted_on_serialize() {
        let company = Company {
            id: "c-2".into(),
            name: "NoVersion".into(),
            ..Company::default()
        };
        let out = serde_json::to_value(&company).unwrap();
        assert!(out.get("rowVersion").is_none());
    }
}
