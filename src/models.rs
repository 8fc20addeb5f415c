//! Frontend Models
//!
//! Data structures matching the remote user feed.

use serde::{Deserialize, Serialize};

/// Geographic coordinates, kept as the strings the feed sends
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    #[serde(default)]
    pub lat: String,
    #[serde(default)]
    pub lng: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    #[serde(default)]
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    #[serde(default)]
    pub geo: Geo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    #[serde(default)]
    pub catch_phrase: String,
    #[serde(default)]
    pub bs: String,
}

/// User record (matches remote feed)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u32,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    #[serde(default)]
    pub website: String,
    pub company: Company,
}

impl UserRecord {
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Feed websites are bare hosts ("hildegard.org")
    pub fn website_href(&self) -> String {
        if self.website.starts_with("http://") || self.website.starts_with("https://") {
            self.website.clone()
        } else {
            format!("https://{}", self.website)
        }
    }

    pub fn street_line(&self) -> String {
        format!("{}, {}", self.address.suite, self.address.street)
    }

    pub fn city_line(&self) -> String {
        format!("{}, {}", self.address.city, self.address.zipcode)
    }

    pub fn coordinates_line(&self) -> String {
        format!("Coordinates: {}, {}", self.address.geo.lat, self.address.geo.lng)
    }
}

/// A user record under edit in the add-user form.
///
/// Every leaf starts as an empty string so optional fields left blank are
/// submitted as `""`, never missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDraft {
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

impl UserDraft {
    pub fn into_record(self, id: u32) -> UserRecord {
        UserRecord {
            id,
            name: self.name,
            username: self.username,
            email: self.email,
            address: self.address,
            phone: self.phone,
            website: self.website,
            company: self.company,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UserRecord {
        UserDraft {
            name: "Leanne Graham".to_string(),
            username: "Bret".to_string(),
            email: "Sincere@april.biz".to_string(),
            address: Address {
                street: "Kulas Light".to_string(),
                suite: "Apt. 556".to_string(),
                city: "Gwenborough".to_string(),
                zipcode: "92998-3874".to_string(),
                geo: Geo { lat: "-37.3159".to_string(), lng: "81.1496".to_string() },
            },
            phone: "1-770-736-8031 x56442".to_string(),
            website: "hildegard.org".to_string(),
            company: Company {
                name: "Romaguera-Crona".to_string(),
                catch_phrase: "Multi-layered client-server neural-net".to_string(),
                bs: "harness real-time e-markets".to_string(),
            },
        }
        .into_record(1)
    }

    #[test]
    fn test_default_draft_has_empty_strings() {
        let record = UserDraft::default().into_record(9);
        assert_eq!(record.id, 9);
        assert_eq!(record.address.suite, "");
        assert_eq!(record.website, "");
        assert_eq!(record.company.catch_phrase, "");
        assert_eq!(record.company.bs, "");
    }

    #[test]
    fn test_display_lines() {
        let user = sample();
        assert_eq!(user.mailto_href(), "mailto:Sincere@april.biz");
        assert_eq!(user.website_href(), "https://hildegard.org");
        assert_eq!(user.street_line(), "Apt. 556, Kulas Light");
        assert_eq!(user.city_line(), "Gwenborough, 92998-3874");
        assert_eq!(user.coordinates_line(), "Coordinates: -37.3159, 81.1496");
    }

    #[test]
    fn test_website_href_keeps_scheme() {
        let mut user = sample();
        user.website = "https://example.com".to_string();
        assert_eq!(user.website_href(), "https://example.com");
    }

    #[test]
    fn test_partial_geo_decodes() {
        let address: Address = serde_json::from_str(
            r#"{"street": "Kulas Light", "city": "Gwenborough", "zipcode": "92998", "geo": {"lat": "-37.3"}}"#,
        )
        .unwrap();
        assert_eq!(address.geo.lat, "-37.3");
        assert_eq!(address.geo.lng, "");
    }

    #[test]
    fn test_company_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["company"]["catchPhrase"], "Multi-layered client-server neural-net");
        assert!(json["company"].get("catch_phrase").is_none());
    }
}
