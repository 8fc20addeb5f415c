//! User Feed Client
//!
//! Loads the user list from the remote JSON endpoint.

use crate::error::FetchError;
use crate::models::UserRecord;

/// GET the user list from `endpoint`
pub async fn fetch_users(endpoint: &str) -> Result<Vec<UserRecord>, FetchError> {
    log::info!("[API] GET {}", endpoint);
    let response = reqwest::get(endpoint).await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.text().await?;
    let users = parse_users(&body)?;
    log::debug!("[API] Decoded {} users", users.len());
    Ok(users)
}

pub fn parse_users(body: &str) -> Result<Vec<UserRecord>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"[
      {
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": {
          "street": "Kulas Light",
          "suite": "Apt. 556",
          "city": "Gwenborough",
          "zipcode": "92998-3874",
          "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": {
          "name": "Romaguera-Crona",
          "catchPhrase": "Multi-layered client-server neural-net",
          "bs": "harness real-time e-markets"
        }
      },
      {
        "id": 2,
        "name": "Ervin Howell",
        "username": "Antonette",
        "email": "Shanna@melissa.tv",
        "address": {
          "street": "Victor Plains",
          "city": "Wisokyburgh",
          "zipcode": "90566-7771"
        },
        "phone": "010-692-6593 x09125",
        "company": { "name": "Deckow-Crist" }
      }
    ]"#;

    #[test]
    fn test_parse_feed() {
        let users = parse_users(FEED).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[0].address.geo.lng, "81.1496");
        assert_eq!(users[0].company.catch_phrase, "Multi-layered client-server neural-net");
    }

    #[test]
    fn test_parse_fills_missing_optional_fields() {
        let users = parse_users(FEED).unwrap();
        let ervin = &users[1];
        assert_eq!(ervin.address.suite, "");
        assert_eq!(ervin.address.geo.lat, "");
        assert_eq!(ervin.website, "");
        assert_eq!(ervin.company.bs, "");
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_users(r#"{"id": 1}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_users("[]").unwrap().is_empty());
    }
}
