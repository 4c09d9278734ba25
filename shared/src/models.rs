//! Wire models owned by the content API.
//!
//! The API is inconsistent about identifier types (some deployments send
//! integers, others strings), so every id is normalized to a `String` on
//! the way in.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(value) => value,
        RawId::Number(value) => value.to_string(),
    })
}

fn de_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(value) => value,
        RawId::Number(value) => value.to_string(),
    }))
}

/// Category reference embedded in an article.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryRef {
    /// Category id, when the API includes it.
    #[serde(default, deserialize_with = "de_opt_id")]
    pub id: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

/// Author reference embedded in an article.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserRef {
    /// Author's login name.
    #[serde(default)]
    pub username: String,
}

/// A single article as returned by `GET /articles` and `GET /articles/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Article id.
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    /// Headline.
    #[serde(default)]
    pub title: String,
    /// Rich-text body, as HTML.
    #[serde(default)]
    pub content: String,
    /// Cover image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Creation timestamp (ISO-8601 string as sent by the API).
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
    /// Id of the owning category.
    #[serde(default, deserialize_with = "de_opt_id")]
    pub category_id: Option<String>,
    /// Embedded category, when expanded by the API.
    #[serde(default)]
    pub category: Option<CategoryRef>,
    /// Embedded author, when expanded by the API.
    #[serde(default)]
    pub user: Option<UserRef>,
    /// Free-form author label some endpoints send instead of `user`.
    #[serde(default)]
    pub author: Option<String>,
}

impl Article {
    /// Category name, or `fallback` when the article carries none.
    pub fn category_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.category
            .as_ref()
            .map(|category| category.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(fallback)
    }

    /// Best-effort author label.
    pub fn author_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.user
            .as_ref()
            .map(|user| user.username.as_str())
            .filter(|name| !name.is_empty())
            .or_else(|| self.author.as_deref().filter(|name| !name.is_empty()))
            .unwrap_or(fallback)
    }

    /// Resolved category id: the explicit `categoryId`, else the embedded one.
    pub fn resolved_category_id(&self) -> Option<&str> {
        self.category_id
            .as_deref()
            .or_else(|| self.category.as_ref().and_then(|category| category.id.as_deref()))
    }
}

/// Up to `limit` articles from `items`, skipping the one with `current_id`.
pub fn related_articles(items: &[Article], current_id: &str, limit: usize) -> Vec<Article> {
    items
        .iter()
        .filter(|article| article.id != current_id)
        .take(limit)
        .cloned()
        .collect()
}

/// A category row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Category id.
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Creation timestamp.
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
}

/// Account role reported by the auth endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    /// Content administrator.
    Admin,
    /// Regular reader.
    User,
    /// Missing or unrecognized role.
    #[default]
    #[serde(other)]
    Other,
}

impl Role {
    /// Label shown in selectors and on the profile page.
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
            Role::Other => "-",
        }
    }
}

/// Response of `POST /auth/login` and `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    /// Session token; register may omit it.
    #[serde(default)]
    pub token: Option<String>,
    /// Role of the authenticated account.
    #[serde(default)]
    pub role: Role,
}

/// Response of `GET /auth/profile`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    /// Login name.
    #[serde(default)]
    pub username: String,
    /// Password as echoed by the API; only ever displayed masked.
    #[serde(default)]
    pub password: String,
    /// Account role.
    #[serde(default)]
    pub role: Role,
}

impl Profile {
    /// Upper-cased first character of the username, for avatar bubbles.
    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Response of `POST /upload`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Public URL of the stored image.
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Body of `POST /auth/login` and `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    /// Login name.
    pub username: String,
    /// Plain-text password.
    pub password: String,
    /// Requested role, register only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Body of `POST /articles` and `PUT /articles/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePayload {
    /// Headline.
    pub title: String,
    /// HTML body.
    pub content: String,
    /// Owning category id.
    pub category_id: String,
    /// Uploaded cover image URL.
    pub image_url: String,
}

/// Body of `POST /categories` and `PUT /categories/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPayload {
    /// Display name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_accepts_numeric_ids_and_snake_case_dates() {
        let article: Article = serde_json::from_value(serde_json::json!({
            "id": 42,
            "title": "Hello",
            "content": "<p>Body</p>",
            "imageUrl": "https://cdn.example.com/a.png",
            "created_at": "2025-02-09T10:00:00Z",
            "categoryId": 7,
            "category": { "name": "Design" },
            "user": { "username": "alice" }
        }))
        .expect("article json");

        assert_eq!(article.id, "42");
        assert_eq!(article.created_at.as_deref(), Some("2025-02-09T10:00:00Z"));
        assert_eq!(article.resolved_category_id(), Some("7"));
        assert_eq!(article.category_name("Uncategorized"), "Design");
        assert_eq!(article.author_name("Admin"), "alice");
    }

    #[test]
    fn author_falls_back_to_label_then_default() {
        let article: Article = serde_json::from_value(serde_json::json!({
            "id": "a1",
            "author": "Bob"
        }))
        .expect("article json");
        assert_eq!(article.author_name("Admin"), "Bob");
        assert_eq!(article.category_name("Uncategorized"), "Uncategorized");

        let bare: Article = serde_json::from_value(serde_json::json!({ "id": "a2" }))
            .expect("article json");
        assert_eq!(bare.author_name("Admin"), "Admin");
    }

    #[test]
    fn related_articles_skip_current_and_respect_limit() {
        let items: Vec<Article> = (1..=4)
            .map(|i| {
                serde_json::from_value(serde_json::json!({ "id": i.to_string() }))
                    .expect("article json")
            })
            .collect();

        let related = related_articles(&items, "2", 3);
        let ids: Vec<&str> = related.iter().map(|article| article.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "4"]);
    }

    #[test]
    fn unknown_role_maps_to_other() {
        let auth: AuthResponse =
            serde_json::from_str(r#"{"token":"t","role":"Editor"}"#).expect("auth json");
        assert_eq!(auth.role, Role::Other);

        let admin: AuthResponse =
            serde_json::from_str(r#"{"token":"t","role":"Admin"}"#).expect("auth json");
        assert_eq!(admin.role, Role::Admin);
    }

    #[test]
    fn profile_initial_is_uppercased() {
        let profile: Profile =
            serde_json::from_str(r#"{"username":"zoe","password":"x","role":"User"}"#)
                .expect("profile json");
        assert_eq!(profile.initial(), "Z");
    }

    #[test]
    fn article_payload_uses_camel_case() {
        let payload = ArticlePayload {
            title: "T".into(),
            content: "<p>c</p>".into(),
            category_id: "3".into(),
            image_url: "u".into(),
        };
        let json = serde_json::to_value(&payload).expect("payload json");
        assert_eq!(json["categoryId"], "3");
        assert_eq!(json["imageUrl"], "u");
    }
}
