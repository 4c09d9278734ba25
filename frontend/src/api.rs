use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use journal_shared::{
    models::{ArticlePayload, CategoryPayload, Credentials, UploadResponse},
    paginator::PagedSource,
    ApiError, Article, AuthResponse, Category, ListQuery, Page, Profile, Session,
};
use serde::de::DeserializeOwned;

use crate::config::api_url;

fn no_cache(builder: RequestBuilder) -> RequestBuilder {
    builder
        .header("Cache-Control", "no-cache, no-store, max-age=0")
        .header("Pragma", "no-cache")
}

async fn send(request: Request) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("{:?}", e)))
}

/// Turn a non-2xx response into [`ApiError::Http`], keeping the server's
/// `message` when it sent one.
async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_response(status, &body))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    ensure_ok(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(format!("{:?}", e)))
}

fn encode_json<T: serde::Serialize>(
    builder: RequestBuilder,
    body: &T,
) -> Result<Request, ApiError> {
    builder
        .json(body)
        .map_err(|e| ApiError::Parse(format!("{:?}", e)))
}

fn empty(builder: RequestBuilder) -> Result<Request, ApiError> {
    builder
        .build()
        .map_err(|e| ApiError::Network(format!("{:?}", e)))
}

/// One page of articles, filtered by title search and category.
pub async fn fetch_articles(query: &ListQuery) -> Result<Page<Article>, ApiError> {
    let url = api_url(&format!("articles?{}", query.to_query_string()));
    let request = empty(no_cache(Request::get(&url)))?;
    read_json(send(request).await?).await
}

/// Single article; `Ok(None)` on 404.
pub async fn fetch_article(id: &str) -> Result<Option<Article>, ApiError> {
    let url = api_url(&format!("articles/{}", urlencoding::encode(id)));
    let request = empty(no_cache(Request::get(&url)))?;
    let response = send(request).await?;
    if response.status() == 404 {
        return Ok(None);
    }
    read_json(response).await.map(Some)
}

/// Newest articles, for the "other articles" strip.
pub async fn fetch_recent_articles(limit: usize) -> Result<Vec<Article>, ApiError> {
    let page = fetch_articles(&ListQuery::page(1, limit)).await?;
    Ok(page.items)
}

/// One page of categories (`search` is optional).
pub async fn fetch_categories(query: &ListQuery) -> Result<Page<Category>, ApiError> {
    let url = api_url(&format!("categories?{}", query.to_query_string()));
    let request = empty(no_cache(Request::get(&url)))?;
    read_json(send(request).await?).await
}

pub async fn create_category(session: &Session, body: &CategoryPayload) -> Result<(), ApiError> {
    let bearer = session.bearer()?;
    let request = encode_json(
        Request::post(&api_url("categories")).header("Authorization", &bearer),
        body,
    )?;
    ensure_ok(send(request).await?).await.map(|_| ())
}

pub async fn update_category(
    session: &Session,
    id: &str,
    body: &CategoryPayload,
) -> Result<(), ApiError> {
    let bearer = session.bearer()?;
    let url = api_url(&format!("categories/{}", urlencoding::encode(id)));
    let request = encode_json(Request::put(&url).header("Authorization", &bearer), body)?;
    ensure_ok(send(request).await?).await.map(|_| ())
}

pub async fn delete_category(session: &Session, id: &str) -> Result<(), ApiError> {
    let bearer = session.bearer()?;
    let url = api_url(&format!("categories/{}", urlencoding::encode(id)));
    let request = empty(Request::delete(&url).header("Authorization", &bearer))?;
    ensure_ok(send(request).await?).await.map(|_| ())
}

pub async fn create_article(session: &Session, body: &ArticlePayload) -> Result<(), ApiError> {
    let bearer = session.bearer()?;
    let request = encode_json(
        Request::post(&api_url("articles")).header("Authorization", &bearer),
        body,
    )?;
    ensure_ok(send(request).await?).await.map(|_| ())
}

pub async fn update_article(
    session: &Session,
    id: &str,
    body: &ArticlePayload,
) -> Result<(), ApiError> {
    let bearer = session.bearer()?;
    let url = api_url(&format!("articles/{}", urlencoding::encode(id)));
    let request = encode_json(Request::put(&url).header("Authorization", &bearer), body)?;
    ensure_ok(send(request).await?).await.map(|_| ())
}

pub async fn delete_article(session: &Session, id: &str) -> Result<(), ApiError> {
    let bearer = session.bearer()?;
    let url = api_url(&format!("articles/{}", urlencoding::encode(id)));
    let request = empty(Request::delete(&url).header("Authorization", &bearer))?;
    ensure_ok(send(request).await?).await.map(|_| ())
}

/// Multipart upload of one image under the `image` field. Returns its URL.
pub async fn upload_image(session: &Session, file: &web_sys::File) -> Result<String, ApiError> {
    let bearer = session.bearer()?;
    let form = web_sys::FormData::new().map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    form.append_with_blob_and_filename("image", file, &file.name())
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    // The browser sets the multipart boundary itself; no Content-Type here.
    let request = Request::post(&api_url("upload"))
        .header("Authorization", &bearer)
        .body(form)
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    let uploaded: UploadResponse = read_json(send(request).await?).await?;
    uploaded
        .image_url
        .filter(|url| !url.is_empty())
        .ok_or_else(|| ApiError::Parse("Failed to get image URL.".to_string()))
}

pub async fn login(body: &Credentials) -> Result<AuthResponse, ApiError> {
    let request = encode_json(Request::post(&api_url("auth/login")), body)?;
    read_json(send(request).await?).await
}

/// Register an account. The response body is not used.
pub async fn register(body: &Credentials) -> Result<(), ApiError> {
    let request = encode_json(Request::post(&api_url("auth/register")), body)?;
    ensure_ok(send(request).await?).await.map(|_| ())
}

pub async fn fetch_profile(session: &Session) -> Result<Profile, ApiError> {
    let bearer = session.bearer()?;
    let request = empty(no_cache(
        Request::get(&api_url("auth/profile")).header("Authorization", &bearer),
    ))?;
    read_json(send(request).await?).await
}

/// Category listing as a [`PagedSource`], for the dropdown paginator.
pub struct CategoryPages;

#[async_trait(?Send)]
impl PagedSource<Category> for CategoryPages {
    async fn fetch_page(&self, page: usize, limit: usize) -> Result<Page<Category>, ApiError> {
        fetch_categories(&ListQuery::page(page, limit)).await
    }
}
