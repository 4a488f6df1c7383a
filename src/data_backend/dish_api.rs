use std::time::Instant;

use reqwest::header::CONTENT_TYPE;

use crate::data_backend::{parse_field_errors, DishApi};
use crate::data_types::{DishCreated, DishInput};
use crate::errors::SubmitError;

/// `DishApi` backed by a single JSON POST.
#[derive(Debug, Clone)]
pub struct HttpDishApi {
    client: reqwest::Client,
    url: String,
}

impl HttpDishApi {
    pub fn new(url: impl Into<String>) -> Result<Self, SubmitError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        HttpDishApi {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl DishApi for HttpDishApi {
    async fn create_dish(&self, dish: &DishInput) -> Result<DishCreated, SubmitError> {
        let now = Instant::now();
        let resp = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .json(dish)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        log::debug!("Dish API response {}: {:.2?}", status, now.elapsed());

        if status.is_success() {
            return Ok(serde_json::from_str::<DishCreated>(&body)?);
        }

        match parse_field_errors(&body) {
            Some(field_errors) => Err(SubmitError::Rejected {
                status,
                field_errors,
            }),
            None => Err(SubmitError::Status(status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::{DishVariant, FieldName};
    use mockito::Matcher;
    use serde_json::json;

    fn soup() -> DishInput {
        DishInput {
            name: "Goulash".to_string(),
            preparation_time: "01:30:00".to_string(),
            variant: DishVariant::Soup { spiciness_scale: 7 },
        }
    }

    #[tokio::test]
    async fn posts_json_and_reads_id() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/dishes")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "name": "Goulash",
                "preparation_time": "01:30:00",
                "type": "soup",
                "spiciness_scale": 7
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": 42}"#)
            .expect(1)
            .create_async()
            .await;

        let api = HttpDishApi::new(format!("{}/dishes", server.url())).unwrap();
        let created = api.create_dish(&soup()).await.unwrap();

        assert_eq!(created, DishCreated { id: 42 });
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn structured_failure_becomes_field_errors() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/dishes")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"name": "already exists"}"#)
            .create_async()
            .await;

        let api = HttpDishApi::new(format!("{}/dishes", server.url())).unwrap();
        let err = api.create_dish(&soup()).await.unwrap_err();

        let field_errors = err.field_errors().unwrap();
        assert_eq!(field_errors[&FieldName::Name], "already exists");
        assert!(matches!(err, SubmitError::Rejected { status, .. } if status == 400));
    }

    #[tokio::test]
    async fn plain_text_failure_has_no_field_errors() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/dishes")
            .with_status(502)
            .with_body("Bad Gateway")
            .create_async()
            .await;

        let api = HttpDishApi::new(format!("{}/dishes", server.url())).unwrap();
        let err = api.create_dish(&soup()).await.unwrap_err();

        assert!(err.field_errors().is_none());
        assert!(matches!(err, SubmitError::Status(status) if status == 502));
    }

    #[tokio::test]
    async fn success_without_id_is_malformed() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/dishes")
            .with_status(201)
            .with_body(r#"{"ok": true}"#)
            .create_async()
            .await;

        let api = HttpDishApi::new(format!("{}/dishes", server.url())).unwrap();
        let err = api.create_dish(&soup()).await.unwrap_err();

        assert!(matches!(err, SubmitError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        // port 9 (discard) is closed on test machines
        let api = HttpDishApi::new("http://127.0.0.1:9/dishes").unwrap();
        let err = api.create_dish(&soup()).await.unwrap_err();

        assert!(matches!(err, SubmitError::Transport(_)));
        assert!(err.field_errors().is_none());
    }
}
