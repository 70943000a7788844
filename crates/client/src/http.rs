use async_trait::async_trait;
use interviewdesk_core::{
    errors::{DeskError, DeskResult},
    models::{
        BookSlotRequest, InterviewSlot, Interviewer, InterviewerId, InterviewerRequest,
        Notification, PaginatedResponse, SlotId,
    },
};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
    api::{MAX_PAGE_LIMIT, SchedulerApi},
    config::ClientConfig,
    paths,
};

/// [`SchedulerApi`] over HTTP with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpSchedulerApi {
    client: Client,
    base_url: String,
}

impl HttpSchedulerApi {
    pub fn new(config: &ClientConfig) -> DeskResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| DeskError::Internal(eyre::eyre!("Failed to build http client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    async fn send(&self, request: RequestBuilder) -> DeskResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| DeskError::Network(e.to_string()))?;

        let status = response.status();
        debug!(url = %response.url(), status = status.as_u16(), "backend responded");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = DeskError::from_response(status.as_u16(), status.canonical_reason(), &body);
        warn!(status = status.as_u16(), "backend rejected request: {}", err);
        Err(err)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> DeskResult<T> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| DeskError::Network(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| DeskError::Decode(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> DeskResult<T> {
        let response = self.send(self.client.get(self.url_for(path))).await?;
        Self::read_json(response).await
    }

    /// Appends raw path segments, percent-encoding each one.
    fn url_with_segments(&self, path: &str, segments: &[&str]) -> DeskResult<Url> {
        let mut url = Url::parse(&self.url_for(path))
            .map_err(|e| DeskError::Validation(format!("Invalid backend URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| DeskError::Validation("Backend URL cannot take a path".to_string()))?
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl SchedulerApi for HttpSchedulerApi {
    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn list_interviewers(&self) -> DeskResult<Vec<Interviewer>> {
        self.get_json(&paths::interviewers()).await
    }

    async fn get_interviewer(&self, id: InterviewerId) -> DeskResult<Interviewer> {
        self.get_json(&paths::interviewer(id)).await
    }

    async fn create_interviewer(&self, request: &InterviewerRequest) -> DeskResult<Interviewer> {
        let url = self.url_for(&paths::interviewers());
        let response = self.send(self.client.post(url).json(request)).await?;
        Self::read_json(response).await
    }

    async fn update_interviewer(
        &self,
        id: InterviewerId,
        request: &InterviewerRequest,
    ) -> DeskResult<Interviewer> {
        let url = self.url_for(&paths::interviewer(id));
        let response = self.send(self.client.put(url).json(request)).await?;
        Self::read_json(response).await
    }

    async fn delete_interviewer(&self, id: InterviewerId) -> DeskResult<()> {
        let url = self.url_for(&paths::interviewer(id));
        self.send(self.client.delete(url)).await?;
        Ok(())
    }

    async fn generate_slots(&self, id: InterviewerId) -> DeskResult<()> {
        let url = self.url_for(&paths::generate_slots(id));
        self.send(self.client.post(url)).await?;
        Ok(())
    }

    async fn list_interviewer_slots(&self, id: InterviewerId) -> DeskResult<Vec<InterviewSlot>> {
        self.get_json(&paths::interviewer_slots(id)).await
    }

    async fn get_slot(&self, id: SlotId) -> DeskResult<InterviewSlot> {
        self.get_json(&paths::slot(id)).await
    }

    async fn cancel_slot(&self, id: SlotId) -> DeskResult<()> {
        let url = self.url_for(&paths::cancel_slot(id));
        self.send(self.client.delete(url)).await?;
        Ok(())
    }

    async fn list_available_slots(
        &self,
        cursor: Option<String>,
        limit: u32,
    ) -> DeskResult<PaginatedResponse<InterviewSlot>> {
        let limit = limit.clamp(1, MAX_PAGE_LIMIT).to_string();
        let mut query = vec![("limit", limit)];
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor));
        }

        let url = self.url_for(&paths::available_slots());
        let response = self.send(self.client.get(url).query(&query)).await?;
        Self::read_json(response).await
    }

    async fn book_slot(&self, request: &BookSlotRequest) -> DeskResult<InterviewSlot> {
        let url = self.url_for(&paths::book_slot());
        let response = self.send(self.client.post(url).json(request)).await?;
        Self::read_json(response).await
    }

    async fn update_slot(&self, id: SlotId, request: &BookSlotRequest) -> DeskResult<InterviewSlot> {
        let url = self.url_for(&paths::update_slot(id));
        let response = self.send(self.client.put(url).json(request)).await?;
        Self::read_json(response).await
    }

    async fn list_notifications_for_email(&self, email: &str) -> DeskResult<Vec<Notification>> {
        let url = self.url_with_segments(&paths::notifications(), &["email", email])?;
        let response = self.send(self.client.get(url)).await?;
        Self::read_json(response).await
    }

    async fn list_notifications_for_slot(&self, id: SlotId) -> DeskResult<Vec<Notification>> {
        self.get_json(&paths::slot_notifications(id)).await
    }
}
