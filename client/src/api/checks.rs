//! Check operations.

use inkpost_id::CheckId;
use inkpost_protocol::request::CheckRequest;
use inkpost_protocol::response::{CheckResponse, ResponseList};

use crate::{routes, Client, Error, ListOptions};

impl Client {
    pub async fn create_check(&self, request: &CheckRequest) -> Result<CheckResponse, Error> {
        self.post_params(routes::CHECKS, request).await
    }

    pub async fn get_check(&self, id: &CheckId) -> Result<CheckResponse, Error> {
        self.get_json(&format!("{}/{}", routes::CHECKS, id.value()), &[])
            .await
    }

    pub async fn list_checks(
        &self,
        options: ListOptions,
    ) -> Result<ResponseList<CheckResponse>, Error> {
        self.get_json(routes::CHECKS, &options.to_query()).await
    }
}
