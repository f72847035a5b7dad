//! Postcard operations.

use inkpost_id::PostcardId;
use inkpost_protocol::request::PostcardRequest;
use inkpost_protocol::response::{PostcardResponse, ResponseList};

use crate::{routes, Client, Error, ListOptions};

impl Client {
    pub async fn create_postcard(
        &self,
        request: &PostcardRequest,
    ) -> Result<PostcardResponse, Error> {
        self.post_params(routes::POSTCARDS, request).await
    }

    pub async fn get_postcard(&self, id: &PostcardId) -> Result<PostcardResponse, Error> {
        self.get_json(&format!("{}/{}", routes::POSTCARDS, id.value()), &[])
            .await
    }

    pub async fn list_postcards(
        &self,
        options: ListOptions,
    ) -> Result<ResponseList<PostcardResponse>, Error> {
        self.get_json(routes::POSTCARDS, &options.to_query()).await
    }
}
