//! Print object operations.

use inkpost_id::ObjectId;
use inkpost_protocol::request::ObjectRequest;
use inkpost_protocol::response::{DeleteResponse, ObjectResponse, ResponseList};

use crate::{routes, Client, Error, ListOptions};

impl Client {
    pub async fn create_object(&self, request: &ObjectRequest) -> Result<ObjectResponse, Error> {
        self.post_params(routes::OBJECTS, request).await
    }

    pub async fn get_object(&self, id: &ObjectId) -> Result<ObjectResponse, Error> {
        self.get_json(&format!("{}/{}", routes::OBJECTS, id.value()), &[])
            .await
    }

    pub async fn list_objects(
        &self,
        options: ListOptions,
    ) -> Result<ResponseList<ObjectResponse>, Error> {
        self.get_json(routes::OBJECTS, &options.to_query()).await
    }

    pub async fn delete_object(
        &self,
        id: &ObjectId,
    ) -> Result<DeleteResponse<ObjectId>, Error> {
        self.delete_json(&format!("{}/{}", routes::OBJECTS, id.value()))
            .await
    }
}
