//! Stored address operations.

use inkpost_id::AddressId;
use inkpost_protocol::request::AddressRequest;
use inkpost_protocol::response::{AddressResponse, DeleteResponse, ResponseList};

use crate::{routes, Client, Error, ListOptions};

impl Client {
    pub async fn create_address(
        &self,
        request: &AddressRequest,
    ) -> Result<AddressResponse, Error> {
        self.post_params(routes::ADDRESSES, request).await
    }

    pub async fn get_address(&self, id: &AddressId) -> Result<AddressResponse, Error> {
        self.get_json(&format!("{}/{}", routes::ADDRESSES, id.value()), &[])
            .await
    }

    pub async fn list_addresses(
        &self,
        options: ListOptions,
    ) -> Result<ResponseList<AddressResponse>, Error> {
        self.get_json(routes::ADDRESSES, &options.to_query()).await
    }

    pub async fn delete_address(
        &self,
        id: &AddressId,
    ) -> Result<DeleteResponse<AddressId>, Error> {
        self.delete_json(&format!("{}/{}", routes::ADDRESSES, id.value()))
            .await
    }
}
