//! Area-mail campaign operations.

use inkpost_id::AreaMailId;
use inkpost_protocol::request::AreaMailRequest;
use inkpost_protocol::response::{AreaMailResponse, ResponseList};

use crate::{routes, Client, Error, ListOptions};

impl Client {
    pub async fn create_area_mail(
        &self,
        request: &AreaMailRequest,
    ) -> Result<AreaMailResponse, Error> {
        self.post_params(routes::AREA_MAIL, request).await
    }

    pub async fn get_area_mail(&self, id: &AreaMailId) -> Result<AreaMailResponse, Error> {
        self.get_json(&format!("{}/{}", routes::AREA_MAIL, id.value()), &[])
            .await
    }

    pub async fn list_area_mail(
        &self,
        options: ListOptions,
    ) -> Result<ResponseList<AreaMailResponse>, Error> {
        self.get_json(routes::AREA_MAIL, &options.to_query()).await
    }
}
