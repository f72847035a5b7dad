//! Job operations.

use inkpost_id::JobId;
use inkpost_protocol::request::JobRequest;
use inkpost_protocol::response::{JobResponse, ResponseList};

use crate::{routes, Client, Error, ListOptions};

impl Client {
    pub async fn create_job(&self, request: &JobRequest) -> Result<JobResponse, Error> {
        self.post_params(routes::JOBS, request).await
    }

    pub async fn get_job(&self, id: &JobId) -> Result<JobResponse, Error> {
        self.get_json(&format!("{}/{}", routes::JOBS, id.value()), &[])
            .await
    }

    pub async fn list_jobs(
        &self,
        options: ListOptions,
    ) -> Result<ResponseList<JobResponse>, Error> {
        self.get_json(routes::JOBS, &options.to_query()).await
    }
}
