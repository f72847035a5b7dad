//! Bank account operations, including micro-deposit verification.

use inkpost_id::BankAccountId;
use inkpost_protocol::request::{BankAccountRequest, BankAccountVerifyRequest};
use inkpost_protocol::response::{BankAccountResponse, DeleteResponse, ResponseList};

use crate::{routes, Client, Error, ListOptions};

impl Client {
    pub async fn create_bank_account(
        &self,
        request: &BankAccountRequest,
    ) -> Result<BankAccountResponse, Error> {
        self.post_params(routes::BANK_ACCOUNTS, request).await
    }

    pub async fn get_bank_account(
        &self,
        id: &BankAccountId,
    ) -> Result<BankAccountResponse, Error> {
        self.get_json(&format!("{}/{}", routes::BANK_ACCOUNTS, id.value()), &[])
            .await
    }

    pub async fn list_bank_accounts(
        &self,
        options: ListOptions,
    ) -> Result<ResponseList<BankAccountResponse>, Error> {
        self.get_json(routes::BANK_ACCOUNTS, &options.to_query())
            .await
    }

    pub async fn delete_bank_account(
        &self,
        id: &BankAccountId,
    ) -> Result<DeleteResponse<BankAccountId>, Error> {
        self.delete_json(&format!("{}/{}", routes::BANK_ACCOUNTS, id.value()))
            .await
    }

    /// Confirms the two micro-deposit amounts; the returned account has
    /// `verified` set once the server accepts them.
    pub async fn verify_bank_account(
        &self,
        request: &BankAccountVerifyRequest,
    ) -> Result<BankAccountResponse, Error> {
        let path = format!(
            "{}/{}/verify",
            routes::BANK_ACCOUNTS,
            request.id.value()
        );
        self.post_params(&path, request).await
    }
}
