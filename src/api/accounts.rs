//! Account endpoints

use super::Client;
use crate::error::Result;
use crate::http::Request;
use crate::model::{Account, Hold, LedgerEntry};
use crate::pagination::{PageMode, Pager};
use uuid::Uuid;

impl Client {
    /// List trading accounts
    pub fn get_accounts(&self) -> Pager<Account> {
        self.pager(Request::get("/accounts"), PageMode::CursorHeader)
    }

    /// Fetch one account
    pub async fn get_account(&self, account_id: Uuid) -> Result<Account> {
        self.send_json(Request::get(format!("/accounts/{account_id}")))
            .await
    }

    /// List the ledger of an account, newest first
    pub fn get_account_history(&self, account_id: Uuid) -> Pager<LedgerEntry> {
        self.pager(
            Request::get(format!("/accounts/{account_id}/ledger")),
            PageMode::CursorHeader,
        )
    }

    /// List the holds on an account
    pub fn get_account_holds(&self, account_id: Uuid) -> Pager<Hold> {
        self.pager(
            Request::get(format!("/accounts/{account_id}/holds")),
            PageMode::CursorHeader,
        )
    }
}
