//! Report endpoints

use super::Client;
use crate::error::Result;
use crate::http::Request;
use crate::model::Report;
use uuid::Uuid;

impl Client {
    /// Request a report; the answer keeps the submitted parameters
    pub async fn create_report(&self, report: &Report) -> Result<Report> {
        self.create("/reports", report).await
    }

    /// Poll the status of a requested report
    pub async fn get_report_status(&self, report_id: Uuid) -> Result<Report> {
        self.send_json(Request::get(format!("/reports/{report_id}")))
            .await
    }
}
