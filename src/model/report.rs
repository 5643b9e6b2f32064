//! Report requests and status

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Fills,
    Account,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Pdf,
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
    Creating,
    Ready,
}

/// Date range echoed back on a report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

/// A report, as requested and as reported back
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub report_type: Option<ReportType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    /// Required for fills reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// Required for account reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ReportFormat>,
    /// Address the finished report is mailed to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    // Set by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ReportStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<ReportParams>,
}

impl Report {
    /// Fills report for one product over a date range
    pub fn fills(product_id: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            report_type: Some(ReportType::Fills),
            product_id: Some(product_id.into()),
            start_date: Some(start),
            end_date: Some(end),
            ..Default::default()
        }
    }

    /// Account report for one account over a date range
    pub fn account(account_id: Uuid, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            report_type: Some(ReportType::Account),
            account_id: Some(account_id),
            start_date: Some(start),
            end_date: Some(end),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn format(mut self, format: ReportFormat) -> Self {
        self.format = Some(format);
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Whether the report file can be downloaded
    pub fn is_ready(&self) -> bool {
        self.status == Some(ReportStatus::Ready)
    }
}

crate::impl_reconcile!(Report {
    report_type,
    start_date,
    end_date,
    product_id,
    account_id,
    format,
    email,
    id,
    status,
    created_at,
    completed_at,
    expires_at,
    file_url,
    params,
});
