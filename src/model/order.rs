//! Orders and their enumerations

use crate::decode::option_string_f64;
use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Limit,
    Market,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopType {
    Loss,
    Entry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeInForce {
    #[serde(rename = "GTT")]
    GoodTillTime,
    #[serde(rename = "GTC")]
    GoodTillCancelled,
    #[serde(rename = "IOC")]
    ImmediateOrCancel,
    #[serde(rename = "FOK")]
    FillOrKill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelfTradePrevention {
    #[serde(rename = "dc")]
    DecreaseAndCancel,
    #[serde(rename = "co")]
    CancelOldest,
    #[serde(rename = "cn")]
    CancelNewest,
}

/// Lifetime of a good-till-time order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CancelAfter {
    Min,
    Hour,
    Day,
}

/// Status reported for an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Open,
    Pending,
    Active,
    Done,
    Rejected,
    #[serde(other)]
    Unknown,
}

/// Status filter for listing orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    Open,
    Pending,
    Active,
    Done,
    All,
}

impl StatusFilter {
    /// Wire value used in the `status` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::Open => "open",
            StatusFilter::Pending => "pending",
            StatusFilter::Active => "active",
            StatusFilter::Done => "done",
            StatusFilter::All => "all",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "open" => Ok(StatusFilter::Open),
            "pending" => Ok(StatusFilter::Pending),
            "active" => Ok(StatusFilter::Active),
            "done" => Ok(StatusFilter::Done),
            "all" => Ok(StatusFilter::All),
            other => Err(Error::invalid_value(
                "status",
                format!("unknown order status '{other}'"),
            )),
        }
    }
}

/// An order, as submitted and as reported back.
///
/// Every field is optional so an unset field stays distinguishable from a
/// zero or `false` value. The first group is what a caller fills in to place
/// an order; the second group is only ever set by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_oid: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stp: Option<SelfTradePrevention>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<StopType>,
    #[serde(default, with = "option_string_f64", skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_after: Option<CancelAfter>,
    #[serde(default, with = "option_string_f64", skip_serializing_if = "Option::is_none")]
    pub funds: Option<f64>,
    #[serde(default, with = "option_string_f64", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, with = "option_string_f64", skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_only: Option<bool>,

    // Set by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "option_string_f64", skip_serializing_if = "Option::is_none")]
    pub fill_fees: Option<f64>,
    #[serde(default, with = "option_string_f64", skip_serializing_if = "Option::is_none")]
    pub filled_size: Option<f64>,
    #[serde(default, with = "option_string_f64", skip_serializing_if = "Option::is_none")]
    pub executed_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settled: Option<bool>,
}

impl Order {
    /// Start an order for a side and product
    pub fn new(side: Side, product_id: impl Into<String>) -> Self {
        Self {
            side: Some(side),
            product_id: Some(product_id.into()),
            ..Default::default()
        }
    }

    /// Market buy or sell of `size` units
    pub fn market(side: Side, product_id: impl Into<String>, size: f64) -> Self {
        Self::new(side, product_id).size(size)
    }

    /// Limit order for `size` units at `price`
    pub fn limit(side: Side, product_id: impl Into<String>, price: f64, size: f64) -> Self {
        Self::new(side, product_id).price(price).size(size)
    }

    #[must_use]
    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Spend this much quote currency instead of specifying a size
    #[must_use]
    pub fn funds(mut self, funds: f64) -> Self {
        self.funds = Some(funds);
        self
    }

    #[must_use]
    pub fn client_oid(mut self, client_oid: Uuid) -> Self {
        self.client_oid = Some(client_oid);
        self
    }

    #[must_use]
    pub fn time_in_force(mut self, time_in_force: TimeInForce) -> Self {
        self.time_in_force = Some(time_in_force);
        self
    }

    #[must_use]
    pub fn cancel_after(mut self, cancel_after: CancelAfter) -> Self {
        self.cancel_after = Some(cancel_after);
        self
    }

    #[must_use]
    pub fn post_only(mut self, post_only: bool) -> Self {
        self.post_only = Some(post_only);
        self
    }

    #[must_use]
    pub fn stp(mut self, stp: SelfTradePrevention) -> Self {
        self.stp = Some(stp);
        self
    }

    /// Turn this into a stop order triggered at `stop_price`
    #[must_use]
    pub fn stop(mut self, stop: StopType, stop_price: f64) -> Self {
        self.stop = Some(stop);
        self.stop_price = Some(stop_price);
        self
    }

    /// Force the order type and make sure a client id is set
    pub(crate) fn prepare(&mut self, order_type: OrderType) {
        self.order_type = Some(order_type);
        if self.client_oid.is_none() {
            self.client_oid = Some(Uuid::new_v4());
        }
    }
}

crate::impl_reconcile!(Order {
    side,
    product_id,
    order_type,
    client_oid,
    stp,
    stop,
    stop_price,
    time_in_force,
    cancel_after,
    funds,
    price,
    size,
    post_only,
    id,
    created_at,
    fill_fees,
    filled_size,
    executed_value,
    status,
    settled,
});
