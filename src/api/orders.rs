//! Order endpoints

use super::Client;
use crate::error::Result;
use crate::http::Request;
use crate::model::{Order, OrderType, StatusFilter};
use crate::pagination::{PageMode, Pager};
use uuid::Uuid;

impl Client {
    /// Place a market order.
    ///
    /// The order type is forced to market and a v4 `client_oid` is generated
    /// when none is set. The returned order keeps every submitted field the
    /// server did not echo back.
    pub async fn place_market_order(&self, order: Order) -> Result<Order> {
        self.place_order(order, OrderType::Market).await
    }

    /// Place a limit order. See [`Client::place_market_order`].
    pub async fn place_limit_order(&self, order: Order) -> Result<Order> {
        self.place_order(order, OrderType::Limit).await
    }

    async fn place_order(&self, mut order: Order, order_type: OrderType) -> Result<Order> {
        order.prepare(order_type);
        self.create("/orders", &order).await
    }

    /// Cancel one order. Yields the ids of cancelled orders.
    pub fn cancel_order(&self, order_id: Uuid) -> Pager<Uuid> {
        self.pager(
            Request::delete("/orders").query("order_id", order_id.to_string()),
            PageMode::SinglePage,
        )
    }

    /// Cancel every open order
    pub fn cancel_all_orders(&self) -> Pager<Uuid> {
        self.cancel_all_orders_for_product("")
    }

    /// Cancel every open order of one product; an empty product means all
    pub fn cancel_all_orders_for_product(&self, product_id: &str) -> Pager<Uuid> {
        self.pager(
            Request::delete("/orders").query_non_empty("product_id", product_id),
            PageMode::SinglePage,
        )
    }

    /// Fetch one order
    pub async fn get_order(&self, order_id: Uuid) -> Result<Order> {
        self.send_json(Request::get(format!("/orders/{order_id}")))
            .await
    }

    /// List orders with any of `statuses`; an empty slice lists all
    pub fn get_orders(&self, statuses: &[StatusFilter]) -> Pager<Order> {
        self.get_orders_for_product("", statuses)
    }

    /// List orders of one product with any of `statuses`
    pub fn get_orders_for_product(&self, product_id: &str, statuses: &[StatusFilter]) -> Pager<Order> {
        let mut request = Request::get("/orders");
        if statuses.is_empty() {
            request = request.query("status", StatusFilter::All.as_str());
        }
        for status in statuses {
            request = request.query("status", status.as_str());
        }
        request = request.query_non_empty("product_id", product_id);

        self.pager(request, PageMode::CursorHeader)
    }
}
