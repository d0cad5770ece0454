//! Typed boundary to the storefront's REST backend.
//!
//! The backend owns the wire format; this module mirrors it with serde DTOs
//! and converts to domain types exactly once, at the response boundary.
//! `StoreClient` holds no cart state: callers apply results to their own
//! `Cart` on `Ok`, so a failed call never mutates anything locally.

use crate::{FetchClient, FetchError};
use jaxel_commerce::cart::LineItem;
use jaxel_commerce::checkout::{CheckoutPayload, Order, OrderLineItem, OrderStatus};
use jaxel_commerce::{Currency, Money, OrderId, ProductId};
use serde::{Deserialize, Serialize};

/// A product as the backend sends it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: ProductId,
    pub title: String,
    /// Whole rupiah.
    pub price: i64,
    /// Raw image field; may be a bare filename, an absolute URL, or a JSON
    /// string array. Normalized by [`crate::product_images`].
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub seller_name: Option<String>,
}

impl ProductDto {
    pub fn unit_price(&self) -> Money {
        Money::new(self.price, Currency::IDR)
    }
}

/// Element of the `GET /api/cart` response array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartEntryDto {
    pub product: ProductDto,
    pub quantity: i64,
}

impl CartEntryDto {
    /// Convert into a domain line item (title and price snapshot).
    pub fn into_line_item(self) -> LineItem {
        let unit_price = self.product.unit_price();
        LineItem::new(self.product.id, self.product.title, unit_price, self.quantity)
    }
}

/// Body of `POST /api/cart`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// The server-side cart entry echoed back by `POST /api/cart`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItemDto {
    pub product_id: ProductId,
    pub quantity: i64,
    pub product: ProductDto,
}

impl CartItemDto {
    /// Convert into a domain line item. The quantity comes from the echo,
    /// not the request, so the local cart merges what the server recorded.
    pub fn into_line_item(self) -> LineItem {
        let unit_price = self.product.unit_price();
        LineItem::new(self.product_id, self.product.title, unit_price, self.quantity)
    }
}

/// Response envelope of `POST /api/cart`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartResponse {
    pub cart_item: CartItemDto,
}

/// Product summary nested in an order line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderProductDto {
    pub title: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Element of an order's `orderItems` array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub id: i64,
    pub product_id: ProductId,
    pub quantity: i64,
    /// Per-unit price at order time, whole rupiah.
    pub price: i64,
    pub product: OrderProductDto,
}

/// Element of the `GET /api/orders` response array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: OrderId,
    pub status: String,
    pub created_at: String,
    pub order_items: Vec<OrderItemDto>,
}

impl OrderDto {
    /// Convert into a domain order. Unknown status strings map to
    /// [`OrderStatus::Pending`]; the raw string is kept for display.
    pub fn into_order(self) -> Order {
        let status = OrderStatus::parse(&self.status).unwrap_or_default();
        Order {
            id: self.id,
            status,
            raw_status: self.status,
            created_at: self.created_at,
            items: self
                .order_items
                .into_iter()
                .map(|i| OrderLineItem {
                    product_id: i.product_id,
                    title: i.product.title,
                    unit_price: Money::new(i.price, Currency::IDR),
                    quantity: i.quantity,
                })
                .collect(),
        }
    }
}

/// Client for the storefront backend.
pub struct StoreClient {
    client: FetchClient,
    token: Option<String>,
}

impl StoreClient {
    /// Create a client for the backend at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: FetchClient::new()
                .with_base_url(base_url)
                .with_default_header("Content-Type", "application/json"),
            token: None,
        }
    }

    /// Attach a bearer token for authenticated endpoints.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn auth(&self, builder: crate::ClientRequestBuilder) -> crate::ClientRequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Fetch the authoritative cart contents as domain line items, ready for
    /// [`jaxel_commerce::cart::Cart::hydrate`].
    pub fn fetch_cart(&self) -> Result<Vec<LineItem>, FetchError> {
        Ok(self
            .fetch_cart_entries()?
            .into_iter()
            .map(CartEntryDto::into_line_item)
            .collect())
    }

    /// Fetch the raw cart entries, for views that also render product images.
    pub fn fetch_cart_entries(&self) -> Result<Vec<CartEntryDto>, FetchError> {
        self.auth(self.client.get("/api/cart"))
            .send()?
            .error_for_status()?
            .json()
    }

    /// Add or increment a product in the server-side cart.
    ///
    /// Returns the line item to merge into the local cart, taken from the
    /// server's echo rather than the request.
    pub fn add_to_cart(
        &self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<LineItem, FetchError> {
        let body = AddToCartRequest {
            product_id,
            quantity,
        };
        let response: AddToCartResponse = self
            .auth(self.client.post("/api/cart").json(&body)?)
            .send()?
            .error_for_status()?
            .json()?;
        Ok(response.cart_item.into_line_item())
    }

    /// Create an order from the given payload.
    ///
    /// The payload is already validated at construction (an empty selection
    /// never gets this far). On `Ok` the caller clears the submitted subset
    /// from its cart; on `Err` the cart is left untouched.
    pub fn checkout(&self, payload: &CheckoutPayload) -> Result<(), FetchError> {
        self.auth(self.client.post("/api/orders/checkout").json(payload)?)
            .send()?
            .error_for_status()?;
        Ok(())
    }

    /// Fetch the order history.
    pub fn fetch_orders(&self) -> Result<Vec<Order>, FetchError> {
        let orders: Vec<OrderDto> = self
            .auth(self.client.get("/api/orders"))
            .send()?
            .error_for_status()?
            .json()?;
        Ok(orders.into_iter().map(OrderDto::into_order).collect())
    }
}
