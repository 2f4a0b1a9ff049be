use orders_api::endpoints::OrderFilter;
use orders_api::{Client, OrdersApiError, Request};

#[tokio::main]
pub async fn main() -> Result<(), OrdersApiError> {
    let client = Client::new(orders_api::DEFAULT_BASE_URL);

    let page: u32 = 0;
    let req = Request::orders()
        .with_filter(OrderFilter::All)
        .list()
        .page(page);

    let res = client.send(req).await?;
    println!("page {} has {} orders", res.page, res.orders.len());
    Ok(())
}
