//! Notification message formatting.

/// Details of a freshly created draft order, for notification text.
#[derive(Debug)]
pub struct OrderNotification<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub city: &'a str,
    pub address: &'a str,
    pub product_handle: &'a str,
    pub quantity: i64,
    pub invoice_url: &'a str,
}

/// Format the order summary sent to every configured recipient.
#[must_use]
pub fn order_created(order: &OrderNotification<'_>) -> String {
    format!(
        "New order received\n\
         Name: {}\n\
         Phone: {}\n\
         City: {}\n\
         Address: {}\n\
         Product: {}\n\
         Quantity: {}\n\
         Invoice: {}",
        order.name,
        order.phone,
        order.city,
        order.address,
        order.product_handle,
        order.quantity,
        order.invoice_url,
    )
}
