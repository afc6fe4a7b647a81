//! Server-rendered HTML pages.

use super::notice::Notice;
use crate::billing::Bill;
use crate::model::{MenuItem, Order, OrderStatus};
use rust_decimal::Decimal;
use std::fmt::Write;

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// `$` and exactly two decimal places.
pub fn format_price(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

fn layout(title: &str, notice: Option<Notice>, body: &str) -> String {
    let banner = notice
        .map(|n| format!("<p class=\"{}\">{}</p>\n", n.category(), n.message()))
        .unwrap_or_default();
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body>\n<nav><a href=\"/menu\">Menu</a> | <a href=\"/order\">Order</a> | \
         <a href=\"/kitchen\">Kitchen</a></nav>\n<h1>{title}</h1>\n{banner}{body}</body>\n</html>\n"
    )
}

pub fn menu_page(items: &[MenuItem], notice: Option<Notice>) -> String {
    let mut body = String::new();
    if items.is_empty() {
        body.push_str("<p>The menu is empty.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for item in items {
            let _ = writeln!(
                body,
                "<li>{} - {}</li>",
                escape(&item.name),
                format_price(item.price)
            );
        }
        body.push_str("</ul>\n");
    }
    layout("Menu", notice, &body)
}

pub fn order_page(items: &[MenuItem], notice: Option<Notice>) -> String {
    let mut body = String::from("<form method=\"post\" action=\"/order\">\n");
    for item in items {
        let _ = writeln!(
            body,
            "<label><input type=\"checkbox\" name=\"menu_items\" value=\"{}\"> {} - {}</label><br>",
            item.id.0,
            escape(&item.name),
            format_price(item.price)
        );
    }
    body.push_str("<button type=\"submit\">Place order</button>\n</form>\n");
    layout("Place an Order", notice, &body)
}

pub fn kitchen_page(orders: &[Order]) -> String {
    let mut body = String::new();
    if orders.is_empty() {
        body.push_str("<p>No orders yet.</p>\n");
    }
    for order in orders {
        let _ = writeln!(
            body,
            "<section id=\"order-{id}\">\n<h2>Order #{id}</h2>\n<p>Status: <span class=\"status\">{status}</span></p>",
            id = order.id.0,
            status = escape(order.status.as_str())
        );

        body.push_str("<ul>\n");
        for item in &order.items {
            let _ = writeln!(body, "<li>{}</li>", escape(&item.name));
        }
        body.push_str("</ul>\n");

        let _ = writeln!(
            body,
            "<form method=\"post\" action=\"/update_status/{}\">\n<select name=\"status\">",
            order.id.0
        );
        // Labels set outside the selector are kept as the selected extra option
        if !order.status.is_known() {
            let _ = writeln!(
                body,
                "<option value=\"{s}\" selected>{s}</option>",
                s = escape(order.status.as_str())
            );
        }
        for status in OrderStatus::KNOWN {
            let selected = if status == order.status { " selected" } else { "" };
            let _ = writeln!(
                body,
                "<option value=\"{s}\"{selected}>{s}</option>",
                s = status.as_str()
            );
        }
        let _ = writeln!(
            body,
            "</select>\n<button type=\"submit\">Update</button>\n</form>\n\
             <a href=\"/bill/{}\">Bill</a>\n</section>",
            order.id.0
        );
    }
    layout("Kitchen", None, &body)
}

pub fn bill_page(bill: &Bill) -> String {
    let mut body = format!(
        "<p>Status: {}</p>\n<table>\n<tr><th>Item</th><th>Qty</th><th>Price</th></tr>\n",
        escape(bill.order.status.as_str())
    );
    for line in bill.lines() {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&line.item.name),
            line.quantity,
            format_price(line.subtotal)
        );
    }
    let _ = writeln!(
        body,
        "</table>\n<p class=\"total\">Total: {}</p>",
        format_price(bill.total)
    );
    layout(&format!("Bill for Order #{}", bill.order.id.0), None, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MenuItemId, OrderId};
    use rust_decimal_macros::dec;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Fish & Chips"</b>"#),
            "&lt;b&gt;&quot;Fish &amp; Chips&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(dec!(6.75)), "$6.75");
        assert_eq!(format_price(dec!(13)), "$13.00");
        assert_eq!(format_price(dec!(2.005)), "$2.00");
        assert_eq!(format_price(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_kitchen_marks_current_status() {
        let mut order = Order::new(OrderId(4), vec![]);
        order.status = OrderStatus::InProgress;
        let html = kitchen_page(&[order]);

        assert!(html.contains("Order #4"));
        assert!(html.contains("action=\"/update_status/4\""));
        assert!(html.contains("<option value=\"in_progress\" selected>"));
        assert!(html.contains("<option value=\"pending\">"));
    }

    #[test]
    fn test_kitchen_keeps_custom_status_selected() {
        let mut order = Order::new(OrderId(5), vec![]);
        order.status = OrderStatus::from("on <hold>");
        let html = kitchen_page(&[order]);

        assert!(html.contains(
            "<option value=\"on &lt;hold&gt;\" selected>on &lt;hold&gt;</option>"
        ));
        assert_eq!(html.matches(" selected>").count(), 1);
        assert!(html.contains("<option value=\"pending\">"));
    }

    #[test]
    fn test_order_form_posts_item_ids() {
        let items = [MenuItem::new(MenuItemId(7), "Udon", dec!(9.5))];
        let html = order_page(&items, Some(Notice::EmptySelection));

        assert!(html.contains("name=\"menu_items\" value=\"7\""));
        assert!(html.contains("$9.50"));
        assert!(html.contains("Please select at least one item to order."));
    }
}
