//! Pure projections from storefront state to markup.
//!
//! Every function here is idempotent. Interactive controls are not wired
//! through inline handlers; a [`Fragment`] carries its markup together with
//! the bindings for the controls it contains, and the dispatcher installs
//! both at once.

mod escape;

pub use escape::escape_html;

use std::fmt::Write;
use std::sync::Arc;

use crate::display::{Binding, UiAction};
use crate::domain::{ChatMessage, Price, Product};
use crate::notifier::Notification;

/// Markup plus the control bindings it introduces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    pub markup: String,
    pub bindings: Vec<Binding>,
}

/// Rendered cart panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Fragment,
    pub total: Price,
    pub total_text: String,
}

pub fn add_control_id(product: &Product) -> String {
    format!("add-to-cart-{}", product.id)
}

pub fn remove_control_id(row: usize, product: &Product) -> String {
    format!("cart-row-{}-remove-{}", row, product.id)
}

pub fn render_catalog(products: &[Arc<Product>]) -> Fragment {
    let mut fragment = Fragment::default();
    for product in products {
        let control = add_control_id(product);
        let name = escape_html(&product.name);
        // writing into a String cannot fail
        let _ = write!(
            fragment.markup,
            concat!(
                r#"<div class="col-md-4">"#,
                r#"<div class="product-card">"#,
                r#"<img src="{image}" alt="{name}" class="product-image w-100">"#,
                r#"<div class="product-info">"#,
                r#"<h3 class="product-title">{name}</h3>"#,
                r#"<p class="text-muted">{description}</p>"#,
                r#"<div class="d-flex justify-content-between align-items-center">"#,
                r#"<span class="product-price">{price}</span>"#,
                r#"<button class="btn btn-primary" id="{control}">Add to Cart</button>"#,
                r#"</div></div></div></div>"#,
            ),
            image = escape_html(&product.image),
            name = name,
            description = escape_html(&product.description),
            price = product.price,
            control = control,
        );
        fragment.bindings.push(Binding::new(control, UiAction::AddToCart(product.id)));
    }
    fragment
}

pub fn render_cart(entries: &[Arc<Product>], total: Price) -> CartView {
    let mut items = Fragment::default();
    for (row, entry) in entries.iter().enumerate() {
        let control = remove_control_id(row, entry);
        let _ = write!(
            items.markup,
            concat!(
                r#"<div class="d-flex justify-content-between align-items-center mb-3">"#,
                r#"<div><h6 class="mb-0">{name}</h6>"#,
                r#"<small class="text-muted">{price}</small></div>"#,
                r#"<button class="btn btn-sm btn-danger" id="{control}">"#,
                r#"<i class="fas fa-trash"></i></button></div>"#,
            ),
            name = escape_html(&entry.name),
            price = entry.price,
            control = control,
        );
        items.bindings.push(Binding::new(control, UiAction::RemoveFromCart(entry.id)));
    }

    CartView {
        items,
        total,
        total_text: total.to_string(),
    }
}

pub fn render_chat_message(message: &ChatMessage) -> String {
    format!(
        r#"<div class="message {}">{}</div>"#,
        message.sender.css_class(),
        escape_html(&message.text)
    )
}

pub fn render_notification(notification: &Notification) -> String {
    format!(
        r#"<div class="alert alert-success position-fixed top-0 end-0 m-3" style="z-index: 1000" data-notification="{}">{}</div>"#,
        notification.id,
        escape_html(&notification.message)
    )
}
