//! The in-memory display surface the renderer writes into, and the types
//! that describe interactive controls on it.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::{ChatMessage, ProductId};
use crate::notifier::Notification;
use crate::render;

pub const CART_LINK: &str = "cart-link";
pub const SEND_MESSAGE: &str = "send-message";
pub const CONSULTATION_FORM: &str = "consultation-form";

/// Identifier of a clickable control or form on the surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(pub String);

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ControlId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ControlId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// What a control does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    AddToCart(ProductId),
    RemoveFromCart(ProductId),
    OpenCart,
    SendChat,
    SubmitConsultation,
}

/// Display regions that own a set of control bindings. Re-rendering a
/// region replaces exactly that region's bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Static,
    ProductGrid,
    CartItems,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub control: ControlId,
    pub action: UiAction,
}

impl Binding {
    pub fn new(control: impl Into<ControlId>, action: UiAction) -> Self {
        Self { control: control.into(), action }
    }
}

/// Where typed text lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputTarget {
    ChatInput,
    FormField(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other(String),
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        match key {
            "Enter" => Key::Enter,
            other => Key::Other(other.to_string()),
        }
    }
}

/// Overlay component supplied by the UI toolkit. The storefront only ever
/// asks it to show itself; dismissal belongs to the toolkit.
pub trait Modal: Send + 'static {
    fn show(&mut self);
    fn is_visible(&self) -> bool;
}

/// Default modal: records that it has been shown.
#[derive(Debug, Default)]
pub struct OverlayModal {
    visible: bool,
    shown: u32,
}

impl OverlayModal {
    pub fn times_shown(&self) -> u32 {
        self.shown
    }
}

impl Modal for OverlayModal {
    fn show(&mut self) {
        self.visible = true;
        self.shown += 1;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Free-form consultation request. Only submission is intercepted; the
/// field set is whatever the shopper typed into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsultationForm {
    pub fields: BTreeMap<String, String>,
}

impl ConsultationForm {
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Empties every field, keeping the field names.
    pub fn reset(&mut self) {
        self.fields.values_mut().for_each(String::clear);
    }

    pub fn is_blank(&self) -> bool {
        self.fields.values().all(String::is_empty)
    }
}

/// Everything currently shown to the shopper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplaySurface {
    pub product_grid: String,
    pub cart_items: String,
    pub cart_total: String,
    pub chat_log: Vec<ChatMessage>,
    pub chat_input: String,
    pub consultation_form: ConsultationForm,
    pub notifications: Vec<Notification>,
}

impl DisplaySurface {
    pub fn chat_log_markup(&self) -> String {
        self.chat_log.iter().map(render::render_chat_message).collect()
    }

    pub fn notifications_markup(&self) -> String {
        self.notifications.iter().map(render::render_notification).collect()
    }
}

/// Point-in-time copy of the surface plus the modal's visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub surface: DisplaySurface,
    pub cart_modal_visible: bool,
}

/// Result of dispatching one user interaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// A registered handler ran.
    pub handled: bool,
    /// The browser-level default (navigation, form post) was suppressed.
    pub default_prevented: bool,
}

impl DispatchOutcome {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn handled() -> Self {
        Self { handled: true, default_prevented: false }
    }

    pub fn prevented() -> Self {
        Self { handled: true, default_prevented: true }
    }
}
