//! The event dispatcher: a session actor that owns all mutable storefront
//! state and turns user interactions into cart, chat and notifier work.

mod registry;
mod service;
mod timers;

pub use service::StorefrontService;
