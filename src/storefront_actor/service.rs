use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::app_system::StorefrontConfig;
use crate::cart::{Cart, CartError};
use crate::catalog::Catalog;
use crate::chat_responder::ChatResponder;
use crate::clients::StorefrontClient;
use crate::display::{
    Binding, ControlId, DispatchOutcome, DisplaySurface, InputTarget, Key, Modal, Region,
    UiAction, ViewSnapshot, CART_LINK, CONSULTATION_FORM, SEND_MESSAGE,
};
use crate::domain::{ChatMessage, Price, Product, ProductId};
use crate::error::StorefrontError;
use crate::messages::{ServiceResponse, StorefrontRequest, TimerEvent};
use crate::notifier::{self, Notifier};
use crate::render;

use super::registry::HandlerRegistry;
use super::timers::TimerScheduler;

/// One shopper's storefront session.
///
/// Owns the cart, chat log, notifications and display surface. Every user
/// interaction and every timer delivery arrives through the mailbox, so all
/// state changes happen one at a time on this task.
pub struct StorefrontService {
    receiver: mpsc::Receiver<StorefrontRequest>,
    timers: TimerScheduler,
    config: StorefrontConfig,
    catalog: Catalog,
    responder: ChatResponder,
    cart: Cart,
    notifier: Notifier,
    handlers: HandlerRegistry,
    surface: DisplaySurface,
    cart_modal: Box<dyn Modal>,
}

impl StorefrontService {
    pub fn new(
        config: StorefrontConfig,
        catalog: Catalog,
        cart_modal: Box<dyn Modal>,
    ) -> (Self, StorefrontClient) {
        let (sender, receiver) = mpsc::channel(config.mailbox_capacity);
        let service = Self {
            receiver,
            timers: TimerScheduler::new(sender.downgrade()),
            config,
            catalog,
            responder: ChatResponder::default(),
            cart: Cart::new(),
            notifier: Notifier::new(),
            handlers: HandlerRegistry::new(),
            surface: DisplaySurface::default(),
            cart_modal,
        };
        let client = StorefrontClient::new(sender);
        (service, client)
    }

    #[instrument(name = "storefront_service", skip(self))]
    pub async fn run(mut self) {
        info!("StorefrontService starting");
        self.mount();

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StorefrontRequest::Click { control, respond_to } => {
                    let outcome = self.handle_click(control);
                    let _ = respond_to.send(Ok(outcome));
                }
                StorefrontRequest::Input { target, value, respond_to } => {
                    self.handle_input(target, value);
                    let _ = respond_to.send(Ok(()));
                }
                StorefrontRequest::KeyPress { target, key, respond_to } => {
                    let outcome = self.handle_key_press(target, key);
                    let _ = respond_to.send(Ok(outcome));
                }
                StorefrontRequest::Submit { form, respond_to } => {
                    let outcome = self.handle_submit(form);
                    let _ = respond_to.send(Ok(outcome));
                }
                StorefrontRequest::AddToCart { product_id, respond_to } => {
                    self.handle_add_to_cart(product_id, respond_to);
                }
                StorefrontRequest::RemoveFromCart { product_id, respond_to } => {
                    self.handle_remove_from_cart(product_id, respond_to);
                }
                StorefrontRequest::GetTotal { respond_to } => {
                    let _ = respond_to.send(Ok(self.cart.total()));
                }
                StorefrontRequest::ListProducts { respond_to } => {
                    let _ = respond_to.send(Ok(self.catalog.list_products().to_vec()));
                }
                StorefrontRequest::SendChat { text, respond_to } => {
                    let started = self.start_chat_turn(&text);
                    let _ = respond_to.send(Ok(started));
                }
                StorefrontRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.snapshot()));
                }
                StorefrontRequest::Timer(event) => {
                    self.handle_timer(event);
                }
                StorefrontRequest::Shutdown => {
                    info!("StorefrontService shutting down");
                    break;
                }
            }
        }

        info!("StorefrontService stopped");
    }

    /// Initial page render and static control wiring.
    fn mount(&mut self) {
        let catalog = render::render_catalog(self.catalog.list_products());
        self.surface.product_grid = catalog.markup;
        self.handlers.replace_region(Region::ProductGrid, catalog.bindings);
        self.rerender_cart();

        self.handlers.register(Region::Static, Binding::new(CART_LINK, UiAction::OpenCart));
        self.handlers.register(Region::Static, Binding::new(SEND_MESSAGE, UiAction::SendChat));
        self.handlers.register(
            Region::Static,
            Binding::new(CONSULTATION_FORM, UiAction::SubmitConsultation),
        );
        debug!(products = self.catalog.len(), bindings = self.handlers.len(), "Storefront mounted");
    }

    #[instrument(fields(control = %control), skip(self, control))]
    fn handle_click(&mut self, control: ControlId) -> DispatchOutcome {
        let Some(action) = self.handlers.lookup(&control) else {
            debug!("No handler bound to control");
            return DispatchOutcome::ignored();
        };

        match action {
            UiAction::AddToCart(product_id) => {
                // bindings only exist for catalog products, but stay quiet on a miss
                let _ = self.add_to_cart(product_id);
                DispatchOutcome::handled()
            }
            UiAction::RemoveFromCart(product_id) => {
                self.remove_from_cart(product_id);
                DispatchOutcome::handled()
            }
            UiAction::OpenCart => {
                self.cart_modal.show();
                info!(entries = self.cart.len(), "Cart opened");
                DispatchOutcome::prevented()
            }
            UiAction::SendChat => {
                self.submit_chat_input();
                DispatchOutcome::handled()
            }
            UiAction::SubmitConsultation => {
                // forms fire through submit, not click
                DispatchOutcome::ignored()
            }
        }
    }

    fn handle_input(&mut self, target: InputTarget, value: String) {
        match target {
            InputTarget::ChatInput => self.surface.chat_input = value,
            InputTarget::FormField(field) => self.surface.consultation_form.set(field, value),
        }
    }

    #[instrument(skip(self))]
    fn handle_key_press(&mut self, target: InputTarget, key: Key) -> DispatchOutcome {
        match (target, key) {
            (InputTarget::ChatInput, Key::Enter) => {
                self.submit_chat_input();
                DispatchOutcome::handled()
            }
            _ => DispatchOutcome::ignored(),
        }
    }

    #[instrument(fields(form = %form), skip(self, form))]
    fn handle_submit(&mut self, form: ControlId) -> DispatchOutcome {
        match self.handlers.lookup(&form) {
            Some(UiAction::SubmitConsultation) => {
                let fields = self.surface.consultation_form.fields.len();
                self.notify(notifier::CONSULTATION_SUBMITTED);
                self.surface.consultation_form.reset();
                info!(fields, "Consultation request accepted");
                DispatchOutcome::prevented()
            }
            _ => {
                debug!("Submit on unregistered form");
                DispatchOutcome::ignored()
            }
        }
    }

    #[instrument(fields(product_id = %product_id), skip(self, respond_to))]
    fn handle_add_to_cart(&mut self, product_id: ProductId, respond_to: ServiceResponse<Price>) {
        let result = self
            .add_to_cart(product_id)
            .map(|_| self.cart.total())
            .map_err(StorefrontError::from);
        let _ = respond_to.send(result);
    }

    #[instrument(fields(product_id = %product_id), skip(self, respond_to))]
    fn handle_remove_from_cart(&mut self, product_id: ProductId, respond_to: ServiceResponse<Price>) {
        self.remove_from_cart(product_id);
        let _ = respond_to.send(Ok(self.cart.total()));
    }

    fn add_to_cart(&mut self, product_id: ProductId) -> Result<Arc<Product>, CartError> {
        let product = self.cart.add(&self.catalog, product_id)?;
        self.rerender_cart();
        self.notify(notifier::PRODUCT_ADDED);
        info!(product_name = %product.name, total = %self.cart.total(), "Product added to cart");
        Ok(product)
    }

    fn remove_from_cart(&mut self, product_id: ProductId) {
        let removed = self.cart.remove(product_id);
        self.rerender_cart();
        self.notify(notifier::PRODUCT_REMOVED);
        info!(%product_id, removed, total = %self.cart.total(), "Product removed from cart");
    }

    fn rerender_cart(&mut self) {
        let view = render::render_cart(self.cart.entries(), self.cart.total());
        self.surface.cart_items = view.items.markup;
        self.surface.cart_total = view.total_text;
        self.handlers.replace_region(Region::CartItems, view.items.bindings);
    }

    fn submit_chat_input(&mut self) {
        let text = std::mem::take(&mut self.surface.chat_input);
        if !self.start_chat_turn(&text) {
            // leave whitespace where the shopper typed it
            self.surface.chat_input = text;
        }
    }

    /// Appends the user's line and schedules the bot's answer. Blank input
    /// starts no turn.
    #[instrument(skip(self, text))]
    fn start_chat_turn(&mut self, text: &str) -> bool {
        let message = text.trim();
        if message.is_empty() {
            debug!("Ignoring blank chat input");
            return false;
        }

        self.surface.chat_log.push(ChatMessage::user(message));
        self.timers.schedule(
            self.config.reply_delay,
            TimerEvent::BotReply { prompt: message.to_string() },
        );
        debug!(chat_len = self.surface.chat_log.len(), "Chat turn started");
        true
    }

    fn notify(&mut self, message: &str) {
        let id = self.notifier.push(message);
        self.surface.notifications = self.notifier.active().to_vec();
        self.timers.schedule(
            self.config.notification_duration,
            TimerEvent::DismissNotification(id),
        );
    }

    #[instrument(skip(self))]
    fn handle_timer(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::BotReply { prompt } => {
                let category = self.responder.classify(&prompt);
                let reply = self.responder.respond(&prompt);
                self.surface.chat_log.push(ChatMessage::bot(reply));
                info!(?category, "Bot replied");
            }
            TimerEvent::DismissNotification(id) => {
                if !self.notifier.dismiss(id) {
                    warn!(notification_id = %id, "Notification already gone");
                }
                self.surface.notifications = self.notifier.active().to_vec();
            }
        }
    }

    fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            surface: self.surface.clone(),
            cart_modal_visible: self.cart_modal.is_visible(),
        }
    }
}
