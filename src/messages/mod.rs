use std::sync::Arc;

use tokio::sync::oneshot;

use crate::display::{ControlId, DispatchOutcome, InputTarget, Key, ViewSnapshot};
use crate::domain::{Price, Product, ProductId};
use crate::error::StorefrontError;
use crate::notifier::NotificationId;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E = StorefrontError> = oneshot::Sender<ServiceResult<T, E>>;

/// Messages accepted by the storefront session actor. User interactions and
/// direct store operations carry a oneshot channel for the reply; timer
/// deliveries and shutdown do not.
#[derive(Debug)]
pub enum StorefrontRequest {
    Click {
        control: ControlId,
        respond_to: ServiceResponse<DispatchOutcome>,
    },
    Input {
        target: InputTarget,
        value: String,
        respond_to: ServiceResponse<()>,
    },
    KeyPress {
        target: InputTarget,
        key: Key,
        respond_to: ServiceResponse<DispatchOutcome>,
    },
    Submit {
        form: ControlId,
        respond_to: ServiceResponse<DispatchOutcome>,
    },
    AddToCart {
        product_id: ProductId,
        respond_to: ServiceResponse<Price>,
    },
    RemoveFromCart {
        product_id: ProductId,
        respond_to: ServiceResponse<Price>,
    },
    GetTotal {
        respond_to: ServiceResponse<Price>,
    },
    ListProducts {
        respond_to: ServiceResponse<Vec<Arc<Product>>>,
    },
    SendChat {
        text: String,
        respond_to: ServiceResponse<bool>,
    },
    Snapshot {
        respond_to: ServiceResponse<ViewSnapshot>,
    },
    Timer(TimerEvent),
    Shutdown,
}

/// Work delivered by a one-shot timer once its delay has elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    BotReply { prompt: String },
    DismissNotification(NotificationId),
}
