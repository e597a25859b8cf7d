//! Client handles for the storefront session actor.

/// Generates a client method that sends a request carrying a oneshot
/// `respond_to` channel and awaits the reply.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, crate::error::StorefrontError> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender
                    .send($request::$variant {
                        $($param,)*
                        respond_to,
                    })
                    .await
                    .map_err(|_| crate::error::StorefrontError::ActorCommunicationError("Actor closed".to_string()))?;

                response
                    .await
                    .map_err(|_| crate::error::StorefrontError::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}

pub mod storefront_client;

pub use storefront_client::*;
