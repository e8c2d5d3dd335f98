pub mod client;
pub mod payment_gateway;
