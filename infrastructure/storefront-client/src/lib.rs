pub mod catalog_source;
pub mod client;
pub mod dto;
pub mod order_submitter;

#[cfg(test)]
mod test_server;
