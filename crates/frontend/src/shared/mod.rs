pub mod api_client;
pub mod api_config;
pub mod api_error;
pub mod entity_form;
pub mod entity_page;
pub mod entity_service;
pub mod entity_store;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod modal_stack;
pub mod notifications;

#[cfg(test)]
pub mod testing;
