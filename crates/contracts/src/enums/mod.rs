pub mod api_module;
