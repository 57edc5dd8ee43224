pub mod api_helpers;
