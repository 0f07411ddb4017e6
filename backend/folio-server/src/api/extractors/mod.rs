pub mod api_json;
