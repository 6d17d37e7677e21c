pub mod http;
pub mod portal;
