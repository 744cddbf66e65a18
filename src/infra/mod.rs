pub mod http_client;
pub mod pacer;
pub mod report_file;
