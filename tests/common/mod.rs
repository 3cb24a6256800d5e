pub mod external_server;
pub mod viewer_host;
