pub mod http_detector;
