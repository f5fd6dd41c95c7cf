pub mod detection_repository;
