pub mod dashboard_stats_repository;
