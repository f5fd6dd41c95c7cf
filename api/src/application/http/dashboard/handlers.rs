pub mod get_dashboard_stats;
