pub mod common;
pub mod daily_menu;
pub mod dashboard;
pub mod detection;
pub mod health;
pub mod nutrition;

#[cfg(test)]
pub(crate) mod test_support;
