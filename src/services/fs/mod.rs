pub mod listing;
pub mod sort;
pub mod view;
