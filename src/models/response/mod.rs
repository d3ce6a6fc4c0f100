pub mod deleted;
