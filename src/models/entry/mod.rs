pub mod db_entry;
pub mod new_entry;
