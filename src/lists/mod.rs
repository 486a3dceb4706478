#[cfg(feature = "list")]
pub mod sentinel_list;
