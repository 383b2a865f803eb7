pub mod horizon;
pub mod origin;
pub mod processors;
