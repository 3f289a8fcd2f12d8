pub mod action;
pub mod credentials;
pub mod daily_total;
pub mod record;
pub mod slot;
