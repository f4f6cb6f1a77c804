pub mod question;
pub mod speaker;
