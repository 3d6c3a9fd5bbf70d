pub mod explain;
pub mod profiles;
pub mod random;
pub mod score;
pub mod take;
