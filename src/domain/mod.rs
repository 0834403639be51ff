pub mod audit;
pub mod company;
pub mod errors;
pub mod tenant;
