pub mod employee;
pub mod page;
