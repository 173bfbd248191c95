pub mod hours;
pub mod wage;
