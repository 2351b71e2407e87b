mod classroom;

pub use classroom::build_classroom;
