pub mod check;
pub mod launch;
