#[allow(dead_code)]
pub mod mocks;
