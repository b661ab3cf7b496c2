pub mod http;
#[cfg(any(test, feature = "test-support"))]
pub mod memory;
