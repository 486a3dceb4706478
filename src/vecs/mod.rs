#[cfg(feature = "queue")]
pub mod queue;
#[cfg(any(feature = "stack", feature = "queue"))]
pub mod ring;
#[cfg(feature = "stack")]
pub mod stack;
