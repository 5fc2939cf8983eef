//! Hardware abstraction traits
//!
//! These traits define the interface between the multiplexing logic
//! and the shift-register drivers.

pub mod transport;

pub use transport::WordTransport;
