//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the transport trait
//! defined in vfdmux-core:
//!
//! - HV5812 20-bit serial-in shift register (bit-banged)
//! - Adapters from `embedded-hal` 1.0 pins and delays to the vfdmux HAL

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod shift;
