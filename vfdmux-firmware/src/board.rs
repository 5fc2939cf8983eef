//! Board pin assignments
//!
//! Single HV5812 driving six tubes in three gates. GPIO numbers refer to
//! the RP2040 pads.
//!
//! embassy-rp hands out pins as typed fields (`p.PIN_12`), so `main`
//! selects them by name. Keep the `p.PIN_*` fields there in step with
//! these numbers; they are what the startup log reports.

/// HV5812 CLK
pub const CLOCK_PIN: u8 = 12;

/// HV5812 DATA IN
pub const DATA_PIN: u8 = 13;

/// HV5812 STROBE / latch enable
pub const LATCH_PIN: u8 = 14;

/// HV5812 BLANK, set once at startup
pub const BLANK_PIN: u8 = 16;
