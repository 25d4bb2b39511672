/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # Binance SBE Transport
//!
//! Stream framing for Binance SBE messages.
//!
//! This crate provides:
//! - **SOFH codec**: Tokio codec splitting a byte stream on the Simple Open
//!   Framing Header
//! - **Spot codec**: The same framing yielding typed spot messages

pub mod codec;

pub use codec::{CodecError, SBE_ENCODING_TYPE, SOFH_LENGTH, SofhCodec, SpotCodec};
