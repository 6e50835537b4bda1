//! # Byte encodings
//!
//! Amounts are written as their three components, either as fixed-width big-endian integers or as
//! variable-length integers. Reading always goes through the canonicalizing factory, so that no
//! byte sequence can produce a value that breaks the invariants.
use std::io::{self, Error, ErrorKind, Read, Write};

use num_bigint::BigInt;

use crate::error::FractionError;
use crate::number_types::big::BigFluidAmount;
use crate::number_types::fixed::FluidAmount;

/// A zig-zag encoded, variable-length `i64`.
///
/// Seven bits per byte, least significant group first, with the high bit set on every byte but
/// the last. Values close to zero of either sign take a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarLong(pub i64);

impl VarLong {
    /// Maximum number of bytes of an encoded value.
    pub const MAX_SIZE: usize = 10;

    /// Number of bytes `write` produces for this value.
    pub fn written_size(self) -> usize {
        match Self::zig_zag(self.0) {
            0 => 1,
            n => (63 - n.leading_zeros() as usize) / 7 + 1,
        }
    }

    /// Encode this value.
    pub fn write(self, writer: &mut impl Write) -> io::Result<()> {
        let mut value = Self::zig_zag(self.0);
        loop {
            let byte = (value & 0x7F) as u8;
            value >>= 7;
            if value == 0 {
                return writer.write_all(&[byte]);
            }
            writer.write_all(&[byte | 0x80])?;
        }
    }

    /// Decode a value.
    ///
    /// # Errors
    ///
    /// If the reader fails, or if the encoding is longer than `MAX_SIZE` bytes.
    pub fn read(reader: &mut impl Read) -> io::Result<i64> {
        let mut value = 0_u64;
        for i in 0..Self::MAX_SIZE {
            let mut byte = [0];
            reader.read_exact(&mut byte)?;
            value |= u64::from(byte[0] & 0x7F) << (i * 7);
            if byte[0] & 0x80 == 0 {
                return Ok(Self::zag_zig(value));
            }
        }

        Err(Error::new(ErrorKind::InvalidData, "VarLong is too long"))
    }

    fn zig_zag(value: i64) -> u64 {
        ((value << 1) ^ (value >> 63)) as u64
    }

    fn zag_zig(value: u64) -> i64 {
        ((value >> 1) as i64) ^ -((value & 1) as i64)
    }
}

fn invalid_data(error: FractionError) -> Error {
    Error::new(ErrorKind::InvalidData, error)
}

impl FluidAmount {
    /// Size of the fixed-width encoding.
    pub const BYTES: usize = 24;

    /// Encode as `whole`, `numerator` and `denominator`, each a big-endian `i64`.
    pub fn to_bytes(&self) -> [u8; Self::BYTES] {
        let mut bytes = [0; Self::BYTES];
        bytes[0..8].copy_from_slice(&self.whole().to_be_bytes());
        bytes[8..16].copy_from_slice(&self.numerator().to_be_bytes());
        bytes[16..24].copy_from_slice(&self.denominator().to_be_bytes());
        bytes
    }

    /// Decode the fixed-width encoding.
    ///
    /// # Errors
    ///
    /// If the denominator isn't positive, or if the components can't be brought in canonical form.
    pub fn from_bytes(bytes: [u8; Self::BYTES]) -> Result<Self, FractionError> {
        let component = |index: usize| {
            let mut buffer = [0; 8];
            buffer.copy_from_slice(&bytes[index * 8..(index + 1) * 8]);
            i64::from_be_bytes(buffer)
        };

        Self::of(component(0), component(1), component(2))
    }

    /// Write the fixed-width encoding.
    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        writer.write_all(&self.to_bytes())
    }

    /// Read the fixed-width encoding.
    ///
    /// # Errors
    ///
    /// If the reader fails, or with `ErrorKind::InvalidData` for invalid components.
    pub fn read_from(reader: &mut impl Read) -> io::Result<Self> {
        let mut bytes = [0; Self::BYTES];
        reader.read_exact(&mut bytes)?;
        Self::from_bytes(bytes).map_err(invalid_data)
    }

    /// Write the components as three `VarLong`s.
    pub fn write_var_to(&self, writer: &mut impl Write) -> io::Result<()> {
        VarLong(self.whole()).write(writer)?;
        VarLong(self.numerator()).write(writer)?;
        VarLong(self.denominator()).write(writer)
    }

    /// Read three `VarLong` components.
    ///
    /// # Errors
    ///
    /// If the reader fails, or with `ErrorKind::InvalidData` for invalid components.
    pub fn read_var_from(reader: &mut impl Read) -> io::Result<Self> {
        let whole = VarLong::read(reader)?;
        let numerator = VarLong::read(reader)?;
        let denominator = VarLong::read(reader)?;
        Self::of(whole, numerator, denominator).map_err(invalid_data)
    }
}

impl BigFluidAmount {
    /// Largest accepted length of a single encoded component.
    pub const MAX_COMPONENT_BYTES: usize = 1 << 20;

    /// Write each component as a `VarLong` length followed by its big-endian two's complement
    /// bytes.
    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        for component in [self.whole(), self.numerator(), self.denominator()] {
            let bytes = component.to_signed_bytes_be();
            VarLong(bytes.len() as i64).write(writer)?;
            writer.write_all(&bytes)?;
        }

        Ok(())
    }

    /// Read the encoding of `write_to`.
    ///
    /// # Errors
    ///
    /// If the reader fails, or with `ErrorKind::InvalidData` for lengths beyond
    /// `MAX_COMPONENT_BYTES` and for invalid components.
    pub fn read_from(reader: &mut impl Read) -> io::Result<Self> {
        let mut read_component = || -> io::Result<BigInt> {
            let length = VarLong::read(reader)?;
            let length = usize::try_from(length)
                .ok()
                .filter(|&length| length <= Self::MAX_COMPONENT_BYTES)
                .ok_or_else(|| Error::new(
                    ErrorKind::InvalidData,
                    format!("invalid component length {}", length),
                ))?;
            let mut bytes = vec![0; length];
            reader.read_exact(&mut bytes)?;
            Ok(BigInt::from_signed_bytes_be(&bytes))
        };

        let whole = read_component()?;
        let numerator = read_component()?;
        let denominator = read_component()?;
        Self::of(whole, numerator, denominator).map_err(invalid_data)
    }
}
