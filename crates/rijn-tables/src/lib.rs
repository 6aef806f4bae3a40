//! Builders for the AES lookup tables.
//!
//! Each builder is a pure function over the byte domain; `TableSet`
//! runs the whole derivation chain in canonical order.

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

use alloc::vec::Vec;
use rijn_core::{MUL_CONSTANTS, RCON_ROUNDS};
use rijn_field::Gf;

/// S-box: entry i = affine(inv(i)).
pub fn build_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    for (i, out) in table.iter_mut().enumerate() {
        *out = Gf(i as u8).inv().affine().0;
    }
    table
}

/// Positional inverse permutation: result[sbox[i]] = i.
pub fn build_inv_sbox(sbox: &[u8; 256]) -> [u8; 256] {
    let mut table = [0u8; 256];
    for (i, &s) in sbox.iter().enumerate() {
        table[s as usize] = i as u8;
    }
    table
}

/// Product table for a fixed multiplier: entry i = i * c in the field.
pub fn build_mul_table(c: u8) -> [u8; 256] {
    let mut table = [0u8; 256];
    for (i, out) in table.iter_mut().enumerate() {
        *out = Gf(i as u8).mul(Gf(c)).0;
    }
    table
}

/// Round constants: 1, then repeated field doubling.
pub fn build_rcon(n: usize) -> Vec<u8> {
    let mut rcon = Vec::with_capacity(n);
    let mut x = Gf::ONE;
    for _ in 0..n {
        rcon.push(x.0);
        x = x.mul(Gf(2));
    }
    rcon
}

/// Every table the generator emits, in canonical order.
pub struct TableSet {
    pub sbox: [u8; 256],
    pub inv_sbox: [u8; 256],
    /// (multiplier, table) pairs in `MUL_CONSTANTS` order.
    pub mul: [(u8, [u8; 256]); 6],
    pub rcon: Vec<u8>,
}

impl TableSet {
    pub fn generate() -> Self {
        let sbox = build_sbox();
        let inv_sbox = build_inv_sbox(&sbox);

        let mut mul = [(0u8, [0u8; 256]); 6];
        for (slot, &c) in mul.iter_mut().zip(MUL_CONSTANTS.iter()) {
            *slot = (c, build_mul_table(c));
        }

        Self {
            sbox,
            inv_sbox,
            mul,
            rcon: build_rcon(RCON_ROUNDS),
        }
    }
}
