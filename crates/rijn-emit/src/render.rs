//! Text rendering for both artifacts.

use alloc::string::String;
use core::fmt::Write;

use rijn_core::{RijnResult, GENERATOR, REDUCTION_POLY};
use rijn_field::{Gf, TABLES};
use rijn_tables::TableSet;

/// Renders the generated Rust module: every table as a `pub const` byte
/// array, 16 values per row. The const names are the external contract
/// with the cipher crate that imports this file.
pub fn module_source(tables: &TableSet) -> RijnResult<String> {
    let mut out = String::new();

    writeln!(out, "//! AES lookup tables over GF(2^8) mod 0x11B.")?;
    writeln!(out, "//!")?;
    writeln!(out, "//! Generated by rijn-gen. Do not edit by hand.")?;
    writeln!(out)?;

    const_array(&mut out, "SBOX", &tables.sbox)?;
    const_array(&mut out, "INV_SBOX", &tables.inv_sbox)?;
    for &(c, ref table) in tables.mul.iter() {
        let mut name = String::new();
        write!(name, "GF_MUL_{}", c)?;
        const_array(&mut out, &name, table)?;
    }
    const_array(&mut out, "RCON", &tables.rcon)?;

    Ok(out)
}

/// Renders the text log: banner, field parameters, then every table as a
/// 16x16 hex grid (the round constants as a single row). Echoes the full
/// derivation chain, including the log/antilog tables the products come
/// from, so a reader can audit each step by hand.
pub fn log_text(tables: &TableSet) -> RijnResult<String> {
    let mut out = String::new();

    banner(&mut out, "AES Lookup Table Generator")?;
    writeln!(out)?;

    writeln!(
        out,
        "Reduction polynomial: {:#05X} (x^8 + x^4 + x^3 + x + 1)",
        REDUCTION_POLY
    )?;
    writeln!(out, "Multiplicative group generator: {:#04X} (x + 1)", GENERATOR)?;
    writeln!(out)?;

    let mut antilog = [0u8; 256];
    antilog.copy_from_slice(&TABLES.exp[..256]);
    section(&mut out, "Antilog table (powers of the generator)", &antilog)?;

    let mut log = [0u8; 256];
    log.copy_from_slice(&TABLES.log);
    section(&mut out, "Log table", &log)?;

    let mut inv = [0u8; 256];
    for (i, out_byte) in inv.iter_mut().enumerate() {
        *out_byte = Gf(i as u8).inv().0;
    }
    section(&mut out, "Field inverse table", &inv)?;

    section(&mut out, "S-box", &tables.sbox)?;
    section(&mut out, "Inverse S-box", &tables.inv_sbox)?;

    for &(c, ref table) in tables.mul.iter() {
        let mut title = String::new();
        write!(title, "x{} product table", c)?;
        section(&mut out, &title, table)?;
    }

    writeln!(out, "Round constants ({} rounds)", tables.rcon.len())?;
    for b in tables.rcon.iter() {
        write!(out, " {:02X}", b)?;
    }
    writeln!(out)?;

    Ok(out)
}

fn const_array(out: &mut String, name: &str, bytes: &[u8]) -> RijnResult<()> {
    writeln!(out, "pub const {}: [u8; {}] = [", name, bytes.len())?;
    for row in bytes.chunks(16) {
        out.push_str("   ");
        for b in row {
            write!(out, " 0x{:02X},", b)?;
        }
        out.push('\n');
    }
    writeln!(out, "];")?;
    writeln!(out)?;
    Ok(())
}

fn banner(out: &mut String, title: &str) -> RijnResult<()> {
    writeln!(out, "{}", "*".repeat(64))?;
    writeln!(out, "* {:^60} *", title)?;
    writeln!(out, "{}", "*".repeat(64))?;
    Ok(())
}

fn section(out: &mut String, title: &str, table: &[u8; 256]) -> RijnResult<()> {
    writeln!(out, "{}", title)?;
    grid_16x16(out, table)?;
    writeln!(out)?;
    Ok(())
}

/// Index-addressable grid: row label is the high nibble, column label the
/// low nibble of the input byte.
fn grid_16x16(out: &mut String, table: &[u8; 256]) -> RijnResult<()> {
    out.push_str("    ");
    for col in 0..16 {
        write!(out, " _{:X}", col)?;
    }
    out.push('\n');
    for row in 0..16 {
        write!(out, " {:X}_ ", row)?;
        for col in 0..16 {
            write!(out, " {:02X}", table[row * 16 + col])?;
        }
        out.push('\n');
    }
    Ok(())
}
