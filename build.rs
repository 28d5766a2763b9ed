#![allow(clippy::style)]

extern crate autocfg;

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    let ac = autocfg::new();
    println!("cargo:rustc-check-cfg=cfg(has_u128)");
    ac.emit_has_type("u128");

    let outdir = match std::env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };
    let outdir_path = PathBuf::from(outdir);

    write_default_pow_cache_size(&outdir_path, "default_pow_cache_size.rs")?;
    Ok(())
}

/// Create default_pow_cache_size.rs, containing definition of constant DEFAULT_POW_CACHE_SIZE
fn write_default_pow_cache_size(outdir_path: &PathBuf, filename: &str) -> std::io::Result<()>
{
    let env_var = "RUST_BIGINT_EXT_DEFAULT_POW_CACHE_SIZE";

    let default_size = env::var(env_var)
        .map(|s| s.parse::<std::num::NonZeroU32>().expect("$RUST_BIGINT_EXT_DEFAULT_POW_CACHE_SIZE must be an integer > 0"))
        .map(|nz_num| nz_num.get())
        .unwrap_or(1024u32);

    let rs_path = outdir_path.join(filename);

    let contents = format!("pub(crate) const DEFAULT_POW_CACHE_SIZE: usize = {default_size};");

    // Rewriting the file if it already exists with the same contents
    // would force a rebuild.
    match std::fs::read_to_string(&rs_path) {
        Ok(existing_contents) if existing_contents == contents => {},
        _ => {
            let mut rs_file = File::create(&rs_path)
                .expect("Could not create default_pow_cache_size.rs");
            write!(rs_file, "{contents}")?;
        }
    };

    println!("cargo:rerun-if-changed={}", rs_path.display());
    println!("cargo:rerun-if-env-changed={}", env_var);

    Ok(())
}
