//! Version information display
//!
//! Prints version and build metadata in human or JSON format.

use crate::cli::args::{OutputFormat, VersionArgs};
use crate::error::QuadrillionError;

/// Build-time metadata generated by `build.rs`.
#[allow(dead_code, clippy::all, clippy::pedantic, clippy::nursery)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

/// Print version and build information.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(args: &VersionArgs) -> Result<(), QuadrillionError> {
    match args.format {
        OutputFormat::Human => {
            println!("{} {}", built_info::PKG_NAME, built_info::PKG_VERSION);
            println!("target:  {}", built_info::TARGET);
            println!("profile: {}", built_info::PROFILE);
            println!("rustc:   {}", built_info::RUSTC_VERSION);
            println!("built:   {}", built_info::BUILT_TIME_UTC);
        }
        OutputFormat::Json => {
            let info = serde_json::json!({
                "name": built_info::PKG_NAME,
                "version": built_info::PKG_VERSION,
                "target": built_info::TARGET,
                "profile": built_info::PROFILE,
                "rustc": built_info::RUSTC_VERSION,
                "built": built_info::BUILT_TIME_UTC,
            });
            println!("{}", serde_json::to_string(&info)?);
        }
    }
    Ok(())
}
