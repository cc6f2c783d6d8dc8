use packlab_unpack::{PackError, unpack};
use std::env;
use std::fs;

fn parse_key(raw: &str) -> Option<u16> {
    let digits = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .unwrap_or(raw);
    u16::from_str_radix(digits, 16).ok()
}

fn run(input_path: &str, output_path: &str, key: Option<u16>) -> Result<(), PackError> {
    let input = fs::read(input_path)?;
    let unpacked = unpack(&input, key)?;
    fs::write(output_path, &unpacked.data)?;

    println!("Unpacked {} -> {}", input_path, output_path);
    println!("  Compressed: {}", unpacked.config.is_compressed);
    println!("  Encrypted: {}", unpacked.config.is_encrypted);
    println!("  Checksummed: {}", unpacked.config.is_checksummed);
    println!("  Output size: {} bytes", unpacked.data.len());

    if unpacked.checksum_mismatch {
        eprintln!(
            "WARNING: checksum mismatch (expected {:#06x}, got {:#06x})",
            unpacked.config.checksum_value,
            unpacked.actual_checksum.unwrap_or_default()
        );
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <input-file> <output-file> [--key <HEX>]", args[0]);
        std::process::exit(1);
    }

    let mut key: Option<u16> = None;
    // Parse --key argument
    if let Some(key_idx) = args.iter().position(|arg| arg == "--key") {
        match args.get(key_idx + 1).map(|raw| parse_key(raw)) {
            Some(Some(parsed)) => key = Some(parsed),
            Some(None) => {
                eprintln!("ERROR: Invalid key. Expected up to 4 hex digits, e.g. 0x1337");
                std::process::exit(1);
            }
            None => {
                eprintln!("ERROR: --key flag requires an argument.");
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = run(&args[1], &args[2], key) {
        eprintln!("ERROR: Failed to unpack {}", args[1]);
        eprintln!("  {}", e);
        std::process::exit(1);
    }
}
