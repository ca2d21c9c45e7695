/// DC42 checksum verification console tool

use dc42manager::{Dc42Header, Dc42Image, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "dc42-verify".to_string());
    let path = match (args.next(), args.next()) {
        (Some(path), None) => path,
        _ => {
            println!("Disk Copy 4.2 checksum tool:");
            println!("Verifies and optionally updates checksums for DC42 disk image files.");
            println!();
            println!("Usage: {} <filename>", program);
            return ExitCode::FAILURE;
        }
    };

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str) -> Result<()> {
    println!("Verifying Disk Copy 4.2 disk image checksums for {}", path);

    let mut image = Dc42Image::open(path)?;
    print_header(image.header());

    let report = image.verify();
    println!("  stored data checksum: {:08X}", report.stored_data);
    println!("computed data checksum: {:08X}", report.computed_data);
    println!("   stored tag checksum: {:08X}", report.stored_tag);
    println!(" computed tag checksum: {:08X}", report.computed_tag);
    println!();

    if report.matches() {
        println!("Verification succeeded, no errors.");
        return Ok(());
    }

    println!("The stored checksums do not match the computed checksums.");
    if confirm_update() {
        image.update_checksums();
        image.save(path)?;
        println!("{} was modified, checksums updated.", path);
    } else {
        println!("{} was not modified.", path);
    }

    Ok(())
}

/// Print the stored header fields
fn print_header(header: &Dc42Header) {
    println!("     stored image name: {}", header.name);
    println!("             data size: {:08X}", header.data_size);
    println!("              tag size: {:08X}", header.tag_size);
    println!(
        "              encoding: {:02X}, {}",
        header.encoding.code(),
        header.encoding.name()
    );
    println!(
        "                format: {:02X}, {}",
        header.format.code(),
        header.format.name()
    );
}

/// Ask the operator whether to rewrite the stored checksums.
///
/// Anything other than an explicit yes (including Ctrl-C or EOF) leaves
/// the file untouched.
fn confirm_update() -> bool {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(_) => return false,
    };

    match editor.readline("Update the stored checksums? (Y/N) ") {
        Ok(line) => matches!(line.trim(), "y" | "Y" | "yes" | "Yes" | "YES"),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => false,
        Err(_) => false,
    }
}
