/// DC42 image creation console tool

use dc42manager::{io, plan_image, Result, SourceLayout};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "dc42-create".to_string());
    let path = match (args.next(), args.next()) {
        (Some(path), None) => path,
        _ => {
            println!("Usage: {} <raw-image>", program);
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
    let raw = io::reader::read_raw(path)?;
    println!("{}: size is {}", path, raw.len());

    let plan = plan_image(&raw, &SourceLayout::hfs_volume())?;
    println!(
        "{}: embedded volume name is \"{}\" (length {})",
        path,
        plan.header.name,
        plan.header.name.len()
    );
    println!("{}: output filename is \"{}\"", path, plan.output_name);

    if !plan.size_recognized {
        println!("{}: unknown size, leaving encoding and format unset", path);
    }
    println!("{}: computed data checksum {:08X}", path, plan.header.data_checksum);

    io::writer::write_new_image(&plan.header, &raw, Path::new(&plan.output_name))?;
    Ok(())
}
