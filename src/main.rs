use std::error::Error;
use std::io::{self, Write};

use hoare_quicksort::printer;
use hoare_quicksort::unstable::hoare_recursive;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut arr = [64, -322, 10, 22, -1, 4, 100, 100, 21];
    let last = arr.len() - 1;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Original Array:")?;
    printer::write_line(&mut out, &arr)?;

    log::debug!("sorting range [0, {last}]");
    hoare_recursive::sort_range(&mut arr, 0, last)?;

    writeln!(out, "\nSorted Array:")?;
    printer::write_line(&mut out, &arr)?;
    out.flush()?;

    Ok(())
}
