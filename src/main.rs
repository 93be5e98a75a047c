use std::env;
use std::fs::File;
use std::io::BufReader;

use anyhow::{bail, Context, Result};
use reconstruct::ShareDocument;

fn main() -> Result<()> {
    let path = match env::args().nth(1) {
        Some(path) => path,
        None => bail!("usage: reconstruct <json-file-path>"),
    };

    let file = File::open(&path).with_context(|| format!("cannot open share document {}", path))?;
    let document = ShareDocument::from_reader(BufReader::new(file))
        .with_context(|| format!("cannot read share document {}", path))?;
    let secret = document
        .recover_secret()
        .with_context(|| format!("cannot reconstruct the secret from {}", path))?;

    println!("{}", secret);
    Ok(())
}
