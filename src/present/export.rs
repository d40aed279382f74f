//! Shopping list export as CSV

use crate::core::error::Result;
use crate::request::resolver::ProductMatches;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Capitalize the first letter of every alphabetic run, lowercase the rest
///
/// "peanut butter" -> "Peanut Butter", "m&ms" -> "M&Ms"
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Write matches as `Product,Shelf` rows in result order
pub fn write_csv<W: Write>(matches: &ProductMatches, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Product", "Shelf"])?;
    for m in matches.iter() {
        csv.write_record([title_case(&m.product).as_str(), m.shelf.as_str()])?;
    }
    csv.flush()?;
    Ok(())
}

pub fn to_csv_string(matches: &ProductMatches) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(matches, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write the shopping list to a file, replacing any existing one
pub fn export_csv(matches: &ProductMatches, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_csv(matches, file)?;
    tracing::info!(items = matches.len(), path = ?path, "exported shopping list");
    Ok(())
}
