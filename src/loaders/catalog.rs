use std::collections::HashMap;
use std::path::Path;

use anyhow::{Result, bail};
use log::info;
use serde::Serialize;

use super::records::read_records;
use crate::config::settings::LoaderSettings;
use crate::domain::ItemId;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    pub isbn: ItemId,
    pub title: String,
    pub author: String,
}

pub type Catalog = HashMap<ItemId, Book>;

/// Loads `"ISBN";"Book-Title";"Book-Author";...` records, ignoring any
/// further columns.
pub fn load_catalog(path: &Path, settings: &LoaderSettings) -> Result<Catalog> {
    let records = read_records(path, settings.delimiter)?;
    let mut catalog = Catalog::new();

    for (line, fields) in records {
        if line == 1 && fields.first().is_some_and(|f| f.eq_ignore_ascii_case("ISBN")) {
            continue;
        }
        if fields.len() < 3 {
            bail!(
                "Expected at least 3 fields on line {} of {}, found {}",
                line,
                path.display(),
                fields.len()
            );
        }

        let book = Book {
            isbn: fields[0].clone(),
            title: fields[1].clone(),
            author: fields[2].clone(),
        };
        catalog.insert(book.isbn.clone(), book);
    }

    info!("Loaded {} books from {}", catalog.len(), path.display());
    Ok(catalog)
}
