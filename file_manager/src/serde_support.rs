use crate::aws_config::DEFAULT_PROFILE;
use crate::error::{DocumentKind, StoreError};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::Path;
use tracing::{debug, info};

/// Keys of a single INI section.
pub type Section = BTreeMap<String, String>;

/// An INI document, section name to section.
pub type Document = HashMap<String, Section>;

/// Reads an INI document, a missing file reads as an empty document.
pub fn read_document(path: &Path, document: DocumentKind) -> Result<Document, StoreError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("AWS {} file not found at {}", document, path.display());
            return Ok(Document::new());
        }
        Err(source) => return Err(StoreError::Read { document, source }),
    };

    let reader = BufReader::new(file);
    serde_ini::from_bufread(reader).map_err(|e| StoreError::Parse {
        document,
        message: e.to_string(),
    })
}

/// `[default]` first, every other section by name.
fn section_order(a: &str, b: &str) -> Ordering {
    match (a == DEFAULT_PROFILE, b == DEFAULT_PROFILE) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.cmp(b),
    }
}

pub fn serialize_ordered(document: &Document) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();

    let mut sorted_sections: Vec<_> = document.iter().collect();
    sorted_sections.sort_by(|a, b| section_order(a.0, b.0));

    for (name, section) in sorted_sections {
        writeln!(buffer, "[{}]", name)?;
        {
            let writer = serde_ini::Writer::new(&mut buffer, serde_ini::LineEnding::Linefeed);
            let mut serializer = serde_ini::Serializer::new(writer);
            section
                .serialize(&mut serializer)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
        }
        writeln!(buffer)?;
    }

    Ok(buffer)
}

pub fn write_ordered(path: &Path, contents: &[u8], document: DocumentKind) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, contents)?;

    info!("AWS {} file modified", document);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn section(entries: &[(&str, &str)]) -> Section {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();

        let document = read_document(&dir.path().join("config"), DocumentKind::Config).unwrap();

        assert!(document.is_empty());
    }

    #[test]
    fn reads_sections_and_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config");
        fs::write(
            &path,
            "[default]\nregion=us-west-2\n\n[profile dev]\nregion=us-east-1\noutput=json\n",
        )
        .unwrap();

        let document = read_document(&path, DocumentKind::Config).unwrap();

        assert_eq!(document["default"], section(&[("region", "us-west-2")]));
        assert_eq!(
            document["profile dev"],
            section(&[("output", "json"), ("region", "us-east-1")])
        );
    }

    #[test]
    fn default_section_is_written_first() {
        let mut document = Document::new();
        document.insert("zeta".to_string(), section(&[("region", "eu-west-1")]));
        document.insert("default".to_string(), section(&[("region", "us-west-2")]));
        document.insert("alpha".to_string(), section(&[("region", "us-east-1")]));

        let written = String::from_utf8(serialize_ordered(&document).unwrap()).unwrap();

        let default_at = written.find("[default]").unwrap();
        let alpha_at = written.find("[alpha]").unwrap();
        let zeta_at = written.find("[zeta]").unwrap();
        assert!(default_at < alpha_at && alpha_at < zeta_at);
        assert!(!written.contains('\r'));
    }

    #[test]
    fn written_document_reads_back_identically() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("credentials");
        let mut document = Document::new();
        document.insert(
            "dev".to_string(),
            section(&[
                ("aws_access_key_id", "AKIAEXAMPLE"),
                ("aws_secret_access_key", "c2VjcmV0"),
            ]),
        );
        document.insert("empty".to_string(), Section::new());

        let bytes = serialize_ordered(&document).unwrap();
        write_ordered(&path, &bytes, DocumentKind::Credentials).unwrap();

        let reread = read_document(&path, DocumentKind::Credentials).unwrap();
        assert_eq!(reread, document);
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config");
        fs::write(&path, "[profile dev\nregion=us-east-1\n").unwrap();

        let result = read_document(&path, DocumentKind::Config);

        assert!(matches!(
            result,
            Err(StoreError::Parse {
                document: DocumentKind::Config,
                ..
            })
        ));
    }

    #[test]
    fn nested_settings_are_read_as_flat_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config");
        fs::write(
            &path,
            "# team profile\n[profile dev]\nregion=us-east-1\ns3 =\n  max_concurrent_requests = 20\n",
        )
        .unwrap();

        let document = read_document(&path, DocumentKind::Config).unwrap();

        assert_eq!(
            document["profile dev"],
            section(&[
                ("max_concurrent_requests", "20"),
                ("region", "us-east-1"),
                ("s3", "")
            ])
        );
    }
}
