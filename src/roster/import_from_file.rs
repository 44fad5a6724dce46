use crate::roster::error::RosterError;
use crate::roster::extractor::{Extraction, extract};
use crate::roster::prepare_lines;
use encoding::all::ISO_8859_1;
use encoding::{DecoderTrap, Encoding};
use log::{debug, error, info};
use std::fs;
use std::path::Path;

/// Read a roster file and extract its entries.
/// Failing to read the file is an error, whereas a file without any valid entry is not.
pub fn import_from_file(path: &Path) -> Result<Extraction, RosterError> {
    let bytes = fs::read(path).map_err(|e| {
        error!("Can't read roster file `{}`.\n{e:#?}", path.display());
        RosterError::from(e)
    })?;
    let text = decode(bytes)?;
    let extraction = extract(&prepare_lines(&text));
    info!(
        "Extracted {} entries from `{}` ({} to review)",
        extraction.entries().len(),
        path.display(),
        extraction.review_notes().len()
    );

    Ok(extraction)
}

/// Rosters exported by office tools are either UTF-8 or LATIN-1 encoded.
pub(crate) fn decode(bytes: Vec<u8>) -> Result<String, RosterError> {
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            debug!("Roster is not UTF-8 encoded, falling back to LATIN-1.");
            Ok(ISO_8859_1.decode(e.as_bytes(), DecoderTrap::Strict)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::roster::error::RosterError;
    use crate::roster::import_from_file::import_from_file;
    use crate::roster::roster_entry::RosterEntry;
    use crate::tools::test::tests::temp_dir;
    use dto::nationality::Nationality;
    use dto::title::Title;
    use encoding::all::ISO_8859_1;
    use encoding::{EncoderTrap, Encoding};
    use std::fs;

    const ROSTER: &str = "ORDRE NATIONAL DES PHARMACIENS DU GABON\nTableau de l'Ordre\n\nDr Éloïse Mba 1234 Gabon\nPr Jean Obiang\n5678\nETRANGER\n";

    fn expected_entries() -> Vec<RosterEntry> {
        vec![
            RosterEntry::new(
                Title::Doctor,
                "Éloïse Mba".to_owned(),
                1234,
                Nationality::Gabon,
            ),
            RosterEntry::new(
                Title::Professor,
                "Jean Obiang".to_owned(),
                5678,
                Nationality::Foreign,
            ),
        ]
    }

    #[test]
    fn should_import_utf8_file() {
        let path = temp_dir().join("roster.txt");
        fs::write(&path, ROSTER).unwrap();

        let extraction = import_from_file(&path).unwrap();

        assert_eq!(&expected_entries(), extraction.entries());
    }

    #[test]
    fn should_import_latin1_file() {
        let path = temp_dir().join("roster.txt");
        let bytes = ISO_8859_1.encode(ROSTER, EncoderTrap::Strict).unwrap();
        fs::write(&path, bytes).unwrap();

        let extraction = import_from_file(&path).unwrap();

        assert_eq!(&expected_entries(), extraction.entries());
    }

    #[test]
    fn should_import_nothing_from_header_only_file() {
        let path = temp_dir().join("roster.txt");
        fs::write(&path, "ORDRE NATIONAL DES PHARMACIENS\nTableau\n").unwrap();

        let extraction = import_from_file(&path).unwrap();

        assert!(extraction.entries().is_empty());
    }

    #[test]
    fn should_fail_to_import_missing_file() {
        let path = temp_dir().join("missing.txt");

        let result = import_from_file(&path);

        assert!(matches!(result, Err(RosterError::CantReadRosterFile(_))));
    }
}
