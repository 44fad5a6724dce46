pub mod error;
pub mod extractor;
pub mod import_from_file;
pub mod name;
pub mod roster_entry;

/// Number of lines heading a roster, which never hold any entry.
const HEADER_LENGTH: usize = 2;

/// Turn a roster into the lines the extractor works on:
/// trimmed, without blank lines and without the header.
pub fn prepare_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .skip(HEADER_LENGTH)
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::roster::prepare_lines;

    #[test]
    fn should_prepare_lines() {
        let text = "ORDRE NATIONAL DES PHARMACIENS\r\n\r\nTableau de l'Ordre\n  Dr Jean Obiang  \n\n\t1234\nGabon\n";

        assert_eq!(vec!["Dr Jean Obiang", "1234", "Gabon"], prepare_lines(text));
    }

    #[test]
    fn should_prepare_no_line_when_only_header() {
        assert!(prepare_lines("Title\nSubtitle\n").is_empty());
        assert!(prepare_lines("Title").is_empty());
        assert!(prepare_lines("").is_empty());
    }
}
