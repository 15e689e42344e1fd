//! Seed import: reconstructed records to person entities
//!
//! Identifiers are assigned by position, so the record at 0-based index i
//! becomes person i+1 and identifiers are exactly 1..N in file order. Any
//! malformed record fails the whole import; there is no skip-and-continue.

use crate::colour::Colour;
use crate::csv::{self, RawRecord};
use crate::person::{Person, PersonId};
use crate::Result;
use std::io::BufRead;
use std::path::Path;
use tracing::debug;

/// Import all persons from a seed file on disk
pub fn import_persons_from_path(path: &Path) -> Result<Vec<Person>> {
    let records = csv::read_records_from_path(path)?;
    to_persons(records)
}

/// Import all persons from a line-oriented source
pub fn import_persons<R: BufRead>(reader: R) -> Result<Vec<Person>> {
    let records = csv::read_records(reader)?;
    to_persons(records)
}

fn to_persons(records: Vec<RawRecord>) -> Result<Vec<Person>> {
    let mut persons = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        persons.push(to_person(index as i64 + 1, record)?);
    }

    debug!("Converted {} seed records to persons", persons.len());
    Ok(persons)
}

fn to_person(id: i64, record: &RawRecord) -> Result<Person> {
    let (zip_code, city) = csv::split_zip_city(&record.zip_and_city)?;

    Ok(Person {
        id: PersonId::new(id)?,
        first_name: record.first_name.trim().to_string(),
        last_name: record.last_name.trim().to_string(),
        zip_code,
        city,
        colour: Colour::from_code(record.colour_code)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::io::Cursor;
    use std::io::Write;

    fn import(input: &str) -> Result<Vec<Person>> {
        import_persons(Cursor::new(input.to_string()))
    }

    #[test]
    fn test_identifiers_follow_file_order() {
        let persons = import(
            "Müller,Hans,67742 Lauterecken,1\nPetersen,Peter,18439 Stralsund,2\n",
        )
        .unwrap();

        assert_eq!(persons.len(), 2);

        assert_eq!(persons[0].id.value(), 1);
        assert_eq!(persons[0].first_name, "Hans");
        assert_eq!(persons[0].last_name, "Müller");
        assert_eq!(persons[0].zip_code, "67742");
        assert_eq!(persons[0].city, "Lauterecken");
        assert_eq!(persons[0].colour, Colour::Blau);

        assert_eq!(persons[1].id.value(), 2);
        assert_eq!(persons[1].colour, Colour::Gruen);
    }

    #[test]
    fn test_split_record_imports_like_single_line() {
        let split = import("Müller,Hans,67742\nLauterecken,1\n").unwrap();
        let single = import("Müller,Hans,67742 Lauterecken,1\n").unwrap();
        assert_eq!(split, single);
    }

    #[test]
    fn test_out_of_range_colour_code_fails_import() {
        let err = import("Müller,Hans,67742 Lauterecken,9\n").unwrap_err();
        assert!(matches!(err, Error::UnsupportedColourCode(9)));
    }

    #[test]
    fn test_unsplittable_zip_city_fails_import() {
        let err = import("Müller,Hans,67742,1\n").unwrap_err();
        assert!(matches!(err, Error::MalformedRecord(_)));
    }

    #[test]
    fn test_one_bad_record_fails_whole_import() {
        // First record is fine, second has colour code 0; nothing is kept.
        let err = import(
            "Müller,Hans,67742 Lauterecken,1\nPetersen,Peter,18439 Stralsund,0\n",
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnsupportedColourCode(0)));
    }

    #[test]
    fn test_import_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Müller,Hans,67742 Lauterecken,1\n").unwrap();
        file.flush().unwrap();

        let persons = import_persons_from_path(file.path()).unwrap();
        assert_eq!(persons.len(), 1);
        assert_eq!(persons[0].city, "Lauterecken");
    }

    #[test]
    fn test_import_missing_file_is_io_error() {
        let err = import_persons_from_path(Path::new("/nonexistent/seed.csv")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
