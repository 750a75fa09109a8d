use super::domain::{RawAnswers, YesNo, AGE_MAX, AGE_MIN};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum CohortImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Row { row: usize, source: RowParseError },
}

impl std::fmt::Display for CohortImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CohortImportError::Io(err) => write!(f, "failed to read cohort export: {}", err),
            CohortImportError::Csv(err) => write!(f, "invalid cohort CSV data: {}", err),
            CohortImportError::Row { row, source } => {
                write!(f, "cohort row {row} could not be screened: {source}")
            }
        }
    }
}

impl std::error::Error for CohortImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CohortImportError::Io(err) => Some(err),
            CohortImportError::Csv(err) => Some(err),
            CohortImportError::Row { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for CohortImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CohortImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug)]
pub enum RowParseError {
    InvalidAge { raw: String },
    AgeOutOfRange { age: u8 },
    InvalidAnswer { column: &'static str, raw: String },
}

impl std::fmt::Display for RowParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowParseError::InvalidAge { raw } => write!(f, "'{raw}' is not a whole-number age"),
            RowParseError::AgeOutOfRange { age } => {
                write!(f, "age {age} is outside the accepted range {AGE_MIN}-{AGE_MAX}")
            }
            RowParseError::InvalidAnswer { column, raw } => {
                write!(f, "'{raw}' is not a Yes/No answer for column '{column}'")
            }
        }
    }
}

impl std::error::Error for RowParseError {}

#[derive(Debug, Deserialize)]
struct CohortRow {
    age: String,
    self_employed: String,
    family_history: String,
    remote_work: String,
    tech_company: String,
    benefits: String,
}

impl CohortRow {
    fn into_answers(self) -> Result<RawAnswers, RowParseError> {
        let age: u8 = self
            .age
            .trim()
            .parse()
            .map_err(|_| RowParseError::InvalidAge {
                raw: self.age.clone(),
            })?;

        let answers = RawAnswers::new(
            age,
            parse_answer("self_employed", &self.self_employed)?,
            parse_answer("family_history", &self.family_history)?,
            parse_answer("remote_work", &self.remote_work)?,
            parse_answer("tech_company", &self.tech_company)?,
            parse_answer("benefits", &self.benefits)?,
        )
        .map_err(|_| RowParseError::AgeOutOfRange { age })?;

        Ok(answers)
    }
}

fn parse_answer(column: &'static str, raw: &str) -> Result<YesNo, RowParseError> {
    YesNo::parse(raw).ok_or_else(|| RowParseError::InvalidAnswer {
        column,
        raw: raw.to_string(),
    })
}

/// Reads a cohort CSV export into validated intake records.
///
/// Expected header: `age,self_employed,family_history,remote_work,tech_company,benefits`.
/// Answer cells are parsed leniently (case and surrounding whitespace are
/// ignored); any cell that still fails to parse aborts the import with the
/// offending row number.
pub struct CohortImporter;

impl CohortImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RawAnswers>, CohortImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<RawAnswers>, CohortImportError> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut cohort = Vec::new();

        for (index, record) in csv_reader.deserialize::<CohortRow>().enumerate() {
            let row = index + 1;
            let record = record?;
            let answers = record
                .into_answers()
                .map_err(|source| CohortImportError::Row { row, source })?;
            cohort.push(answers);
        }

        Ok(cohort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "age,self_employed,family_history,remote_work,tech_company,benefits\n";

    #[test]
    fn reads_well_formed_rows_in_order() {
        let csv = format!("{HEADER}30,No,No,Yes,No,No\n50,No,Yes,No,Yes,No\n");
        let cohort = CohortImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(cohort.len(), 2);
        assert_eq!(cohort[0].age, 30);
        assert_eq!(cohort[0].family_history, YesNo::No);
        assert_eq!(cohort[1].age, 50);
        assert_eq!(cohort[1].tech_company, YesNo::Yes);
    }

    #[test]
    fn tolerates_case_and_whitespace_in_answers() {
        let csv = format!("{HEADER}42,  yes , NO,y,true, 0 \n");
        let cohort = CohortImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(cohort[0].self_employed, YesNo::Yes);
        assert_eq!(cohort[0].family_history, YesNo::No);
        assert_eq!(cohort[0].remote_work, YesNo::Yes);
        assert_eq!(cohort[0].tech_company, YesNo::Yes);
        assert_eq!(cohort[0].benefits, YesNo::No);
    }

    #[test]
    fn reports_the_row_number_for_bad_answers() {
        let csv = format!("{HEADER}30,No,No,Yes,No,No\n44,No,maybe,Yes,No,No\n");
        let error = CohortImporter::from_reader(Cursor::new(csv)).expect_err("import fails");

        match error {
            CohortImportError::Row {
                row,
                source: RowParseError::InvalidAnswer { column, raw },
            } => {
                assert_eq!(row, 2);
                assert_eq!(column, "family_history");
                assert_eq!(raw, "maybe");
            }
            other => panic!("expected row error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_out_of_range_ages_with_context() {
        let csv = format!("{HEADER}17,No,No,Yes,No,No\n");
        let error = CohortImporter::from_reader(Cursor::new(csv)).expect_err("import fails");

        match error {
            CohortImportError::Row {
                row,
                source: RowParseError::AgeOutOfRange { age },
            } => {
                assert_eq!(row, 1);
                assert_eq!(age, 17);
            }
            other => panic!("expected age error, got {other:?}"),
        }
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error =
            CohortImporter::from_path("./does-not-exist.csv").expect_err("expected io error");

        match error {
            CohortImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
