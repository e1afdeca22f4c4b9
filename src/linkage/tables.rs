//! Denormalisation of participant records into flat, linkable tables.

use crate::epi::field;
use crate::error::PipelineError;
use dgen_generator::{Record, Value};

pub const GP_DEM_COLUMNS: &[&str] = &[
    "PATID", "NAME", "SURNAME", "DOB", "GENDER", "ADDRESS", "POSTCODE", "GPID",
];
pub const GP_CLIN_COLUMNS: &[&str] = &["PATID", "GPID", "EVENT_DATE", "EVENT_CODE", "EVENT_DATA"];
pub const HOSPDAT_COLUMNS: &[&str] = &["PATID", "HOSPID", "EVENT_DATE", "EVENT_CODE"];
pub const DEATHREG_COLUMNS: &[&str] = &[
    "PATID", "NAME", "SURNAME", "DOB", "GENDER", "ADDRESS", "POSTCODE", "DOD", "CAUSE",
];

/// A named table of text cells with a fixed column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name: &'static str,
    columns: &'static [&'static str],
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(name: &'static str, columns: &'static [&'static str]) -> Self {
        Self {
            name,
            columns,
            rows: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn columns(&self) -> &'static [&'static str] {
        self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Vec<String>] {
        &mut self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of `column`, or [`PipelineError::UnknownColumn`].
    pub fn column_index(&self, column: &str) -> Result<usize, PipelineError> {
        self.columns
            .iter()
            .position(|c| *c == column)
            .ok_or_else(|| PipelineError::UnknownColumn {
                table: self.name.to_string(),
                column: column.to_string(),
            })
    }

    /// Cell values of `column`, top to bottom.
    pub fn column(&self, column: &str) -> Result<Vec<&str>, PipelineError> {
        let index = self.column_index(column)?;
        Ok(self.rows.iter().map(|row| row[index].as_str()).collect())
    }

    fn push<S: Into<String>>(&mut self, row: impl IntoIterator<Item = S>) {
        let row: Vec<String> = row.into_iter().map(Into::into).collect();
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }
}

/// The four tables of a data-linking exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tables {
    /// GP demographics, one row per participant
    pub gp_dem: Table,
    /// GP clinical events
    pub gp_clin: Table,
    /// Hospital events
    pub hospdat: Table,
    /// Death register, one row per deceased participant
    pub deathreg: Table,
}

impl Tables {
    fn new() -> Self {
        Self {
            gp_dem: Table::new("GP_DEM", GP_DEM_COLUMNS),
            gp_clin: Table::new("GP_CLIN", GP_CLIN_COLUMNS),
            hospdat: Table::new("HOSPDAT", HOSPDAT_COLUMNS),
            deathreg: Table::new("DEATHREG", DEATHREG_COLUMNS),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        [&self.gp_dem, &self.gp_clin, &self.hospdat, &self.deathreg].into_iter()
    }
}

/// Split participant records into GP_DEM, GP_CLIN, HOSPDAT and DEATHREG.
///
/// Every event row carries the participant's PATID. Participants without a
/// death certificate have no DEATHREG row.
pub fn denormalise(population: &[Record]) -> Result<Tables, PipelineError> {
    let mut tables = Tables::new();

    for participant in population {
        let patid = text(participant, field::PATID)?;
        let name = text(participant, field::NAME)?;
        let surname = text(participant, field::SURNAME)?;
        let dob = text(participant, field::DOB)?;
        let gender = text(participant, field::GENDER)?;
        let address = text(participant, field::ADDRESS)?;
        let postcode = text(participant, field::POSTCODE)?;

        tables.gp_dem.push([
            patid,
            name,
            surname,
            dob,
            gender,
            address,
            postcode,
            text(participant, field::GPID)?,
        ]);

        for event in events(participant, field::PRIMARY_CARE)? {
            tables.gp_clin.push([
                patid,
                text(event, field::EVENT_GPID)?,
                text(event, field::EVENT_DATE)?,
                text(event, field::EVENT_CODE)?,
                text(event, field::EVENT_DATA)?,
            ]);
        }

        for event in events(participant, field::SECONDARY_CARE)? {
            tables.hospdat.push([
                patid,
                text(event, field::EVENT_HOSPID)?,
                text(event, field::EVENT_DATE)?,
                text(event, field::EVENT_CODE)?,
            ]);
        }

        match participant.get(field::DEATH_CERTIFICATE) {
            Some(Value::Record(certificate)) => tables.deathreg.push([
                patid,
                name,
                surname,
                dob,
                gender,
                address,
                postcode,
                text(certificate, field::DC_DATE)?,
                text(certificate, field::DC_CAUSE)?,
            ]),
            Some(Value::Null) | None => {}
            Some(other) => {
                return Err(PipelineError::MalformedRecord(format!(
                    "{} is a {}, expected a record",
                    field::DEATH_CERTIFICATE,
                    other.kind()
                )))
            }
        }
    }

    Ok(tables)
}

fn text<'a>(record: &'a Record, name: &str) -> Result<&'a str, PipelineError> {
    record
        .get_text(name)
        .ok_or_else(|| PipelineError::MalformedRecord(format!("missing text field {name}")))
}

fn events<'a>(record: &'a Record, name: &str) -> Result<Vec<&'a Record>, PipelineError> {
    let list = record
        .get(name)
        .and_then(Value::as_list)
        .ok_or_else(|| PipelineError::MalformedRecord(format!("missing event list {name}")))?;
    list.iter()
        .map(|event| {
            event
                .as_record()
                .ok_or_else(|| PipelineError::MalformedRecord(format!("{name} entry is not a record")))
        })
        .collect()
}
