//! Epidemiological record schema.
//!
//! A person is a bundle of demographic fields. A participant extends that
//! bundle with a death certificate and primary and secondary care event
//! histories; case participants further override the secondary care history
//! with disease-specific diagnoses.
//!
//! ```text
//! person_template ──extend──► control participant ──extend──► case participant
//!   PATID Gender Name           DC PCD SCD                      SCD (case codes)
//!   Surname DOB Address
//!   Postcode GPID
//! ```

pub mod catalogue;
pub mod participant;
pub mod person;

pub use participant::{participant_template, ParticipantConfig, ParticipantKind};
pub use person::{person_template, PersonConfig};

/// Field names shared by the schema and the denormalised tables.
pub mod field {
    pub const PATID: &str = "PATID";
    pub const GENDER: &str = "Gender";
    pub const NAME: &str = "Name";
    pub const SURNAME: &str = "Surname";
    pub const DOB: &str = "DOB";
    pub const ADDRESS: &str = "Address";
    pub const POSTCODE: &str = "Postcode";
    pub const GPID: &str = "GPID";

    /// Death certificate (record, or null when alive)
    pub const DEATH_CERTIFICATE: &str = "DC";
    /// Primary care events
    pub const PRIMARY_CARE: &str = "PCD";
    /// Secondary care events
    pub const SECONDARY_CARE: &str = "SCD";

    pub const DC_ADDRESS: &str = "ADDRESS";
    pub const DC_CAUSE: &str = "CAUSE";
    pub const DC_DATE: &str = "DATE";

    pub const EVENT_GPID: &str = "GPID";
    pub const EVENT_HOSPID: &str = "HOSPID";
    pub const EVENT_DATE: &str = "EVENT_DATE";
    pub const EVENT_CODE: &str = "EVENT_CODE";
    pub const EVENT_DATA: &str = "EVENT_DATA";
}
