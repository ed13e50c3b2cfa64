use crate::core::normalize;
use crate::domain::model::{Domain, NormalizedRecord, RawRecord};

/// Folds one raw source row into the canonical record shape, tagged with the
/// domain it came from.
///
/// Total on malformed input: unparsable dates become `None`, unrecognized
/// gender tokens become `F`, missing fields read as empty strings. Never
/// errors, never panics.
pub fn transform(raw: &RawRecord, tag: Domain) -> NormalizedRecord {
    NormalizedRecord {
        firstname: normalize::capitalize_first(raw.field("firstname")),
        lastname: normalize::title_case(raw.field("lastname")),
        zipcode: normalize::clean_zipcode(raw.field("zipcode")),
        dateofbirth: normalize::parse_date(raw.field("dateofbirth")),
        gender: normalize::unify_gender(raw.field("gender")),
        registrationdate: normalize::parse_date_time(raw.field("registrationdate")),
        source: tag,
    }
}
