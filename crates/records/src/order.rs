//! Optional record ordering.
//!
//! A record shape may declare a derived sort key (a date or a string
//! field); most shapes declare none, which makes "no intrinsic order" an
//! explicit state: [`compare`] returns `Equal` and a stable sort keeps
//! insertion order.

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset};

use crate::record::Record;
use crate::schema::OrderKey;

/// Derived comparable key of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKey {
    Date(DateTime<FixedOffset>),
    Str(String),
}

/// The record's derived sort key, if its shape declares one.
///
/// Date keys parse the stored RFC 3339 string on demand; an empty or
/// unparsable date means the key is absent.
pub fn sort_key(record: &Record) -> Option<SortKey> {
    match record.schema().order_key {
        OrderKey::None => None,
        OrderKey::Date(field) => {
            let raw = record.date_raw(field)?;
            DateTime::parse_from_rfc3339(raw).ok().map(SortKey::Date)
        }
        OrderKey::Str(field) => record.str(field).map(|s| SortKey::Str(s.to_owned())),
    }
}

/// Total comparison over derived keys.
///
/// Records with absent or mismatched keys compare `Equal`; downstream
/// containers must use a stable sort so those records keep their arrival
/// order.
pub fn compare(a: &Record, b: &Record) -> Ordering {
    match (sort_key(a), sort_key(b)) {
        (Some(SortKey::Date(x)), Some(SortKey::Date(y))) => x.cmp(&y),
        (Some(SortKey::Str(x)), Some(SortKey::Str(y))) => x.cmp(&y),
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldDef, FieldType, RecordSchema};
    use crate::value::FieldValue;

    static DATED: RecordSchema = RecordSchema {
        tag: 920,
        name: "Dated",
        fields: &[FieldDef::new("at", "at", FieldType::DateTime)],
        order_key: OrderKey::Date("at"),
    };

    static NAMED: RecordSchema = RecordSchema {
        tag: 921,
        name: "Named",
        fields: &[FieldDef::new("name", "name", FieldType::Str)],
        order_key: OrderKey::Str("name"),
    };

    static PLAIN: RecordSchema = RecordSchema {
        tag: 922,
        name: "Plain",
        fields: &[FieldDef::new("id", "id", FieldType::I64)],
        order_key: OrderKey::None,
    };

    fn dated(at: &str) -> Record {
        let mut rec = Record::empty(&DATED);
        rec.set("at", FieldValue::DateTime(at.into())).unwrap();
        rec
    }

    #[test]
    fn test_date_key_ordering() {
        let early = dated("2024-01-10T00:00:00Z");
        let late = dated("2024-03-01T12:30:00Z");
        assert_eq!(compare(&early, &late), Ordering::Less);
        assert_eq!(compare(&late, &early), Ordering::Greater);
        assert_eq!(compare(&early, &early), Ordering::Equal);
    }

    #[test]
    fn test_unparsable_date_is_absent() {
        let good = dated("2024-01-10T00:00:00Z");
        let bad = dated("not a date");
        assert_eq!(sort_key(&bad), None);
        assert_eq!(compare(&good, &bad), Ordering::Equal);
        assert_eq!(sort_key(&Record::empty(&DATED)), None);
    }

    #[test]
    fn test_str_key_ordering() {
        let mut a = Record::empty(&NAMED);
        a.set("name", FieldValue::Str("algebra".into())).unwrap();
        let mut b = Record::empty(&NAMED);
        b.set("name", FieldValue::Str("biology".into())).unwrap();
        assert_eq!(compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_no_key_is_stable() {
        let mut records: Vec<Record> = (0..5)
            .map(|i| {
                let mut rec = Record::empty(&PLAIN);
                rec.set("id", FieldValue::I64(i)).unwrap();
                rec
            })
            .collect();
        records.sort_by(compare);
        records.sort_by(compare);
        let ids: Vec<i64> = records.iter().map(|r| r.i64("id").unwrap()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }
}
