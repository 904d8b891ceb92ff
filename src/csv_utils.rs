//! CSV helpers shared by the account labelling runner and the catalog export.
//!
//! Provider exports are hand-edited often enough that surrounding whitespace
//! is trimmed from every field on the way in.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{Read, Write};
use std::path::Path;

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.trim(csv::Trim::All);
    builder
}

/// Deserializes headed CSV records from any reader, lazily.
pub fn records_from_reader<T, R>(reader: R) -> impl Iterator<Item = csv::Result<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    reader_builder().from_reader(reader).into_deserialize()
}

/// Opens `path` and deserializes its records, see [`records_from_reader`].
pub fn read_csv<T, P>(path: P) -> csv::Result<impl Iterator<Item = csv::Result<T>>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    Ok(reader_builder().from_path(path)?.into_deserialize())
}

/// Serializes `records` under a header row derived from `T`'s field names.
pub fn write_csv<T, W>(writer: W, records: impl IntoIterator<Item = T>) -> csv::Result<()>
where
    T: Serialize,
    W: Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    records
        .into_iter()
        .try_for_each(|record| wtr.serialize(record))?;
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::AccountRecord;

    #[test]
    fn test_read_csv() -> csv::Result<()> {
        let accounts: Vec<AccountRecord> =
            read_csv("data/example_accounts.csv")?.collect::<Result<_, _>>()?;

        assert_eq!(accounts.len(), 5);
        assert_eq!(
            accounts[0],
            AccountRecord {
                id: "acc-1".to_string(),
                account_type: "BANK".to_string(),
                subtype: Some("CHECKING_ACCOUNT".to_string()),
            }
        );
        assert_eq!(
            accounts[3],
            AccountRecord {
                id: "acc-4".to_string(),
                account_type: "CREDIT".to_string(),
                subtype: None,
            }
        );

        Ok(())
    }

    #[test]
    fn test_records_from_reader_trims_fields() -> csv::Result<()> {
        let input = "id , type , subtype\n acc-7 , BANK ,  \n";
        let accounts: Vec<AccountRecord> =
            records_from_reader(input.as_bytes()).collect::<Result<_, _>>()?;

        assert_eq!(
            accounts,
            [AccountRecord {
                id: "acc-7".to_string(),
                account_type: "BANK".to_string(),
                subtype: None,
            }]
        );
        Ok(())
    }

    #[test]
    fn test_write_csv() -> csv::Result<()> {
        #[derive(Serialize)]
        struct Row<'a> {
            code: &'a str,
            label: Option<&'a str>,
        }

        let mut output = Vec::new();
        let rows = [
            Row {
                code: "BANK",
                label: Some("Conta Bancária"),
            },
            Row {
                code: "WALLET",
                label: None,
            },
        ];
        write_csv(&mut output, rows)?;

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "code,label\nBANK,Conta Bancária\nWALLET,\n"
        );
        Ok(())
    }
}
