use std::io;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, AsArray, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array,
    StringArray,
};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{CellValue, Column, DataTable};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a tabular dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with column names, one scalar per cell
/// * `.json`    – records orientation: `[{ "col": value, ... }, ...]`
/// * `.parquet` – flat scalar columns (strings, ints, floats, bools)
pub fn load_file(path: &Path) -> Result<DataTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<DataTable> {
    let reader = csv::Reader::from_path(path).context("opening CSV")?;
    read_csv(reader)
}

/// Parse CSV into a [`DataTable`].  Cell types are inferred per column, the
/// way a dataframe library types whole columns rather than single cells:
/// all-integer → Integer, else all-float → Float, else all-bool → Bool,
/// else Text.  Empty fields are nulls and do not block inference.
fn read_csv<R: io::Read>(mut reader: csv::Reader<R>) -> Result<DataTable> {
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut raw: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        if record.len() != headers.len() {
            bail!(
                "CSV row {row_no}: {} fields, expected {}",
                record.len(),
                headers.len()
            );
        }
        for (col, field) in record.iter().enumerate() {
            raw[col].push(field.to_string());
        }
    }

    let columns = headers
        .into_iter()
        .zip(raw)
        .map(|(name, cells)| infer_column(name, &cells))
        .collect();

    Ok(DataTable::new(columns)?)
}

/// Type a whole column from its raw string cells.
fn infer_column(name: String, cells: &[String]) -> Column {
    let non_empty = || cells.iter().map(|s| s.trim()).filter(|s| !s.is_empty());

    let as_typed = |parse: fn(&str) -> Option<CellValue>| -> Option<Vec<CellValue>> {
        if non_empty().next().is_none() {
            return None;
        }
        cells
            .iter()
            .map(|s| {
                let t = s.trim();
                if t.is_empty() {
                    Some(CellValue::Null)
                } else {
                    parse(t)
                }
            })
            .collect()
    };

    let values = as_typed(|s| s.parse::<i64>().ok().map(CellValue::Integer))
        .or_else(|| as_typed(|s| s.parse::<f64>().ok().map(CellValue::Float)))
        .or_else(|| {
            as_typed(|s| match s {
                "true" => Some(CellValue::Bool(true)),
                "false" => Some(CellValue::Bool(false)),
                _ => None,
            })
        })
        .unwrap_or_else(|| {
            cells
                .iter()
                .map(|s| {
                    if s.trim().is_empty() {
                        CellValue::Null
                    } else {
                        CellValue::Text(s.clone())
                    }
                })
                .collect()
        });

    Column::new(name, values)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "model": "Ion GT", "range_km": 455.0, "seats": 5 },
///   ...
/// ]
/// ```
///
/// Columns are ordered by first appearance; records missing a key get a
/// null cell for it.
fn load_json(path: &Path) -> Result<DataTable> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;
    json_records_to_table(&root)
}

fn json_records_to_table(root: &JsonValue) -> Result<DataTable> {
    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut names: Vec<String> = Vec::new();
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;
        for key in obj.keys() {
            if !names.iter().any(|n| n == key) {
                names.push(key.clone());
            }
        }
    }

    let columns = names
        .into_iter()
        .map(|name| {
            let values = records
                .iter()
                .map(|rec| {
                    rec.as_object()
                        .and_then(|obj| obj.get(&name))
                        .map_or(CellValue::Null, json_to_cell)
                })
                .collect();
            Column::new(name, values)
        })
        .collect();

    Ok(DataTable::new(columns)?)
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::Text(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::Text(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::Text(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with flat scalar columns.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`); list/struct columns are not supported
/// and render as their type name.
fn load_parquet(path: &Path) -> Result<DataTable> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut names: Vec<String> = Vec::new();
    let mut values: Vec<Vec<CellValue>> = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        if names.is_empty() {
            names = schema.fields().iter().map(|f| f.name().clone()).collect();
            values = vec![Vec::new(); names.len()];
        }

        for (col_idx, column) in batch.columns().iter().enumerate() {
            for row in 0..batch.num_rows() {
                values[col_idx].push(extract_cell_value(column, row));
            }
        }
    }

    let columns = names
        .into_iter()
        .zip(values)
        .map(|(name, vals)| Column::new(name, vals))
        .collect();

    Ok(DataTable::new(columns)?)
}

/// Extract a single scalar from an Arrow column at a given row.
fn extract_cell_value(col: &Arc<dyn Array>, row: usize) -> CellValue {
    if col.is_null(row) {
        return CellValue::Null;
    }
    match col.data_type() {
        DataType::Utf8 | DataType::LargeUtf8 => {
            if let Some(s) = col.as_any().downcast_ref::<StringArray>() {
                CellValue::Text(s.value(row).to_string())
            } else {
                // LargeStringArray
                let s = col.as_string::<i64>();
                CellValue::Text(s.value(row).to_string())
            }
        }
        DataType::Int32 => {
            let arr = col.as_any().downcast_ref::<Int32Array>().unwrap();
            CellValue::Integer(arr.value(row) as i64)
        }
        DataType::Int64 => {
            let arr = col.as_any().downcast_ref::<Int64Array>().unwrap();
            CellValue::Integer(arr.value(row))
        }
        DataType::Float32 => {
            let arr = col.as_any().downcast_ref::<Float32Array>().unwrap();
            CellValue::Float(arr.value(row) as f64)
        }
        DataType::Float64 => {
            let arr = col.as_any().downcast_ref::<Float64Array>().unwrap();
            CellValue::Float(arr.value(row))
        }
        DataType::Boolean => {
            let arr = col.as_any().downcast_ref::<BooleanArray>().unwrap();
            CellValue::Bool(arr.value(row))
        }
        _ => CellValue::Text(format!("{:?}", col.data_type())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv_table(text: &str) -> DataTable {
        read_csv(csv::Reader::from_reader(text.as_bytes())).unwrap()
    }

    #[test]
    fn csv_column_type_inference() {
        let t = csv_table(
            "model,range_km,seats,fast_charge\n\
             Ion GT,455.5,5,true\n\
             Volt S,380,4,false\n",
        );
        assert_eq!(t.column_names(), vec!["model", "range_km", "seats", "fast_charge"]);
        assert_eq!(t.value(0, 0), Some(&CellValue::Text("Ion GT".into())));
        assert_eq!(t.value(0, 1), Some(&CellValue::Float(455.5)));
        assert_eq!(t.value(1, 1), Some(&CellValue::Float(380.0)));
        assert_eq!(t.value(1, 2), Some(&CellValue::Integer(4)));
        assert_eq!(t.value(0, 3), Some(&CellValue::Bool(true)));
    }

    #[test]
    fn csv_empty_fields_are_null_and_do_not_break_inference() {
        let t = csv_table("v\n1\n\n3\n");
        assert_eq!(t.value(0, 0), Some(&CellValue::Integer(1)));
        assert_eq!(t.value(1, 0), Some(&CellValue::Null));
        assert_eq!(t.value(2, 0), Some(&CellValue::Integer(3)));
    }

    #[test]
    fn csv_mixed_column_falls_back_to_text() {
        let t = csv_table("v\n1\nabc\n");
        assert_eq!(t.value(0, 0), Some(&CellValue::Text("1".into())));
        assert_eq!(t.value(1, 0), Some(&CellValue::Text("abc".into())));
    }

    #[test]
    fn csv_header_only_gives_empty_columns() {
        let t = csv_table("a,b\n");
        assert_eq!(t.column_count(), 2);
        assert_eq!(t.row_count(), 0);
    }

    #[test]
    fn json_records() {
        let root: JsonValue = serde_json::from_str(
            r#"[
                {"model": "Ion GT", "range_km": 455.5, "seats": 5},
                {"model": "Volt S", "range_km": 380.0, "extra": true}
            ]"#,
        )
        .unwrap();
        let t = json_records_to_table(&root).unwrap();

        assert_eq!(t.column_names(), vec!["model", "range_km", "seats", "extra"]);
        assert_eq!(t.row_count(), 2);
        assert_eq!(t.value(0, 2), Some(&CellValue::Integer(5)));
        // Missing keys are nulls.
        assert_eq!(t.value(1, 2), Some(&CellValue::Null));
        assert_eq!(t.value(0, 3), Some(&CellValue::Null));
        assert_eq!(t.value(1, 3), Some(&CellValue::Bool(true)));
    }

    #[test]
    fn json_top_level_must_be_array() {
        let root: JsonValue = serde_json::from_str(r#"{"a": 1}"#).unwrap();
        assert!(json_records_to_table(&root).is_err());
    }

    #[test]
    fn parquet_round_trip() {
        use arrow::datatypes::{Field, Schema};
        use arrow::record_batch::RecordBatch;
        use parquet::arrow::ArrowWriter;

        let schema = Arc::new(Schema::new(vec![
            Field::new("model", DataType::Utf8, false),
            Field::new("range_km", DataType::Float64, false),
            Field::new("seats", DataType::Int64, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["Ion GT", "Volt S"])),
                Arc::new(Float64Array::from(vec![455.5, 380.0])),
                Arc::new(Int64Array::from(vec![5, 4])),
            ],
        )
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.parquet");
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let t = load_file(&path).unwrap();
        assert_eq!(t.column_names(), vec!["model", "range_km", "seats"]);
        assert_eq!(t.row_count(), 2);
        assert_eq!(t.value(1, 0), Some(&CellValue::Text("Volt S".into())));
        assert_eq!(t.value(0, 1), Some(&CellValue::Float(455.5)));
        assert_eq!(t.value(1, 2), Some(&CellValue::Integer(4)));
    }

    #[test]
    fn unsupported_extension() {
        assert!(load_file(Path::new("data.xlsx")).is_err());
    }
}
