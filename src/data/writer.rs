use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{Float64Array, StringArray, UInt32Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use super::model::Listing;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Write listings to a file in the format its extension names, the same
/// extensions [`super::loader::load_file`] reads.
pub fn write_file(path: &Path, listings: &[Listing]) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "parquet" | "pq" => write_parquet(path, listings),
        "csv" => write_csv(path, listings).map(|_| ()),
        "json" => write_json(path, listings),
        other => bail!("unsupported output extension: .{other}"),
    }
}

/// Header row plus one row per listing. Returns the number of rows written.
pub fn write_csv<'a>(path: &Path, listings: impl IntoIterator<Item = &'a Listing>) -> Result<usize> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    let mut written = 0;
    for listing in listings {
        writer.serialize(listing).context("writing CSV row")?;
        written += 1;
    }
    writer.flush().context("flushing CSV")?;
    Ok(written)
}

/// Records-oriented JSON array.
pub fn write_json(path: &Path, listings: &[Listing]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(file, listings).context("writing JSON")?;
    Ok(())
}

/// One Arrow column per field in a single row group. Coordinates are nullable.
pub fn write_parquet(path: &Path, listings: &[Listing]) -> Result<()> {
    let strings = |f: fn(&Listing) -> &str| {
        StringArray::from(listings.iter().map(f).collect::<Vec<_>>())
    };
    let counts =
        |f: fn(&Listing) -> u32| UInt32Array::from(listings.iter().map(f).collect::<Vec<_>>());
    let floats = |f: fn(&Listing) -> Option<f64>| {
        Float64Array::from(listings.iter().map(f).collect::<Vec<_>>())
    };

    let schema = Arc::new(Schema::new(vec![
        Field::new("neighbourhood_group", DataType::Utf8, false),
        Field::new("room_type", DataType::Utf8, false),
        Field::new("price", DataType::Float64, false),
        Field::new("number_of_reviews", DataType::UInt32, false),
        Field::new("minimum_nights", DataType::UInt32, false),
        Field::new("availability_365", DataType::UInt32, false),
        Field::new("latitude", DataType::Float64, true),
        Field::new("longitude", DataType::Float64, true),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(strings(|l| l.neighbourhood_group.as_str())),
            Arc::new(strings(|l| l.room_type.as_str())),
            Arc::new(floats(|l| Some(l.price))),
            Arc::new(counts(|l| l.number_of_reviews)),
            Arc::new(counts(|l| l.minimum_nights)),
            Arc::new(counts(|l| l.availability_365)),
            Arc::new(floats(|l| l.latitude)),
            Arc::new(floats(|l| l.longitude)),
        ],
    )
    .context("building record batch")?;

    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}
