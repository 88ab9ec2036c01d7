use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use arrow::array::{Array, ArrayRef, AsArray, Float64Array};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use thiserror::Error;

use super::model::Listing;

/// Why a listings file could not be turned into records.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("opening {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Parquet: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
    #[error("Arrow: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
    #[error("missing column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: null value in required column '{column}'")]
    NullValue { row: usize, column: &'static str },
    #[error("row {row}: '{column}' value {value} is not a non-negative integer")]
    InvalidCount {
        row: usize,
        column: &'static str,
        value: f64,
    },
    #[error("file contains no listings")]
    Empty,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load listings from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.parquet` – one column per field, coordinates optional
/// * `.json`    – `[{ "neighbourhood_group": "...", "price": 120, ... }, ...]`
/// * `.csv`     – header row with field names, empty coordinate cells allowed
///
/// A file that parses but holds no rows is reported as [`LoadError::Empty`].
pub fn load_file(path: &Path) -> Result<Vec<Listing>, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let listings = match ext.as_str() {
        "parquet" | "pq" => load_parquet(path)?,
        "json" => load_json(path)?,
        "csv" => load_csv(path)?,
        other => return Err(LoadError::UnsupportedExtension(other.to_string())),
    };

    if listings.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(listings)
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, as written by `df.to_json(orient='records')`.
fn load_json(path: &Path) -> Result<Vec<Listing>, LoadError> {
    let reader = BufReader::new(open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<Listing>, LoadError> {
    let mut reader = csv::Reader::from_reader(open(path)?);
    let mut listings = Vec::new();
    for record in reader.deserialize() {
        listings.push(record?);
    }
    Ok(listings)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file of listings.
///
/// Numeric columns may be any type Arrow can cast to Float64 (so both the
/// `int64` prices Pandas writes and `float64` work), string columns may be
/// Utf8 or LargeUtf8. `latitude`/`longitude` are optional.
fn load_parquet(path: &Path) -> Result<Vec<Listing>, LoadError> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(open(path)?)?;
    let reader = builder.build()?;

    let mut listings = Vec::new();
    for batch in reader {
        let batch = batch?;
        read_batch(&batch, listings.len(), &mut listings)?;
    }
    Ok(listings)
}

fn read_batch(batch: &RecordBatch, offset: usize, out: &mut Vec<Listing>) -> Result<(), LoadError> {
    let group = string_column(batch, "neighbourhood_group")?;
    let room = string_column(batch, "room_type")?;
    let price = float_column(batch, "price")?;
    let reviews = float_column(batch, "number_of_reviews")?;
    let nights = float_column(batch, "minimum_nights")?;
    let availability = float_column(batch, "availability_365")?;
    let latitude = optional_float_column(batch, "latitude")?;
    let longitude = optional_float_column(batch, "longitude")?;

    let groups = group.as_string::<i32>();
    let rooms = room.as_string::<i32>();
    let prices = price.as_primitive::<Float64Type>();
    let reviews = reviews.as_primitive::<Float64Type>();
    let nights = nights.as_primitive::<Float64Type>();
    let availability = availability.as_primitive::<Float64Type>();
    let latitude = latitude.as_ref().map(|c| c.as_primitive::<Float64Type>());
    let longitude = longitude.as_ref().map(|c| c.as_primitive::<Float64Type>());

    for i in 0..batch.num_rows() {
        let row = offset + i;
        require(groups, i, row, "neighbourhood_group")?;
        require(rooms, i, row, "room_type")?;
        require(prices, i, row, "price")?;

        out.push(Listing {
            neighbourhood_group: groups.value(i).to_string(),
            room_type: rooms.value(i).to_string(),
            price: prices.value(i),
            number_of_reviews: count_at(reviews, i, row, "number_of_reviews")?,
            minimum_nights: count_at(nights, i, row, "minimum_nights")?,
            availability_365: count_at(availability, i, row, "availability_365")?,
            latitude: optional_at(latitude, i),
            longitude: optional_at(longitude, i),
        });
    }
    Ok(())
}

fn column(batch: &RecordBatch, name: &'static str) -> Result<ArrayRef, LoadError> {
    batch
        .column_by_name(name)
        .cloned()
        .ok_or(LoadError::MissingColumn(name))
}

fn string_column(batch: &RecordBatch, name: &'static str) -> Result<ArrayRef, LoadError> {
    Ok(cast(&column(batch, name)?, &DataType::Utf8)?)
}

fn float_column(batch: &RecordBatch, name: &'static str) -> Result<ArrayRef, LoadError> {
    Ok(cast(&column(batch, name)?, &DataType::Float64)?)
}

fn optional_float_column(
    batch: &RecordBatch,
    name: &'static str,
) -> Result<Option<ArrayRef>, LoadError> {
    match batch.column_by_name(name) {
        Some(col) => Ok(Some(cast(col, &DataType::Float64)?)),
        None => Ok(None),
    }
}

fn require(arr: &dyn Array, i: usize, row: usize, column: &'static str) -> Result<(), LoadError> {
    if arr.is_null(i) {
        Err(LoadError::NullValue { row, column })
    } else {
        Ok(())
    }
}

fn optional_at(arr: Option<&Float64Array>, i: usize) -> Option<f64> {
    arr.filter(|a| !a.is_null(i)).map(|a| a.value(i))
}

fn count_at(
    arr: &Float64Array,
    i: usize,
    row: usize,
    column: &'static str,
) -> Result<u32, LoadError> {
    if arr.is_null(i) {
        return Err(LoadError::NullValue { row, column });
    }
    let value = arr.value(i);
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Ok(value as u32)
    } else {
        Err(LoadError::InvalidCount { row, column, value })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use arrow::array::{Int64Array, StringArray};
    use arrow::datatypes::{Field, Schema};
    use parquet::arrow::ArrowWriter;

    use super::*;

    const CSV_WITH_COORDS: &str = "\
neighbourhood_group,room_type,price,number_of_reviews,minimum_nights,availability_365,latitude,longitude
Manhattan,Entire home/apt,225,45,3,120,40.75,-73.98
Brooklyn,Private room,89,12,1,300,,
";

    fn write_parquet(batch: &RecordBatch) -> tempfile::NamedTempFile {
        let file = tempfile::Builder::new().suffix(".parquet").tempfile().unwrap();
        let mut writer =
            ArrowWriter::try_new(file.reopen().unwrap(), batch.schema(), None).unwrap();
        writer.write(batch).unwrap();
        writer.close().unwrap();
        file
    }

    /// One-row batch with every required column; `price` and
    /// `number_of_reviews` are supplied by the caller.
    fn one_row(price: ArrayRef, reviews: ArrayRef) -> RecordBatch {
        let schema = Arc::new(Schema::new(vec![
            Field::new("neighbourhood_group", DataType::Utf8, false),
            Field::new("room_type", DataType::Utf8, false),
            Field::new("price", price.data_type().clone(), true),
            Field::new("number_of_reviews", reviews.data_type().clone(), true),
            Field::new("minimum_nights", DataType::Int64, false),
            Field::new("availability_365", DataType::Int64, false),
        ]));
        RecordBatch::try_new(
            schema,
            vec![
                Arc::new(StringArray::from(vec!["Queens"])),
                Arc::new(StringArray::from(vec!["Private room"])),
                price,
                reviews,
                Arc::new(Int64Array::from(vec![1])),
                Arc::new(Int64Array::from(vec![30])),
            ],
        )
        .unwrap()
    }

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn csv_with_partial_coordinates() {
        let file = write_temp(".csv", CSV_WITH_COORDS);
        let listings = load_file(file.path()).unwrap();

        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].neighbourhood_group, "Manhattan");
        assert_eq!(listings[0].price, 225.0);
        assert_eq!(listings[0].coordinates(), Some((40.75, -73.98)));
        assert_eq!(listings[1].coordinates(), None);
    }

    #[test]
    fn csv_without_coordinate_columns() {
        let file = write_temp(
            ".csv",
            "neighbourhood_group,room_type,price,number_of_reviews,minimum_nights,availability_365\n\
             Queens,Shared room,55.5,0,2,10\n",
        );
        let listings = load_file(file.path()).unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].price, 55.5);
        assert_eq!(listings[0].latitude, None);
    }

    #[test]
    fn json_records() {
        let file = write_temp(
            ".json",
            r#"[{"neighbourhood_group":"Bronx","room_type":"Private room","price":70,
                "number_of_reviews":5,"minimum_nights":2,"availability_365":30}]"#,
        );
        let listings = load_file(file.path()).unwrap();
        assert_eq!(listings[0].neighbourhood_group, "Bronx");
        assert_eq!(listings[0].price, 70.0);
    }

    #[test]
    fn header_only_csv_is_empty() {
        let file = write_temp(
            ".csv",
            "neighbourhood_group,room_type,price,number_of_reviews,minimum_nights,availability_365\n",
        );
        assert!(matches!(load_file(file.path()), Err(LoadError::Empty)));
    }

    #[test]
    fn unsupported_extension() {
        let file = write_temp(".xlsx", "");
        assert!(matches!(
            load_file(file.path()),
            Err(LoadError::UnsupportedExtension(ext)) if ext == "xlsx"
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_file(Path::new("/nonexistent/listings.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn parquet_with_integer_prices() {
        let schema = Arc::new(Schema::new(vec![
            Field::new("neighbourhood_group", DataType::Utf8, false),
            Field::new("room_type", DataType::Utf8, false),
            Field::new("price", DataType::Int64, false),
            Field::new("number_of_reviews", DataType::Int64, false),
            Field::new("minimum_nights", DataType::Int64, false),
            Field::new("availability_365", DataType::Int64, false),
            Field::new("latitude", DataType::Float64, true),
        ]));
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(StringArray::from(vec!["Queens", "Manhattan"])),
                Arc::new(StringArray::from(vec!["Private room", "Shared room"])),
                Arc::new(Int64Array::from(vec![99, 150])),
                Arc::new(Int64Array::from(vec![4, 0])),
                Arc::new(Int64Array::from(vec![1, 7])),
                Arc::new(Int64Array::from(vec![200, 14])),
                Arc::new(Float64Array::from(vec![Some(40.7), None])),
            ],
        )
        .unwrap();

        let file = write_parquet(&batch);

        let listings = load_file(file.path()).unwrap();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].price, 99.0);
        assert_eq!(listings[1].minimum_nights, 7);
        assert_eq!(listings[0].latitude, Some(40.7));
        // No longitude column at all.
        assert_eq!(listings[0].coordinates(), None);
    }

    #[test]
    fn parquet_missing_required_column() {
        let schema = Arc::new(Schema::new(vec![Field::new(
            "neighbourhood_group",
            DataType::Utf8,
            false,
        )]));
        let batch = RecordBatch::try_new(
            schema,
            vec![Arc::new(StringArray::from(vec!["Queens"]))],
        )
        .unwrap();

        let file = write_parquet(&batch);

        assert!(matches!(
            load_file(file.path()),
            Err(LoadError::MissingColumn("room_type"))
        ));
    }

    #[test]
    fn parquet_null_price_is_rejected() {
        let batch = one_row(
            Arc::new(Int64Array::from(vec![None::<i64>])),
            Arc::new(Int64Array::from(vec![3])),
        );
        let file = write_parquet(&batch);
        assert!(matches!(
            load_file(file.path()),
            Err(LoadError::NullValue { row: 0, column: "price" })
        ));
    }

    #[test]
    fn parquet_negative_review_count_is_rejected() {
        let batch = one_row(
            Arc::new(Int64Array::from(vec![120])),
            Arc::new(Int64Array::from(vec![-1])),
        );
        let file = write_parquet(&batch);
        assert!(matches!(
            load_file(file.path()),
            Err(LoadError::InvalidCount { column: "number_of_reviews", .. })
        ));
    }

    #[test]
    fn parquet_fractional_review_count_is_rejected() {
        let batch = one_row(
            Arc::new(Float64Array::from(vec![120.0])),
            Arc::new(Float64Array::from(vec![2.5])),
        );
        let file = write_parquet(&batch);
        match load_file(file.path()) {
            Err(LoadError::InvalidCount { row, column, value }) => {
                assert_eq!((row, column, value), (0, "number_of_reviews", 2.5));
            }
            other => panic!("expected InvalidCount, got {other:?}"),
        }
    }

    #[test]
    fn malformed_csv_and_json_are_errors() {
        let csv = write_temp(
            ".csv",
            "neighbourhood_group,room_type,price,number_of_reviews,minimum_nights,availability_365
             Queens,Private room,cheap,3,1,20
",
        );
        assert!(matches!(load_file(csv.path()), Err(LoadError::Csv(_))));

        let json = write_temp(".json", "{ this is not json");
        assert!(matches!(load_file(json.path()), Err(LoadError::Json(_))));
    }
}
