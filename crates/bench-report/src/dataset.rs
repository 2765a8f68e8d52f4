// File: crates/bench-report/src/dataset.rs
// Summary: Timing datasets: operations, (count, duration) records, CSV loading.
// Notes:
// - One file per operation, each line `count,duration`, no header.
// - Lines that are empty or whitespace-only are skipped; everything else must be
//   exactly two integers. Quotes get no CSV meaning. Records keep file order.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::ops::Index;
use std::path::Path;

use crate::error::{RecordError, ReportError};

/// Benchmarked 2-3 tree operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Find,
    Insert,
    Delete,
}

impl Operation {
    /// Load and plot order.
    pub const ALL: [Operation; 3] = [Operation::Find, Operation::Insert, Operation::Delete];

    pub const fn label(self) -> &'static str {
        match self {
            Operation::Find => "find",
            Operation::Insert => "insert",
            Operation::Delete => "delete",
        }
    }

    /// Conventional input file name inside the results directory.
    pub const fn file_name(self) -> &'static str {
        match self {
            Operation::Find => "find.csv",
            Operation::Insert => "insert.csv",
            Operation::Delete => "delete.csv",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One measurement: element count and mean duration in nanoseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Record {
    pub count: i64,
    pub duration: i64,
}

impl Record {
    pub const fn new(count: i64, duration: i64) -> Self {
        Self { count, duration }
    }

    pub fn as_point(&self) -> (f64, f64) {
        (self.count as f64, self.duration as f64)
    }
}

/// Records of one operation in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Series {
    records: Vec<Record>,
}

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Plot coordinates, unsorted.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.records.iter().map(Record::as_point).collect()
    }
}

impl From<Vec<Record>> for Series {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl FromIterator<Record> for Series {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self { records: iter.into_iter().collect() }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, r) in self.records.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({}, {})", r.count, r.duration)?;
        }
        f.write_str("]")
    }
}

/// Parse CSV text from `reader`. `source` is only used in error reports.
pub fn parse_series<R: Read>(reader: R, source: &Path) -> Result<Series, ReportError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        // plain `count,duration`; a quote is just a bad character
        .quoting(false)
        .from_reader(reader);

    let mut series = Series::new();
    for result in rdr.records() {
        let rec = result.map_err(|e| read_error(e, source))?;
        // csv already drops empty lines; whitespace-only ones arrive as one empty field
        if rec.len() <= 1 && rec.iter().all(str::is_empty) {
            continue;
        }
        let line = rec.position().map_or(0, |p| p.line());
        let record = parse_record(&rec).map_err(|reason| ReportError::Parse {
            path: source.to_path_buf(),
            line,
            reason,
        })?;
        series.push(record);
    }
    Ok(series)
}

fn parse_record(rec: &csv::StringRecord) -> Result<Record, RecordError> {
    if rec.len() != 2 {
        return Err(RecordError::FieldCount(rec.len()));
    }
    let count = parse_field(&rec[0], "count")?;
    let duration = parse_field(&rec[1], "duration")?;
    Ok(Record::new(count, duration))
}

fn parse_field(value: &str, field: &'static str) -> Result<i64, RecordError> {
    value.parse::<i64>().map_err(|_| RecordError::NotAnInteger { field, value: value.to_owned() })
}

fn read_error(err: csv::Error, path: &Path) -> ReportError {
    let path = path.to_path_buf();
    if let csv::ErrorKind::Utf8 { pos, .. } = err.kind() {
        let line = pos.as_ref().map_or(0, |p| p.line());
        return ReportError::Parse { path, line, reason: RecordError::InvalidUtf8 };
    }
    let source = match err.into_kind() {
        csv::ErrorKind::Io(e) => e,
        other => io::Error::new(io::ErrorKind::InvalidData, format!("{other:?}")),
    };
    ReportError::Io { path, source }
}

/// Open, fully read and close one input file.
pub fn load_series(path: &Path) -> Result<Series, ReportError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ReportError::MissingFile { path: path.to_path_buf() },
        _ => ReportError::Io { path: path.to_path_buf(), source },
    })?;
    parse_series(file, path)
}

/// The three operation series, indexed by operation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BenchResults {
    series: [Series; 3],
}

impl BenchResults {
    pub fn new(find: Series, insert: Series, delete: Series) -> Self {
        Self { series: [find, insert, delete] }
    }

    /// Load `find.csv`, `insert.csv`, `delete.csv` from `dir`, in that order.
    /// The first failure aborts.
    pub fn load(dir: &Path) -> Result<Self, ReportError> {
        let mut results = Self::default();
        for op in Operation::ALL {
            let path = dir.join(op.file_name());
            let series = load_series(&path)?;
            tracing::info!(operation = %op, records = series.len(), path = %path.display(), "loaded series");
            tracing::debug!(operation = %op, records = %series, "parsed records");
            results.set(op, series);
        }
        Ok(results)
    }

    pub fn get(&self, op: Operation) -> &Series {
        &self.series[op.index()]
    }

    pub fn set(&mut self, op: Operation, series: Series) {
        self.series[op.index()] = series;
    }

    /// Series in `Operation::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Operation, &Series)> + '_ {
        Operation::ALL.into_iter().map(move |op| (op, self.get(op)))
    }

    pub fn total_records(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }
}

impl Index<Operation> for BenchResults {
    type Output = Series;

    fn index(&self, op: Operation) -> &Series {
        self.get(op)
    }
}
