#![allow(dead_code)]

use chrono::NaiveDate;
use ncei_daily::{FixedClock, Transport, TransportError, TransportResponse};
use netcdf3::{DataSet, FileReader, Version};
use reqwest::Url;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

pub const SEARCH: &str = "services/search";
pub const DATA: &str = "services/data";
pub const EMPTY_SEARCH: &str = r#"{"results":[],"count":0}"#;

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

pub fn clock() -> FixedClock {
    FixedClock(d(2024, 6, 1).and_hms_opt(9, 30, 0).unwrap())
}

/// URLs requested so far, shared with the test after the transport is moved
/// into a client.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<String>>>);

impl CallLog {
    pub fn urls(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn count_matching(&self, marker: &str) -> usize {
        self.0.borrow().iter().filter(|u| u.contains(marker)).count()
    }
}

/// Answers each request with the first route whose markers all occur in the
/// URL, or a 404.
pub struct ScriptedTransport {
    routes: Vec<(Vec<String>, TransportResponse)>,
    log: CallLog,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            log: CallLog::default(),
        }
    }

    pub fn route(mut self, markers: &[&str], status: u16, body: impl Into<String>) -> Self {
        self.routes.push((
            markers.iter().map(|m| m.to_string()).collect(),
            TransportResponse::new(status, body),
        ));
        self
    }

    pub fn log(&self) -> CallLog {
        self.log.clone()
    }
}

impl Transport for ScriptedTransport {
    fn get(&self, url: &Url) -> Result<TransportResponse, TransportError> {
        self.log.0.borrow_mut().push(url.to_string());
        Ok(self
            .routes
            .iter()
            .find(|(markers, _)| markers.iter().all(|m| url.as_str().contains(m.as_str())))
            .map(|(_, response)| response.clone())
            .unwrap_or_else(|| TransportResponse::new(404, "no route")))
    }
}

/// A search response with one result.
pub fn search_body(types: &[&str], start: &str, end: &str) -> String {
    let data_types: Vec<String> = types.iter().map(|t| format!(r#"{{"id":"{t}"}}"#)).collect();
    format!(
        r#"{{"count":1,"results":[{{"startDate":"{start}T00:00:00","endDate":"{end}T00:00:00",
        "location":{{"type":"Point","coordinates":[-73.96925,40.77898]}},
        "stations":[{{"id":"USW00094728","name":"NY CITY CENTRAL PARK, NY US"}}],
        "dataTypes":[{}]}}]}}"#,
        data_types.join(",")
    )
}

/// Five days of the five core elements, plus columns the pipeline discards.
pub const CORE_CSV: &str = "\"STATION\",\"DATE\",\"PRCP\",\"PRCP_ATTRIBUTES\",\"SNOW\",\"SNWD\",\"TMAX\",\"TMIN\"\n\
\"USW00094728\",\"2020-01-01\",\"0.0\",\",,W,2400\",\"0\",\"0\",\"3.9\",\"-3.3\"\n\
\"USW00094728\",\"2020-01-02\",\"0.0\",\",,W,2400\",\"0\",\"0\",\"8.9\",\"1.7\"\n\
\"USW00094728\",\"2020-01-03\",\"3.8\",\",,W,2400\",\"0\",\"0\",\"10.0\",\"5.0\"\n\
\"USW00094728\",\"2020-01-04\",\"0.8\",\",,W,2400\",\"0\",\"0\",\"6.1\",\"3.9\"\n\
\"USW00094728\",\"2020-01-05\",\"0.0\",\",,W,2400\",\"0\",\"0\",\"6.7\",\"0.6\"\n";

/// A written netCDF file, read back in full.
#[derive(Debug)]
pub struct WrittenFile {
    pub data_set: DataSet,
    pub version: Version,
    values: HashMap<String, Vec<f64>>,
}

impl WrittenFile {
    pub fn open(path: &Path) -> Self {
        let mut reader = FileReader::open(path).unwrap();
        let names = reader.data_set().get_var_names();
        let values = names
            .into_iter()
            .map(|name| {
                let data = reader.read_var_f64(&name).unwrap();
                (name, data)
            })
            .collect();
        let (data_set, version) = reader.close();
        WrittenFile {
            data_set,
            version,
            values,
        }
    }

    pub fn dim_size(&self, name: &str) -> Option<usize> {
        self.data_set.dim_size(name)
    }

    pub fn text(&self, name: &str) -> Option<String> {
        self.data_set.get_global_attr_as_string(name)
    }

    pub fn doubles(&self, name: &str) -> Option<&[f64]> {
        self.data_set.get_global_attr_f64(name)
    }

    pub fn var_text(&self, var: &str, name: &str) -> Option<String> {
        self.data_set.get_var_attr_as_string(var, name)
    }

    pub fn variable_names(&self) -> Vec<String> {
        self.data_set.get_var_names()
    }

    pub fn values(&self, var: &str) -> &[f64] {
        &self.values[var]
    }
}
