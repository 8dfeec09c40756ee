use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    util::types::{Seconds, Trial},
};

///One timed trial: what ran, the swept variable's value, and how long it took
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub trial: Trial,
    pub variable: f64,
    pub seconds: Seconds,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: Seconds,
    pub min: Seconds,
    pub max: Seconds,
}

impl Summary {
    pub fn from_durations(durations: &[Seconds]) -> Result<Self> {
        if durations.is_empty() {
            return Err(Error::NoSamples);
        }
        let total: Seconds = durations.iter().sum();
        let min = durations.iter().copied().fold(Seconds::INFINITY, Seconds::min);
        let max = durations
            .iter()
            .copied()
            .fold(Seconds::NEG_INFINITY, Seconds::max);
        Ok(Self {
            mean: total / durations.len() as f64,
            min,
            max,
        })
    }

    pub fn from_samples(samples: &[Sample]) -> Result<Self> {
        let durations: Vec<Seconds> = samples.iter().map(|sample| sample.seconds).collect();
        Self::from_durations(&durations)
    }
}

///Results for one target system across a sweep, as (x, summary) points
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, Summary)>,
}

impl Series {
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|(x, _)| *x).collect()
    }
    pub fn means(&self) -> Vec<Seconds> {
        self.points.iter().map(|(_, s)| s.mean).collect()
    }
    pub fn mins(&self) -> Vec<Seconds> {
        self.points.iter().map(|(_, s)| s.min).collect()
    }
    pub fn maxes(&self) -> Vec<Seconds> {
        self.points.iter().map(|(_, s)| s.max).collect()
    }
}
