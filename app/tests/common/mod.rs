//! FILENAME: tests/common/mod.rs
//! Test harness for the command-line front end: writes source CSVs into a
//! temporary directory and runs views against them.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use app_lib::{execute, AppError, Cli};
use clap::Parser;
use tempfile::TempDir;

pub const EVENTS_CSV: &str = r#"ID,Name,Sex,Age,Height,Weight,Team,NOC,Games,Year,Season,City,Sport,Event,Medal
1,Ajit Singh,M,27,172,68,India,IND,1980 Summer,1980,Summer,Moskva,Hockey,Hockey Men's Hockey,Gold
2,Bir Bahadur Chettri,M,24,170,65,India,IND,1980 Summer,1980,Summer,Moskva,Hockey,Hockey Men's Hockey,Gold
3,Abhinav Bindra,M,25,173,70,India,IND,2008 Summer,2008,Summer,Beijing,Shooting,"Shooting Men's Air Rifle, 10 metres",Gold
4,Sushil Kumar,M,29,166,66,India,IND,2012 Summer,2012,Summer,London,Wrestling,"Wrestling Men's Lightweight, Freestyle",Silver
5,Mary Kom,F,29,158,51,India,IND,2012 Summer,2012,Summer,London,Boxing,Boxing Women's Flyweight,Bronze
6,Samuel Kamau Wanjiru,M,21,163,52,Kenya,KEN,2008 Summer,2008,Summer,Beijing,Athletics,Athletics Men's Marathon,Gold
7,Michael Phelps,M,23,193,91,United States,USA,2008 Summer,2008,Summer,Beijing,Swimming,Swimming Men's 200 metres Butterfly,Gold
7,Michael Phelps,M,23,193,91,United States,USA,2008 Summer,2008,Summer,Beijing,Swimming,Swimming Men's 100 metres Butterfly,Gold
7,Michael Phelps,M,23,193,91,United States,USA,2008 Summer,2008,Summer,Beijing,Swimming,Swimming Men's 100 metres Butterfly,Gold
8,Pierre Martin,M,NA,NA,NA,France,FRA,2012 Summer,2012,Summer,London,Judo,Judo Men's Lightweight,NA
9,Ole Einar Bjorndalen,M,36,178,65,Norway,NOR,2010 Winter,2010,Winter,Vancouver,Biathlon,Biathlon Men's 10 kilometres Sprint,Gold
"#;

pub const REGIONS_CSV: &str = "NOC,region,notes\nFRA,France,\nIND,India,\nKEN,Kenya,\nNOR,Norway,\nUSA,USA,\n";

/// Holds the temporary source files for the lifetime of a test.
pub struct TestHarness {
    dir: TempDir,
    pub events: PathBuf,
    pub regions: PathBuf,
}

impl TestHarness {
    /// Harness with the standard fixture files.
    pub fn new() -> Self {
        Self::with_sources(EVENTS_CSV, REGIONS_CSV)
    }

    pub fn with_sources(events_csv: &str, regions_csv: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let events = dir.path().join("athlete_events.csv");
        let regions = dir.path().join("noc_regions.csv");
        fs::write(&events, events_csv).unwrap();
        fs::write(&regions, regions_csv).unwrap();
        TestHarness { dir, events, regions }
    }

    /// Parses a command line with the harness sources prepended.
    pub fn cli(&self, args: &[&str]) -> Cli {
        let mut argv: Vec<String> = vec![
            "olympics".to_string(),
            "--events".to_string(),
            self.events.display().to_string(),
            "--regions".to_string(),
            self.regions.display().to_string(),
        ];
        argv.extend(args.iter().map(|a| a.to_string()));
        Cli::try_parse_from(argv).unwrap()
    }

    pub fn try_run(&self, args: &[&str]) -> Result<String, AppError> {
        let cli = self.cli(args);
        let mut out = Vec::new();
        execute(&cli, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    /// Runs a view and returns everything it printed.
    pub fn run(&self, args: &[&str]) -> String {
        self.try_run(args).unwrap()
    }

    /// Runs a view in JSON mode and parses the output.
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let mut argv = args.to_vec();
        argv.extend(["--format", "json"]);
        serde_json::from_str(&self.run(&argv)).unwrap()
    }
}
