///
/// @package tuser-refgen
///
/// @file Refgen tests
/// @copyright (c) 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use std::fs;
use std::path::{Path, PathBuf};
use clap::Parser;
use proptest::prelude::*;
use crate::config::Config;
use crate::error::RefgenError;
use crate::record::LINE_LEN;
use crate::refgen;

fn scratch_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir()
        .join(format!("tuser-refgen-{}-{}.txt", std::process::id(), name));

    let _ = fs::remove_file(&path);

    path
}

fn config_for(start: &str, path: &Path) -> Config {
    Config::try_parse_from(["tuser-refgen", start, path.to_str().unwrap()]).unwrap()
}

#[test]
fn should_write_golden_lines() {
    let path = scratch_path("golden");

    assert_eq!(refgen::run(&config_for("2", &path)).unwrap(), 3);
    assert_eq!(fs::read_to_string(&path).unwrap(), concat!(
        "00000", "00000000000000000000000000000010", "\n",
        "00000", "00000000000000000000000000000001", "\n",
        "00000", "00000000000000000000000000000000", "\n"));

    let _ = fs::remove_file(&path);
}

#[test]
fn should_write_tagged_lines() {
    let path = scratch_path("tagged");

    refgen::run(&config_for("20", &path)).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    // Lines are in descending order, so value x sits at index 20 - x
    assert_eq!(&lines[0][..5], "00110");
    assert_eq!(&lines[1][..5], "00100");
    assert_eq!(&lines[5][..5], "00001");
    assert_eq!(&lines[10][..5], "01000");
    assert_eq!(&lines[15][..5], "00010");

    let _ = fs::remove_file(&path);
}

#[test]
fn should_be_idempotent() {
    let path = scratch_path("idempotent");
    let config = config_for("300", &path);

    refgen::run(&config).unwrap();
    let first = fs::read(&path).unwrap();

    refgen::run(&config).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);

    let _ = fs::remove_file(&path);
}

#[test]
fn should_truncate_previous_output() {
    let path = scratch_path("truncate");

    refgen::run(&config_for("100", &path)).unwrap();
    refgen::run(&config_for("1", &path)).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 2);

    let _ = fs::remove_file(&path);
}

#[test]
fn should_reject_negative_start_before_io() {
    let path = scratch_path("negative");

    let err = refgen::run(&config_for("-3", &path)).unwrap_err();

    assert!(matches!(err, RefgenError::InvalidArgument(_)));
    assert!(!path.exists());
}

#[test]
fn should_reject_oversized_start_before_io() {
    let path = scratch_path("oversized");

    let err = refgen::run(&config_for("4294967296", &path)).unwrap_err();

    assert!(matches!(err, RefgenError::FormatOverflow { .. }));
    assert!(!path.exists());
}

#[test]
fn should_require_both_arguments() {
    assert!(Config::try_parse_from(["tuser-refgen"]).is_err());
    assert!(Config::try_parse_from(["tuser-refgen", "2"]).is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(5))]
    #[test]
    fn should_write_one_line_per_value(start in 0u32..500) {
        let path = scratch_path(&format!("count-{start}"));

        let lines = refgen::run(&config_for(&start.to_string(), &path)).unwrap();
        let content = fs::read_to_string(&path).unwrap();

        prop_assert_eq!(lines, start as usize + 1);
        prop_assert_eq!(content.lines().count(), start as usize + 1);
        prop_assert!(content.lines().all(|line| LINE_LEN == line.len()));
        prop_assert!(content.ends_with('\n'));

        let _ = fs::remove_file(&path);
    }
}
