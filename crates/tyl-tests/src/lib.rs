//! Golden file runner. Every `<name>.tyl` file of a directory is given to a function and its output
//! is compared with `<name>.expect`. When the expect file does not exist yet it is created with the
//! current output.

use std::{
    fs,
    path::{Path, PathBuf},
};

use itertools::Itertools;

pub struct Test {
    pub directory: &'static str,
    pub run: fn(source: String) -> String,
}

pub const EXTENSION: &str = "tyl";

/// Splits a file name into its stem and extension.
pub fn split_name(path: &Path) -> Option<(String, String)> {
    let stem = path.file_stem()?.to_string_lossy().to_string();
    let typ = path.extension()?.to_string_lossy().to_string();
    Some((stem, typ))
}

fn sources(directory: &str) -> Vec<PathBuf> {
    fs::read_dir(directory)
        .unwrap_or_else(|err| panic!("cannot read test directory '{directory}': {err}"))
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| matches!(split_name(path), Some((_, typ)) if typ == EXTENSION))
        .sorted()
        .collect()
}

/// Runs every test of the directory, failing with the list of tests whose output changed.
pub fn test_runner(test: &Test) {
    let mut failures = Vec::new();
    let files = sources(test.directory);

    assert!(!files.is_empty(), "no tests found in '{}'", test.directory);

    for file in files {
        let Some((file_name, _)) = split_name(&file) else {
            continue;
        };

        println!("testing '{file_name}'");

        let content = fs::read_to_string(&file).unwrap();
        let result = (test.run)(content);
        let expect_path = file.with_extension("expect");

        match fs::read_to_string(&expect_path) {
            Ok(expects) if expects.trim_end() == result.trim_end() => {}
            Ok(expects) => failures.push(format!(
                "{file_name}\n  expected: {}\n     found: {}",
                expects.trim_end(),
                result.trim_end()
            )),
            Err(_) => fs::write(expect_path, format!("{}\n", result.trim_end())).unwrap(),
        }
    }

    assert!(failures.is_empty(), "some tests failed:\n{}", failures.join("\n"));
}
